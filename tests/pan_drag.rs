use page_zoom_wasm::domain::viewport::{
    ContainerSize, DragPhase, DragState, Point, ViewportTransform, ZoomConfig, ZoomInput,
    ZoomInteractionService, ZoomState,
};

const SIZE: ContainerSize = ContainerSize { width: 400.0, height: 300.0 };

fn zoomed_state() -> ZoomState {
    let mut state = ZoomState::new(ZoomConfig::default());
    state.set_transform(ViewportTransform::new(2.0, -200.0, -150.0), SIZE);
    state
}

#[test]
fn drag_moves_by_pointer_delta() {
    let service = ZoomInteractionService::new();
    let mut state = zoomed_state();

    let down = service.handle(
        &mut state,
        &ZoomInput::PointerDown { pointer: Point::new(500.0, 400.0), over_interactive: false },
        SIZE,
    );
    assert!(down.suppress_default);
    assert_eq!(down.drag, Some(DragPhase::Started));
    assert!(state.is_dragging());

    // Intermediate moves do not accumulate: the delta is always taken from the drag start.
    service.handle(&mut state, &ZoomInput::PointerMove { pointer: Point::new(510.0, 390.0) }, SIZE);
    let moved = service.handle(
        &mut state,
        &ZoomInput::PointerMove { pointer: Point::new(550.0, 420.0) },
        SIZE,
    );
    assert!(moved.render);

    let up = service.handle(&mut state, &ZoomInput::PointerUp, SIZE);
    assert_eq!(up.drag, Some(DragPhase::Ended));
    assert_eq!(state.drag_state(), DragState::Idle);

    let t = state.transform();
    assert_eq!(t.scale, 2.0);
    assert_eq!((t.translate_x, t.translate_y), (-150.0, -130.0));
}

#[test]
fn drag_is_clamped_to_content_edges() {
    let mut state = zoomed_state();
    assert!(state.begin_drag(Point::new(0.0, 0.0), false));
    assert!(state.drag_to(Point::new(1000.0, -1000.0), SIZE));

    let t = state.transform();
    assert_eq!((t.translate_x, t.translate_y), (0.0, -300.0));
}

#[test]
fn pointer_down_on_link_opens_no_session() {
    let service = ZoomInteractionService::new();
    let mut state = zoomed_state();
    let before = state.transform();

    let down = service.handle(
        &mut state,
        &ZoomInput::PointerDown { pointer: Point::new(10.0, 10.0), over_interactive: true },
        SIZE,
    );
    assert!(down.is_ignored());
    assert!(!state.is_dragging());

    let moved = service.handle(
        &mut state,
        &ZoomInput::PointerMove { pointer: Point::new(90.0, 70.0) },
        SIZE,
    );
    assert!(!moved.render);
    assert_eq!(state.transform(), before);
}

#[test]
fn unzoomed_content_does_not_start_drag() {
    let mut state = ZoomState::new(ZoomConfig::default());
    assert!(!state.begin_drag(Point::new(10.0, 10.0), false));
    assert!(!state.drag_to(Point::new(60.0, 60.0), SIZE));
    assert_eq!(state.transform(), ViewportTransform::identity());
}

#[test]
fn pointer_up_without_session_is_a_no_op() {
    let service = ZoomInteractionService::new();
    let mut state = zoomed_state();
    let up = service.handle(&mut state, &ZoomInput::PointerUp, SIZE);
    assert!(up.is_ignored());
}
