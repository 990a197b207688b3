use page_zoom_wasm::domain::viewport::{
    ContainerSize, Modifiers, Point, ZoomConfig, ZoomInput, ZoomInteractionService, ZoomState,
};

const SIZE: ContainerSize = ContainerSize { width: 400.0, height: 300.0 };

fn wheel(delta_y: f64, modifiers: Modifiers) -> ZoomInput {
    ZoomInput::Wheel { delta_y, pointer: Point::new(120.0, 80.0), modifiers }
}

#[test]
fn plain_wheel_passes_through() {
    let service = ZoomInteractionService::new();
    let mut state = ZoomState::new(ZoomConfig::default());

    let outcome = service.handle(&mut state, &wheel(-120.0, Modifiers::NONE), SIZE);

    assert!(outcome.is_ignored());
    assert_eq!(state.scale(), 1.0);
}

#[test]
fn wheel_down_zooms_out_wheel_up_zooms_in() {
    let service = ZoomInteractionService::new();
    let mut state = ZoomState::new(ZoomConfig::default());

    service.handle(&mut state, &wheel(-120.0, Modifiers::CTRL), SIZE);
    service.handle(&mut state, &wheel(-120.0, Modifiers::CTRL), SIZE);
    assert!((state.scale() - 1.2).abs() < 1e-9);

    service.handle(&mut state, &wheel(120.0, Modifiers::CTRL), SIZE);
    assert!((state.scale() - 1.1).abs() < 1e-9);
}

#[test]
fn ctrl_wheel_at_limit_suppresses_without_render() {
    let service = ZoomInteractionService::new();
    let mut state = ZoomState::new(ZoomConfig::default());

    let outcome = service.handle(&mut state, &wheel(120.0, Modifiers::CTRL), SIZE);

    assert!(outcome.suppress_default);
    assert!(outcome.restore_scroll);
    assert!(!outcome.render);
    assert_eq!(state.scale(), 1.0);
}

#[test]
fn custom_step_is_used() {
    let service = ZoomInteractionService::new();
    let config = ZoomConfig { zoom_step: 0.5, ..ZoomConfig::default() };
    let mut state = ZoomState::new(config);

    service.handle(&mut state, &wheel(-1.0, Modifiers::CTRL), SIZE);
    assert_eq!(state.scale(), 1.5);
}
