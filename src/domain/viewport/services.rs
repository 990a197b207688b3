use std::str::FromStr;

use super::entities::ZoomState;
use super::value_objects::{ContainerSize, Modifiers, Point, ZoomShortcut};

/// Input observed by the DOM layer, already reduced to what the state machine needs
#[derive(Debug, Clone, PartialEq)]
pub enum ZoomInput {
    /// `pointer` is relative to the container's top-left corner.
    Wheel { delta_y: f64, pointer: Point, modifiers: Modifiers },
    Key { key: String, modifiers: Modifiers },
    /// `pointer` is in client coordinates; only deltas matter while dragging.
    PointerDown { pointer: Point, over_interactive: bool },
    PointerMove { pointer: Point },
    PointerUp,
    DoubleClick { over_interactive: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Started,
    Ended,
}

/// What the DOM layer has to do after an input was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    /// Prevent the browser default and stop propagation.
    pub suppress_default: bool,
    /// The transform changed and must be written to the content node.
    pub render: bool,
    /// Put the page scroll position back on the next animation frame.
    pub restore_scroll: bool,
    pub drag: Option<DragPhase>,
}

impl InputOutcome {
    pub const IGNORED: InputOutcome =
        InputOutcome { suppress_default: false, render: false, restore_scroll: false, drag: None };

    pub fn is_ignored(&self) -> bool {
        *self == Self::IGNORED
    }
}

/// Domain service translating inputs into state transitions
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoomInteractionService;

impl ZoomInteractionService {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, state: &mut ZoomState, input: &ZoomInput, size: ContainerSize) -> InputOutcome {
        match input {
            ZoomInput::Wheel { delta_y, pointer, modifiers } => {
                self.handle_wheel(state, *delta_y, *pointer, *modifiers, size)
            }
            ZoomInput::Key { key, modifiers } => self.handle_key(state, key, *modifiers, size),
            ZoomInput::PointerDown { pointer, over_interactive } => {
                if state.begin_drag(*pointer, *over_interactive) {
                    InputOutcome {
                        suppress_default: true,
                        drag: Some(DragPhase::Started),
                        ..InputOutcome::IGNORED
                    }
                } else {
                    InputOutcome::IGNORED
                }
            }
            ZoomInput::PointerMove { pointer } => InputOutcome {
                render: state.drag_to(*pointer, size),
                ..InputOutcome::IGNORED
            },
            ZoomInput::PointerUp => {
                if state.end_drag() {
                    InputOutcome { drag: Some(DragPhase::Ended), ..InputOutcome::IGNORED }
                } else {
                    InputOutcome::IGNORED
                }
            }
            ZoomInput::DoubleClick { over_interactive } => {
                if *over_interactive {
                    return InputOutcome::IGNORED;
                }
                state.reset();
                InputOutcome {
                    suppress_default: true,
                    render: true,
                    restore_scroll: true,
                    drag: None,
                }
            }
        }
    }

    fn handle_wheel(
        &self,
        state: &mut ZoomState,
        delta_y: f64,
        pointer: Point,
        modifiers: Modifiers,
        size: ContainerSize,
    ) -> InputOutcome {
        if !modifiers.zoom_held() {
            return InputOutcome::IGNORED;
        }
        // Scrolling down zooms out.
        let step = state.config().zoom_step;
        let delta = if delta_y > 0.0 { -step } else { step };
        InputOutcome {
            suppress_default: true,
            render: state.zoom_at(delta, pointer, size),
            restore_scroll: true,
            drag: None,
        }
    }

    fn handle_key(
        &self,
        state: &mut ZoomState,
        key: &str,
        modifiers: Modifiers,
        size: ContainerSize,
    ) -> InputOutcome {
        if !modifiers.zoom_held() {
            return InputOutcome::IGNORED;
        }
        let Ok(shortcut) = ZoomShortcut::from_str(key) else {
            return InputOutcome::IGNORED;
        };
        let step = state.config().zoom_step;
        let render = match shortcut {
            ZoomShortcut::ZoomIn => state.zoom_at_center(step, size),
            ZoomShortcut::ZoomOut => state.zoom_at_center(-step, size),
            ZoomShortcut::Reset => {
                state.reset();
                true
            }
        };
        InputOutcome { suppress_default: true, render, restore_scroll: true, drag: None }
    }
}
