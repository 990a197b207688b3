use gloo::render::{AnimationFrame, request_animation_frame};
use web_sys::Window;

/// Puts the page scroll position back after the browser reacted to a suppressed wheel event.
#[derive(Default)]
pub struct ScrollRestorer {
    pending: Option<AnimationFrame>,
}

impl ScrollRestorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the current scroll offsets and restore them on the next animation frame.
    /// A pending restore is replaced.
    pub fn schedule(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let (left, top) = scroll_offsets(&window);
        self.pending = Some(request_animation_frame(move |_timestamp| {
            window.scroll_to_with_x_and_y(left, top);
        }));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending frame callback, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

fn scroll_offsets(window: &Window) -> (f64, f64) {
    (
        window.scroll_x().unwrap_or_default(),
        window.scroll_y().unwrap_or_default(),
    )
}
