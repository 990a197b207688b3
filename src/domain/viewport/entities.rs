use super::config::ZoomConfig;
use super::value_objects::{ContainerSize, Point, ViewportTransform};

/// Active pointer drag: where it started and the translation at that moment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_pointer: Point,
    pub start_translate: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Entity - zoom/pan state of one container
#[derive(Debug, Clone)]
pub struct ZoomState {
    config: ZoomConfig,
    transform: ViewportTransform,
    drag: DragState,
}

impl ZoomState {
    pub fn new(config: ZoomConfig) -> Self {
        Self { config, transform: ViewportTransform::identity(), drag: DragState::Idle }
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    /// Zoom by `delta` keeping the content point under `anchor` fixed.
    /// Returns `false` when the clamped scale is unchanged.
    pub fn zoom_at(&mut self, delta: f64, anchor: Point, size: ContainerSize) -> bool {
        let old = self.transform;
        let new_scale = self.config.clamp_scale(old.scale + delta);
        if new_scale == old.scale {
            return false;
        }

        let content = old.to_content(anchor);
        self.transform = ViewportTransform::new(
            new_scale,
            anchor.x - content.x * new_scale,
            anchor.y - content.y * new_scale,
        )
        .constrained(size);
        true
    }

    pub fn zoom_at_center(&mut self, delta: f64, size: ContainerSize) -> bool {
        self.zoom_at(delta, size.center(), size)
    }

    /// Set the scale in place; translation is only re-clamped.
    pub fn set_zoom_level(&mut self, level: f64, size: ContainerSize) {
        self.transform = ViewportTransform {
            scale: self.config.clamp_scale(level),
            ..self.transform
        }
        .constrained(size);
    }

    /// Replace the whole transform, e.g. when restoring a saved view.
    pub fn set_transform(&mut self, transform: ViewportTransform, size: ContainerSize) {
        self.transform = ViewportTransform {
            scale: self.config.clamp_scale(transform.scale),
            ..transform
        }
        .constrained(size);
    }

    pub fn reset(&mut self) {
        self.transform = ViewportTransform::identity();
    }

    /// Idle -> Dragging. Only zoomed content outside interactive elements can be dragged.
    pub fn begin_drag(&mut self, pointer: Point, over_interactive: bool) -> bool {
        if !self.transform.is_zoomed() || over_interactive {
            return false;
        }
        self.drag = DragState::Dragging(DragSession {
            start_pointer: pointer,
            start_translate: Point::new(self.transform.translate_x, self.transform.translate_y),
        });
        true
    }

    pub fn drag_to(&mut self, pointer: Point, size: ContainerSize) -> bool {
        let DragState::Dragging(session) = self.drag else {
            return false;
        };
        self.transform = ViewportTransform {
            translate_x: session.start_translate.x + (pointer.x - session.start_pointer.x),
            translate_y: session.start_translate.y + (pointer.y - session.start_pointer.y),
            ..self.transform
        }
        .constrained(size);
        true
    }

    /// Dragging -> Idle
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.drag = DragState::Idle;
        was_dragging
    }
}
