use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - 2D point in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Value Object - container bounding box size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Value Object - transform applied to the content node.
///
/// Translation is expressed in unscaled container pixels and applied before the scale,
/// with the transform origin at the content's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewportTransform {
    pub const fn identity() -> Self {
        Self { scale: 1.0, translate_x: 0.0, translate_y: 0.0 }
    }

    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self { scale, translate_x, translate_y }
    }

    pub fn is_zoomed(&self) -> bool {
        self.scale > 1.0
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Map a container-relative point into unscaled content coordinates
    pub fn to_content(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.translate_x) / self.scale,
            (point.y - self.translate_y) / self.scale,
        )
    }

    /// Map a content point back into container coordinates
    pub fn to_container(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale + self.translate_x,
            point.y * self.scale + self.translate_y,
        )
    }

    /// Allowed translation range `(min_x, min_y)`; the maximum is always `0` on both axes.
    pub fn translation_floor(&self, size: ContainerSize) -> Point {
        Point::new(
            size.width - size.width * self.scale,
            size.height - size.height * self.scale,
        )
    }

    /// Force the translation back inside the scaled content bounds.
    pub fn constrained(self, size: ContainerSize) -> Self {
        if self.scale <= 1.0 {
            return Self { translate_x: 0.0, translate_y: 0.0, ..self };
        }
        let floor = self.translation_floor(size);
        Self {
            translate_x: self.translate_x.max(floor.x).min(0.0),
            translate_y: self.translate_y.max(floor.y).min(0.0),
            ..self
        }
    }

    /// CSS `transform` value for the content node
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

/// Keyboard shortcuts recognised while the zoom modifier is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum ZoomShortcut {
    #[display(fmt = "Zoom in")]
    #[strum(serialize = "+", serialize = "=")]
    ZoomIn,
    #[display(fmt = "Zoom out")]
    #[strum(serialize = "-")]
    ZoomOut,
    #[display(fmt = "Reset")]
    #[strum(serialize = "0")]
    Reset,
}

/// Modifier keys held during an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false, meta: false };
    pub const CTRL: Modifiers = Modifiers { ctrl: true, meta: false };

    /// Ctrl everywhere, Command on macOS.
    pub fn zoom_held(&self) -> bool {
        self.ctrl || self.meta
    }
}
