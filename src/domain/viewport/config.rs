//! Zoom configuration: defaults, caller overrides and per-element data attributes.

use serde::Deserialize;

use crate::domain::errors::{ZoomError, ZoomResult};
use crate::domain::logging::LogComponent;
use crate::log_warn;

pub const DEFAULT_MIN_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ZOOM: f64 = 3.0;
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;
/// Transition duration in seconds
pub const DEFAULT_SMOOTHNESS: f64 = 0.1;
pub const DEFAULT_CONTAINER_SELECTOR: &str = "[data-zoom-container]";

pub const ATTR_ZOOM_MIN: &str = "data-zoom-min";
pub const ATTR_ZOOM_MAX: &str = "data-zoom-max";
pub const ATTR_ZOOM_STEP: &str = "data-zoom-step";

/// Caller-supplied overrides. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoomOptions {
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
    pub zoom_step: Option<f64>,
    pub smoothness: Option<f64>,
    pub container_selector: Option<String>,
}

impl ZoomOptions {
    pub fn selector(&self) -> &str {
        self.container_selector
            .as_deref()
            .unwrap_or(DEFAULT_CONTAINER_SELECTOR)
    }
}

/// Overrides read from the container's `data-zoom-*` attributes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttributeOverrides {
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
    pub zoom_step: Option<f64>,
}

impl AttributeOverrides {
    /// Read the overrides through an attribute lookup, e.g. `|name| element.get_attribute(name)`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            min_zoom: parse_attribute(ATTR_ZOOM_MIN, lookup(ATTR_ZOOM_MIN)),
            max_zoom: parse_attribute(ATTR_ZOOM_MAX, lookup(ATTR_ZOOM_MAX)),
            zoom_step: parse_attribute(ATTR_ZOOM_STEP, lookup(ATTR_ZOOM_STEP)),
        }
    }
}

fn parse_attribute(name: &str, raw: Option<String>) -> Option<f64> {
    let raw = raw?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            log_warn!(
                LogComponent::Domain("ZoomConfig"),
                "Ignoring {}=\"{}\": not a finite number",
                name,
                raw
            );
            None
        }
    }
}

/// Resolved, immutable configuration of one controller
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    pub smoothness: f64,
    pub container_selector: String,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            smoothness: DEFAULT_SMOOTHNESS,
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
        }
    }
}

impl ZoomConfig {
    /// Defaults, then caller options, then element attributes.
    pub fn resolve(options: &ZoomOptions, attributes: &AttributeOverrides) -> ZoomResult<Self> {
        let defaults = Self::default();
        let config = Self {
            min_zoom: attributes
                .min_zoom
                .or(options.min_zoom)
                .unwrap_or(defaults.min_zoom),
            max_zoom: attributes
                .max_zoom
                .or(options.max_zoom)
                .unwrap_or(defaults.max_zoom),
            zoom_step: attributes
                .zoom_step
                .or(options.zoom_step)
                .unwrap_or(defaults.zoom_step),
            smoothness: options.smoothness.unwrap_or(defaults.smoothness),
            container_selector: options.selector().to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ZoomResult<()> {
        if !self.min_zoom.is_finite() || self.min_zoom <= 0.0 {
            return Err(ZoomError::InvalidConfig(format!(
                "minZoom must be a positive number, got {}",
                self.min_zoom
            )));
        }
        if !self.max_zoom.is_finite() || self.max_zoom < self.min_zoom {
            return Err(ZoomError::InvalidConfig(format!(
                "maxZoom {} must not be below minZoom {}",
                self.max_zoom, self.min_zoom
            )));
        }
        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            return Err(ZoomError::InvalidConfig(format!(
                "zoomStep must be a positive number, got {}",
                self.zoom_step
            )));
        }
        if !self.smoothness.is_finite() || self.smoothness < 0.0 {
            return Err(ZoomError::InvalidConfig(format!(
                "smoothness must not be negative, got {}",
                self.smoothness
            )));
        }
        Ok(())
    }

    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_zoom).min(self.max_zoom)
    }

    /// CSS `transition` value for the content node while not dragging
    pub fn transition_css(&self) -> String {
        format!("transform {}s ease-out", self.smoothness)
    }
}
