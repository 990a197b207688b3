//! Pan/zoom widget for page content, compiled to WebAssembly.
//!
//! Ctrl (or Command) + wheel zooms towards the cursor, Ctrl + `+`/`-`/`0` zoom around the
//! container centre or reset, dragging pans zoomed content and a double-click resets.

use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

pub use application::ZoomController;
pub use domain::viewport::{ViewportTransform, ZoomConfig, ZoomOptions};

/// Module start: logging, then the page controller.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let logger = if cfg!(debug_assertions) {
        ConsoleLogger::new_development()
    } else {
        ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(logger));
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    log_info!(LogComponent::Presentation("Initialize"), "page zoom module loaded");

    presentation::page::attach_when_ready();
}
