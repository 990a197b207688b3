//! Page-level auto attach: one controller for the `[data-zoom-container]` element, if present.

use std::cell::RefCell;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

use crate::application::ZoomController;
use crate::domain::logging::LogComponent;
use crate::domain::viewport::{DEFAULT_CONTAINER_SELECTOR, ZoomOptions};
use crate::log_debug;

thread_local! {
    static PAGE_CONTROLLER: RefCell<Option<ZoomController>> = const { RefCell::new(None) };
}

/// Attach now, or on `DOMContentLoaded` while the document is still loading.
pub fn attach_when_ready() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let target: &EventTarget = document.as_ref();
        EventListener::once(target, "DOMContentLoaded", |_| attach_page_controller()).forget();
    } else {
        attach_page_controller();
    }
}

fn attach_page_controller() {
    let has_container = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(DEFAULT_CONTAINER_SELECTOR).ok().flatten())
        .is_some();
    if !has_container {
        log_debug!(
            LogComponent::Presentation("Page"),
            "No {} on this page, zoom not attached",
            DEFAULT_CONTAINER_SELECTOR
        );
        return;
    }

    let mut controller = ZoomController::new(ZoomOptions::default());
    if controller.init() {
        let previous = PAGE_CONTROLLER.with(|slot| slot.borrow_mut().replace(controller));
        drop(previous);
    }
}

/// Tear down the page controller created at start-up.
#[wasm_bindgen(js_name = detachPageZoom)]
pub fn detach_page_zoom() {
    let controller = PAGE_CONTROLLER.with(|slot| slot.borrow_mut().take());
    drop(controller);
}

/// Zoom level of the page controller, `undefined` when none is attached.
#[wasm_bindgen(js_name = pageZoomLevel)]
pub fn page_zoom_level() -> Option<f64> {
    PAGE_CONTROLLER.with(|slot| slot.borrow().as_ref().map(ZoomController::zoom_level))
}
