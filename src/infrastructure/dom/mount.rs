use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, Node};

use crate::domain::errors::{ZoomError, ZoomResult};
use crate::domain::logging::LogComponent;
use crate::domain::viewport::{ContainerSize, Point, ViewportTransform};
use crate::log_warn;

const COMPONENT: LogComponent = LogComponent::Infrastructure("ContentMount");

pub const CONTENT_WRAPPER_CLASS: &str = "zoom-content-wrapper";

/// Targets that must stay clickable: no drag, no double-click reset.
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, select, textarea";

/// Container inline styles touched by the mount, restored on unmount
const MANAGED_CONTAINER_STYLES: [&str; 3] = ["overflow", "position", "cursor"];

/// Owned handle to the content node wrapped around the container's children
pub struct ContentMount {
    container: HtmlElement,
    content: HtmlElement,
    saved_styles: Vec<(&'static str, String)>,
    transition: String,
}

impl ContentMount {
    /// Move every child of `container` into a new transform-bearing wrapper.
    /// On failure the container is left as it was found.
    pub fn mount(document: &Document, container: HtmlElement, transition: String) -> ZoomResult<Self> {
        let style = container.style();
        let saved_styles = MANAGED_CONTAINER_STYLES
            .iter()
            .map(|name| (*name, style.get_property_value(name).unwrap_or_default()))
            .collect();

        let content = document
            .create_element("div")
            .map_err(|e| ZoomError::browser("create content wrapper", e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ZoomError::BrowserApi("content wrapper is not an HtmlElement".into()))?;
        content.set_class_name(CONTENT_WRAPPER_CLASS);

        let content_style = content.style();
        for (name, value) in [
            ("width", "100%"),
            ("height", "100%"),
            ("transform-origin", "0 0"),
            ("will-change", "transform"),
            ("transition", transition.as_str()),
        ] {
            content_style
                .set_property(name, value)
                .map_err(|e| ZoomError::browser("style content wrapper", e))?;
        }

        while let Some(child) = container.first_child() {
            if let Err(err) = content.append_child(&child) {
                return_children(&content, &container);
                return Err(ZoomError::browser("move child into wrapper", err));
            }
        }
        if let Err(err) = container.append_child(&content) {
            return_children(&content, &container);
            return Err(ZoomError::browser("append content wrapper", err));
        }

        let mount = Self { container, content, saved_styles, transition };
        if let Err(err) = style
            .set_property("overflow", "hidden")
            .and_then(|_| style.set_property("position", "relative"))
        {
            mount.unmount();
            return Err(ZoomError::browser("style container", err));
        }
        Ok(mount)
    }

    /// Exact inverse of [`ContentMount::mount`].
    pub fn unmount(self) {
        let container_node: &Node = self.container.as_ref();
        let content_node: &Node = self.content.as_ref();
        if self.content.parent_node().as_ref() == Some(container_node) {
            while let Some(child) = self.content.first_child() {
                if let Err(err) = self.container.insert_before(&child, Some(content_node)) {
                    report("move child out of wrapper", err);
                    break;
                }
            }
            if let Err(err) = self.container.remove_child(&self.content) {
                report("remove content wrapper", err);
            }
        }

        for (name, _) in &self.saved_styles {
            self.restore_style(name);
        }
    }

    pub fn apply_transform(&self, transform: &ViewportTransform) {
        if let Err(err) = self
            .content
            .style()
            .set_property("transform", &transform.css_transform())
        {
            report("write transform", err);
        }
    }

    /// Dragging follows the pointer immediately; otherwise transform changes are eased.
    pub fn set_transition_enabled(&self, enabled: bool) {
        let value = if enabled { self.transition.as_str() } else { "none" };
        if let Err(err) = self.content.style().set_property("transition", value) {
            report("write transition", err);
        }
    }

    pub fn set_grabbing(&self, grabbing: bool) {
        if !grabbing {
            self.restore_style("cursor");
        } else if let Err(err) = self.container.style().set_property("cursor", "grabbing") {
            report("write cursor", err);
        }
    }

    /// Put back the inline value a managed container style had before mounting.
    fn restore_style(&self, name: &str) {
        let saved = self
            .saved_styles
            .iter()
            .find(|(saved, _)| *saved == name)
            .map_or("", |(_, value)| value.as_str());
        let style = self.container.style();
        let result = if saved.is_empty() {
            style.remove_property(name).map(|_| ())
        } else {
            style.set_property(name, saved)
        };
        if let Err(err) = result {
            report("restore container style", err);
        }
    }

    pub fn container_size(&self) -> ContainerSize {
        let rect = self.container.get_bounding_client_rect();
        ContainerSize::new(rect.width(), rect.height())
    }

    pub fn to_container_point(&self, client_x: f64, client_y: f64) -> Point {
        let rect = self.container.get_bounding_client_rect();
        Point::new(client_x - rect.left(), client_y - rect.top())
    }
}

/// Move every child of `wrapper` back to the front of `container`, keeping their order.
pub fn return_children(wrapper: &Node, container: &Node) {
    while let Some(child) = wrapper.last_child() {
        if let Err(err) = container.insert_before(&child, container.first_child().as_ref()) {
            report("return child to container", err);
            break;
        }
    }
}

fn report(action: &str, err: JsValue) {
    log_warn!(COMPONENT, "Failed to {}: {:?}", action, err);
}

/// True when the event target is, or sits inside, a link, button or form control.
pub fn is_interactive_target(target: Option<EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}
