use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent, WheelEvent};

use crate::domain::errors::{ZoomError, ZoomResult};
use crate::domain::logging::LogComponent;
use crate::domain::viewport::{
    AttributeOverrides, DragPhase, InputOutcome, Modifiers, Point, ViewportTransform, ZoomConfig,
    ZoomInput, ZoomInteractionService, ZoomOptions, ZoomState,
};
use crate::event_utils::{EventOptions, EventSubscriptions, listen};
use crate::infrastructure::dom::{ContentMount, ScrollRestorer, is_interactive_target};
use crate::{log_debug, log_error, log_info, log_warn};

const COMPONENT: LogComponent = LogComponent::Application("ZoomController");

/// State shared between the controller and its event listeners
struct ControllerCore {
    state: ZoomState,
    mount: ContentMount,
    scroll: ScrollRestorer,
    service: ZoomInteractionService,
}

impl ControllerCore {
    fn dispatch(&mut self, input: ZoomInput) -> InputOutcome {
        let size = self.mount.container_size();
        let outcome = self.service.handle(&mut self.state, &input, size);
        self.apply(outcome);
        outcome
    }

    fn apply(&mut self, outcome: InputOutcome) {
        if outcome.render {
            self.render();
        }
        match outcome.drag {
            Some(DragPhase::Started) => {
                self.mount.set_transition_enabled(false);
                self.mount.set_grabbing(true);
            }
            Some(DragPhase::Ended) => {
                self.mount.set_transition_enabled(true);
                self.mount.set_grabbing(false);
            }
            None => {}
        }
        if outcome.restore_scroll {
            self.scroll.schedule();
        }
    }

    fn render(&self) {
        self.mount.apply_transform(&self.state.transform());
    }
}

struct Attached {
    core: Rc<RefCell<ControllerCore>>,
    // Kept outside the cell: dropping it releases every listener closure and with
    // them every other reference to `core`.
    subscriptions: EventSubscriptions,
}

/// Pan/zoom controller bound to one container element.
///
/// Inert until [`ZoomController::init`] succeeds. Dropping the controller tears it down.
pub struct ZoomController {
    options: ZoomOptions,
    attached: Option<Attached>,
}

impl ZoomController {
    pub fn new(options: ZoomOptions) -> Self {
        Self { options, attached: None }
    }

    /// Locate the container, wrap its content and start listening.
    /// Failures are logged as warnings and leave the controller inert.
    pub fn init(&mut self) -> bool {
        if self.attached.is_some() {
            log_warn!(COMPONENT, "init called on an attached controller, ignoring");
            return true;
        }
        match self.attach() {
            Ok(attached) => {
                log_info!(
                    COMPONENT,
                    "Attached to '{}' with {} listeners",
                    self.options.selector(),
                    attached.subscriptions.len()
                );
                self.attached = Some(attached);
                true
            }
            Err(err) => {
                log_warn!(COMPONENT, "{}", err);
                false
            }
        }
    }

    fn attach(&self) -> ZoomResult<Attached> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ZoomError::BrowserApi("document not available".into()))?;

        let selector = self.options.selector();
        let container = document
            .query_selector(selector)
            .map_err(|e| ZoomError::browser("query container", e))?
            .ok_or_else(|| ZoomError::ContainerNotFound(selector.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ZoomError::ContainerNotFound(selector.to_string()))?;

        let attributes = AttributeOverrides::from_lookup(|name| container.get_attribute(name));
        let config = ZoomConfig::resolve(&self.options, &attributes)?;
        log_debug!(COMPONENT, "Resolved config: {:?}", config);

        let mount = ContentMount::mount(&document, container.clone(), config.transition_css())?;
        let core = ControllerCore {
            state: ZoomState::new(config),
            mount,
            scroll: ScrollRestorer::new(),
            service: ZoomInteractionService::new(),
        };
        core.render();

        let core = Rc::new(RefCell::new(core));
        let subscriptions = subscribe(&document, &container, &core);
        Ok(Attached { core, subscriptions })
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    pub fn transform(&self) -> Option<ViewportTransform> {
        self.attached
            .as_ref()
            .map(|attached| attached.core.borrow().state.transform())
    }

    pub fn zoom_level(&self) -> f64 {
        self.transform().unwrap_or_default().scale
    }

    pub fn is_dragging(&self) -> bool {
        self.attached
            .as_ref()
            .is_some_and(|attached| attached.core.borrow().state.is_dragging())
    }

    /// Set the scale in place, without tracking any anchor point.
    pub fn set_zoom_level(&mut self, level: f64) {
        self.with_core(|core| {
            let size = core.mount.container_size();
            core.state.set_zoom_level(level, size);
            core.render();
        });
    }

    pub fn reset(&mut self) {
        self.with_core(|core| {
            core.state.reset();
            core.apply(InputOutcome { render: true, restore_scroll: true, ..InputOutcome::IGNORED });
        });
    }

    pub fn zoom_in(&mut self) {
        self.zoom_at_center(1.0);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_at_center(-1.0);
    }

    fn zoom_at_center(&mut self, direction: f64) {
        self.with_core(|core| {
            let size = core.mount.container_size();
            let delta = direction * core.state.config().zoom_step;
            let render = core.state.zoom_at_center(delta, size);
            core.apply(InputOutcome { render, restore_scroll: true, ..InputOutcome::IGNORED });
        });
    }

    fn with_core(&mut self, f: impl FnOnce(&mut ControllerCore)) {
        match &self.attached {
            Some(attached) => f(&mut *attached.core.borrow_mut()),
            None => {
                log_debug!(COMPONENT, "Controller is not attached, ignoring call");
            }
        }
    }

    /// Release all listeners and put the container's children back where they were.
    pub fn destroy(&mut self) {
        let Some(mut attached) = self.attached.take() else {
            return;
        };
        attached.subscriptions.clear();
        match Rc::try_unwrap(attached.core) {
            Ok(core) => {
                let mut core = core.into_inner();
                core.scroll.cancel();
                core.mount.unmount();
                log_info!(COMPONENT, "Detached from '{}'", self.options.selector());
            }
            Err(_) => {
                log_error!(COMPONENT, "Controller state still referenced after teardown");
            }
        }
    }
}

impl Drop for ZoomController {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn subscribe(
    document: &Document,
    container: &HtmlElement,
    core: &Rc<RefCell<ControllerCore>>,
) -> EventSubscriptions {
    let document: &EventTarget = document.as_ref();
    let container: &EventTarget = container.as_ref();
    let mut subscriptions = EventSubscriptions::new();

    let shared = Rc::clone(core);
    subscriptions.push(listen(document, ev::wheel, &EventOptions::active(), move |event: &WheelEvent| {
        with_shared(&shared, |core| {
            let pointer = core
                .mount
                .to_container_point(f64::from(event.client_x()), f64::from(event.client_y()));
            let outcome = core.dispatch(ZoomInput::Wheel {
                delta_y: event.delta_y(),
                pointer,
                modifiers: modifiers_of(event),
            });
            suppress(event, outcome, true);
        });
    }));

    let shared = Rc::clone(core);
    subscriptions.push(listen(document, ev::keydown, &EventOptions::active(), move |event: &KeyboardEvent| {
        with_shared(&shared, |core| {
            let outcome = core.dispatch(ZoomInput::Key {
                key: event.key(),
                modifiers: Modifiers { ctrl: event.ctrl_key(), meta: event.meta_key() },
            });
            suppress(event, outcome, true);
        });
    }));

    let shared = Rc::clone(core);
    subscriptions.push(listen(container, ev::mousedown, &EventOptions::active(), move |event: &MouseEvent| {
        with_shared(&shared, |core| {
            let outcome = core.dispatch(ZoomInput::PointerDown {
                pointer: client_point(event),
                over_interactive: is_interactive_target(event.target()),
            });
            suppress(event, outcome, false);
        });
    }));

    let shared = Rc::clone(core);
    subscriptions.push(listen(document, ev::mousemove, &EventOptions::default(), move |event: &MouseEvent| {
        with_shared(&shared, |core| {
            if core.state.is_dragging() {
                core.dispatch(ZoomInput::PointerMove { pointer: client_point(event) });
            }
        });
    }));

    let shared = Rc::clone(core);
    subscriptions.push(listen(document, ev::mouseup, &EventOptions::default(), move |_event: &MouseEvent| {
        with_shared(&shared, |core| {
            core.dispatch(ZoomInput::PointerUp);
        });
    }));

    let shared = Rc::clone(core);
    subscriptions.push(listen(container, ev::dblclick, &EventOptions::active(), move |event: &MouseEvent| {
        with_shared(&shared, |core| {
            let outcome = core.dispatch(ZoomInput::DoubleClick {
                over_interactive: is_interactive_target(event.target()),
            });
            suppress(event, outcome, false);
        });
    }));

    subscriptions
}

fn with_shared(core: &Rc<RefCell<ControllerCore>>, f: impl FnOnce(&mut ControllerCore)) {
    match core.try_borrow_mut() {
        Ok(mut core) => f(&mut *core),
        Err(_) => {
            log_debug!(COMPONENT, "Re-entrant event while state is borrowed, skipping");
        }
    }
}

fn suppress(event: &Event, outcome: InputOutcome, stop_propagation: bool) {
    if outcome.suppress_default {
        event.prevent_default();
        if stop_propagation {
            event.stop_propagation();
        }
    }
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn modifiers_of(event: &MouseEvent) -> Modifiers {
    Modifiers { ctrl: event.ctrl_key(), meta: event.meta_key() }
}
