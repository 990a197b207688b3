use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false }
    }
}

impl EventOptions {
    /// Listener that may call `prevent_default`.
    pub fn active() -> Self {
        Self { passive: false, ..Self::default() }
    }
}

impl From<&EventOptions> for EventListenerOptions {
    fn from(options: &EventOptions) -> Self {
        EventListenerOptions {
            phase: if options.capture {
                EventListenerPhase::Capture
            } else {
                EventListenerPhase::Bubble
            },
            passive: options.passive,
        }
    }
}

/// Attach a typed listener; dropping the returned handle removes it.
pub fn listen<E>(
    target: &EventTarget,
    event: E,
    options: &EventOptions,
    mut cb: impl FnMut(&E::EventType) + 'static,
) -> EventListener
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let event_name = event.name().to_string();
    EventListener::new_with_options(target, event_name, options.into(), move |ev| {
        if let Some(typed) = ev.dyn_ref::<E::EventType>() {
            cb(typed);
        }
    })
}

/// Listeners owned by one controller instance, released together.
#[derive(Default)]
pub struct EventSubscriptions {
    listeners: Vec<EventListener>,
}

impl EventSubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}
