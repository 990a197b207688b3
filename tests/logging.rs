use std::sync::{Arc, Mutex};

use page_zoom_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, get_logger, init_logger};
use page_zoom_wasm::domain::viewport::AttributeOverrides;

#[derive(Clone, Default)]
struct CapturingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        self.entries.lock().unwrap().push(entry);
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= LogLevel::Info
    }
}

#[test]
fn bad_attributes_are_reported_and_debug_is_filtered() {
    let logger = CapturingLogger::default();
    init_logger(Box::new(logger.clone()));

    let overrides = AttributeOverrides::from_lookup(|name| {
        (name == "data-zoom-step").then(|| "fast".to_string())
    });
    assert_eq!(overrides.zoom_step, None);

    get_logger().debug(LogComponent::Domain("Test"), "dropped by the level filter");

    let entries = logger.entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, LogLevel::Warn);
    assert!(entries[0].message.contains("data-zoom-step"));
    assert_eq!(entries[0].component.to_string(), "DOM:ZoomConfig");
}

#[test]
fn component_labels_name_the_layer() {
    assert_eq!(LogComponent::Infrastructure("ContentMount").to_string(), "INF:ContentMount");
    assert_eq!(LogComponent::Application("ZoomController").to_string(), "APP:ZoomController");
}
