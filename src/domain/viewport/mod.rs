//! Zoom/pan viewport: value objects, configuration, the state machine and input handling.

pub mod config;
pub mod entities;
pub mod services;
pub mod value_objects;

pub use config::*;
pub use entities::*;
pub use services::*;
pub use value_objects::*;
