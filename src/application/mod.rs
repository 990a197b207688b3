pub mod zoom_controller;

pub use zoom_controller::*;
