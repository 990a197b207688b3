//! DOM glue for the zoom controller.

pub mod mount;
pub mod scroll;

pub use mount::{
    CONTENT_WRAPPER_CLASS, ContentMount, INTERACTIVE_SELECTOR, is_interactive_target, return_children,
};
pub use scroll::ScrollRestorer;
