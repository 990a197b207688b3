use std::fmt::{Display, Formatter, Result as FmtResult};

use wasm_bindgen::JsValue;

/// Errors surfaced while attaching a zoom controller
#[derive(Debug, Clone, PartialEq)]
pub enum ZoomError {
    ContainerNotFound(String),
    InvalidConfig(String),
    BrowserApi(String),
}

impl Display for ZoomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ZoomError::ContainerNotFound(selector) => {
                write!(f, "Container not found with selector: {}", selector)
            }
            ZoomError::InvalidConfig(reason) => write!(f, "Invalid zoom configuration: {}", reason),
            ZoomError::BrowserApi(reason) => write!(f, "Browser API error: {}", reason),
        }
    }
}

impl std::error::Error for ZoomError {}

impl ZoomError {
    /// Wrap a failed DOM call, keeping the JS error text when there is one.
    pub fn browser(context: &str, err: JsValue) -> Self {
        match err.as_string() {
            Some(detail) => ZoomError::BrowserApi(format!("{}: {}", context, detail)),
            None => ZoomError::BrowserApi(format!("{}: {:?}", context, err)),
        }
    }
}

impl From<ZoomError> for JsValue {
    fn from(error: ZoomError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub type ZoomResult<T> = Result<T, ZoomError>;
