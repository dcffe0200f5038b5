/// Error type shared by the controller, the DOM binding and the entry points

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PopupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    ElementNotFound(String),
    #[error("opening {0} was blocked")]
    PopupBlocked(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl PopupError {
    /// Wrap a thrown JS value, keeping its debug rendering
    pub fn from_js(value: JsValue) -> Self {
        PopupError::Js(format!("{:?}", value))
    }
}

impl From<PopupError> for JsValue {
    fn from(err: PopupError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
