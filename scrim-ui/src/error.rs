//! DOM access errors
use thiserror::Error;
use wasm_bindgen_x::JsValue;

/// Failures reaching the browser document
#[derive(Error, Debug)]
pub enum DomError {
    #[error("No window available")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("Document has no body")]
    NoBody,
    /// A DOM call threw
    #[error("{action} failed: {message}")]
    Js {
        action: &'static str,
        message: String,
    },
}

impl DomError {
    pub fn js(action: &'static str, value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js { action, message }
    }
}
