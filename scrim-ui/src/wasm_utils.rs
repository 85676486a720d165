//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep the closure
//! alive for as long as it is attached. `closure.forget()` leaks it and leaves
//! the listener attached forever, so instead the closure lives in a struct
//! whose `Drop` removes the listener:
//!
//! ```ignore
//! // Listener is attached when DocumentEventListener is created
//! let listener = DocumentEventListener::new(document, "keydown", callback)?;
//!
//! // Listener is removed when `listener` is dropped
//! drop(listener);
//! ```
//!
//! Dialogs wrap the listener in a `KeySubscription` owned by their effect
//! session, so closing or unmounting the dialog detaches it.

use wasm_bindgen_x::prelude::*;

use crate::error::DomError;

/// The current window's document.
pub fn document() -> Result<web_sys_x::Document, DomError> {
    web_sys_x::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// The current document's `<body>`.
pub fn body() -> Result<web_sys_x::HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DocumentEventListener {
    /// Attaches `callback` for `event_name` on the document.
    pub fn new(
        document: web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Result<Self, DomError> {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .map_err(|e| DomError::js("addEventListener", e))?;

        Ok(Self {
            document,
            event_name,
            callback,
        })
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Read a string property off a JS event object (e.g. `KeyboardEvent.key`).
pub fn event_string(event: &JsValue, property: &str) -> Option<String> {
    js_sys_x::Reflect::get(event, &property.into())
        .ok()
        .and_then(|value| value.as_string())
}
