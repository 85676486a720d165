//! scrim-ui - Dialog components for Dioxus
//!
//! `Modal` and `ConfirmDialog` plus the browser effect host that locks page
//! scrolling and listens for Escape while a dialog is open.

pub mod components;
pub mod error;
pub mod host;
pub mod wasm_utils;

pub use components::*;
pub use error::DomError;
pub use host::{use_effect_host, use_effect_host_provider, BrowserDocument, EffectHostContext};
pub use scrim_common::{DialogOptions, ModalSize};
