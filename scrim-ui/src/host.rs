//! Browser effect host and the context used to swap it out
//!
//! Dialogs take their `EffectHost` from context and fall back to
//! `BrowserDocument`. Tests and embedders provide their own host with
//! `use_effect_host_provider` higher in the tree.

use std::rc::Rc;

use dioxus::prelude::*;
use scrim_common::{EffectHost, KeySubscription, OverflowStyle, ScrollLock, ScrollSurface};
use tracing::warn;

use crate::error::DomError;
use crate::wasm_utils::{body, document, event_string, DocumentEventListener};

thread_local! {
    /// The page has a single body, so every dialog shares this lock.
    static BODY_SCROLL_LOCK: ScrollLock = ScrollLock::new(BodyScroll);
}

/// The document body's inline `overflow-x` / `overflow-y` styles
pub struct BodyScroll;

const OVERFLOW_X: &str = "overflow-x";
const OVERFLOW_Y: &str = "overflow-y";

impl BodyScroll {
    fn read(&self) -> Result<OverflowStyle, DomError> {
        let style = body()?.style();
        let longhand = |name: &str| -> Result<Option<String>, DomError> {
            let value = style
                .get_property_value(name)
                .map_err(|e| DomError::js("getPropertyValue", e))?;
            Ok((!value.is_empty()).then_some(value))
        };
        Ok(OverflowStyle {
            x: longhand(OVERFLOW_X)?,
            y: longhand(OVERFLOW_Y)?,
        })
    }

    fn write(&self, value: &OverflowStyle) -> Result<(), DomError> {
        let style = body()?.style();
        for (name, longhand) in [(OVERFLOW_X, &value.x), (OVERFLOW_Y, &value.y)] {
            match longhand {
                Some(longhand) => style
                    .set_property(name, longhand)
                    .map_err(|e| DomError::js("setProperty", e))?,
                None => {
                    style
                        .remove_property(name)
                        .map_err(|e| DomError::js("removeProperty", e))?;
                }
            }
        }
        Ok(())
    }
}

impl ScrollSurface for BodyScroll {
    fn overflow(&self) -> OverflowStyle {
        self.read().unwrap_or_else(|e| {
            warn!("Could not read body overflow: {e}");
            OverflowStyle::default()
        })
    }

    fn set_overflow(&self, value: &OverflowStyle) {
        if let Err(e) = self.write(value) {
            warn!("Could not update body overflow: {e}");
        }
    }
}

/// Effect host backed by the real browser document
pub struct BrowserDocument;

impl EffectHost for BrowserDocument {
    fn scroll_lock(&self) -> ScrollLock {
        BODY_SCROLL_LOCK.with(ScrollLock::clone)
    }

    fn subscribe_keydown(&self, mut handler: Box<dyn FnMut(&str)>) -> Option<KeySubscription> {
        let listener = document().and_then(|document| {
            DocumentEventListener::new(document, "keydown", move |event| {
                if let Some(key) = event_string(&event, "key") {
                    handler(&key);
                }
            })
        });

        match listener {
            Ok(listener) => Some(KeySubscription::new(listener)),
            Err(e) => {
                warn!("Could not attach keydown listener: {e}");
                None
            }
        }
    }
}

/// Context carrying the host dialogs use for document effects
#[derive(Clone)]
pub struct EffectHostContext(pub Rc<dyn EffectHost>);

/// Provide an effect host to every dialog below this component.
pub fn use_effect_host_provider(init: impl FnOnce() -> Rc<dyn EffectHost>) -> EffectHostContext {
    use_context_provider(|| EffectHostContext(init()))
}

/// The host from context, or the browser document.
pub fn use_effect_host() -> Rc<dyn EffectHost> {
    use_hook(|| {
        try_consume_context::<EffectHostContext>()
            .map(|ctx| ctx.0)
            .unwrap_or_else(|| Rc::new(BrowserDocument))
    })
}
