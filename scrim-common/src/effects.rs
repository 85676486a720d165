//! Document-level side effects of an open dialog
//!
//! An `EffectSession` bundles the scroll-lock hold and the keydown
//! subscription of one open period. Dropping the session ends both, so every
//! exit path (close, unmount, manager dropped) runs the same teardown.

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::{ScrollLock, ScrollLockGuard};

/// Handle for an attached keydown listener. Dropping it detaches the listener.
pub struct KeySubscription {
    _handle: Box<dyn Any>,
}

impl KeySubscription {
    pub fn new(handle: impl Any) -> Self {
        Self {
            _handle: Box::new(handle),
        }
    }
}

/// Performs the document-level effects for dialogs
pub trait EffectHost {
    /// The lock shared by every dialog on this document.
    fn scroll_lock(&self) -> ScrollLock;

    /// Attach a document keydown listener receiving the `KeyboardEvent.key` value.
    /// Returns `None` when no document is available.
    fn subscribe_keydown(&self, handler: Box<dyn FnMut(&str)>) -> Option<KeySubscription>;
}

/// Shared armed flag checked by a listener before it acts.
///
/// Disarmed synchronously at teardown, so a listener whose detachment is
/// delayed by the host still never fires for a closed dialog.
#[derive(Clone, Debug)]
pub struct ListenerGate(Rc<Cell<bool>>);

impl ListenerGate {
    pub fn armed() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_armed(&self) -> bool {
        self.0.get()
    }

    pub fn disarm(&self) {
        self.0.set(false);
    }
}

/// Side effects held during one open period
pub struct EffectSession {
    gate: ListenerGate,
    _keydown: Option<KeySubscription>,
    _scroll: ScrollLockGuard,
}

impl EffectSession {
    /// Lock scrolling and attach the keydown listener.
    pub fn open(host: &dyn EffectHost, mut on_key: impl FnMut(&str) + 'static) -> Self {
        let scroll = host.scroll_lock().acquire();
        let gate = ListenerGate::armed();
        let listener_gate = gate.clone();
        let keydown = host.subscribe_keydown(Box::new(move |key: &str| {
            if listener_gate.is_armed() {
                on_key(key);
            }
        }));
        if keydown.is_none() {
            warn!("No document available, dialog will not react to Escape");
        }

        Self {
            gate,
            _keydown: keydown,
            _scroll: scroll,
        }
    }

    pub fn gate(&self) -> &ListenerGate {
        &self.gate
    }
}

impl Drop for EffectSession {
    fn drop(&mut self) {
        self.gate.disarm();
    }
}

/// What `SideEffectManager::reconcile` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectChange {
    Installed,
    Released,
    Unchanged,
}

/// Keeps at most one `EffectSession` in step with a dialog's visibility
pub struct SideEffectManager {
    host: Rc<dyn EffectHost>,
    session: Option<EffectSession>,
}

impl SideEffectManager {
    pub fn new(host: Rc<dyn EffectHost>) -> Self {
        Self {
            host,
            session: None,
        }
    }

    /// Install effects when `visible` and none are held, release them when not
    /// `visible`. Installing twice is a no-op.
    pub fn reconcile(&mut self, visible: bool, on_key: impl FnMut(&str) + 'static) -> EffectChange {
        match (visible, self.session.is_some()) {
            (true, false) => {
                self.session = Some(EffectSession::open(self.host.as_ref(), on_key));
                debug!("Dialog side effects installed");
                EffectChange::Installed
            }
            (false, true) => {
                self.release();
                EffectChange::Released
            }
            _ => EffectChange::Unchanged,
        }
    }

    /// End the current session, if any. Returns whether one was held.
    pub fn release(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                drop(session);
                debug!("Dialog side effects released");
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}
