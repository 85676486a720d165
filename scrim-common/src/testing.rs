//! In-memory document for exercising dialogs without a browser

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{EffectHost, KeySubscription, OverflowStyle, ScrollLock, ScrollSurface};

type Handler = Rc<RefCell<Box<dyn FnMut(&str)>>>;

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Handler)>>,
}

struct ListenerHandle {
    id: u64,
    listeners: Rc<Listeners>,
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.listeners
            .entries
            .borrow_mut()
            .retain(|(id, _)| *id != self.id);
    }
}

#[derive(Clone, Default)]
struct FakeBody {
    overflow: Rc<RefCell<OverflowStyle>>,
}

impl ScrollSurface for FakeBody {
    fn overflow(&self) -> OverflowStyle {
        self.overflow.borrow().clone()
    }

    fn set_overflow(&self, value: &OverflowStyle) {
        *self.overflow.borrow_mut() = value.clone();
    }
}

/// Fake document: a body with inline overflow longhands and a list of keydown listeners.
/// Clones share state.
#[derive(Clone)]
pub struct FakeDocument {
    body: FakeBody,
    lock: ScrollLock,
    listeners: Rc<Listeners>,
    accepts_listeners: bool,
}

impl Default for FakeDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDocument {
    pub fn new() -> Self {
        let body = FakeBody::default();
        Self {
            lock: ScrollLock::new(body.clone()),
            body,
            listeners: Rc::new(Listeners::default()),
            accepts_listeners: true,
        }
    }

    /// A document whose keydown subscription always fails.
    pub fn without_listeners() -> Self {
        Self {
            accepts_listeners: false,
            ..Self::new()
        }
    }

    /// Dispatch a keydown to every attached listener.
    pub fn press_key(&self, key: &str) {
        // Snapshot first: handlers may detach listeners while running
        let handlers: Vec<Handler> = self
            .listeners
            .entries
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            (*handler.borrow_mut())(key);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.entries.borrow().len()
    }

    pub fn body_overflow(&self) -> OverflowStyle {
        self.body.overflow()
    }

    pub fn set_body_overflow(&self, value: OverflowStyle) {
        self.body.set_overflow(&value);
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }
}

impl EffectHost for FakeDocument {
    fn scroll_lock(&self) -> ScrollLock {
        self.lock.clone()
    }

    fn subscribe_keydown(&self, handler: Box<dyn FnMut(&str)>) -> Option<KeySubscription> {
        if !self.accepts_listeners {
            return None;
        }
        let id = self.listeners.next_id.get();
        self.listeners.next_id.set(id + 1);
        self.listeners
            .entries
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(handler))));
        Some(KeySubscription::new(ListenerHandle {
            id,
            listeners: self.listeners.clone(),
        }))
    }
}
