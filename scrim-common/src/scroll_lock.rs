//! Reference-counted page scroll lock
//!
//! Every open dialog holds a `ScrollLockGuard`. The surface is locked when the
//! first guard is taken and restored when the last one drops, so closing one of
//! two stacked dialogs leaves the page locked.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

/// Value written to both overflow longhands while locked
pub const LOCKED_OVERFLOW: &str = "hidden";

/// Inline `overflow-x` / `overflow-y` values of a surface, `None` when unset.
///
/// The longhands are tracked separately so an inline `overflow-y` alone
/// survives a lock cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverflowStyle {
    pub x: Option<String>,
    pub y: Option<String>,
}

impl OverflowStyle {
    /// Both longhands set to `value`, as the `overflow` shorthand would.
    pub fn uniform(value: &str) -> Self {
        Self {
            x: Some(value.to_string()),
            y: Some(value.to_string()),
        }
    }

    pub fn locked() -> Self {
        Self::uniform(LOCKED_OVERFLOW)
    }
}

/// The element whose inline overflow is locked (the document body in a browser).
pub trait ScrollSurface {
    /// Current inline overflow longhands.
    fn overflow(&self) -> OverflowStyle;
    /// Write both longhands. A `None` longhand is removed.
    fn set_overflow(&self, value: &OverflowStyle);
}

struct ScrollLockInner {
    surface: Box<dyn ScrollSurface>,
    holders: Cell<usize>,
    saved: RefCell<OverflowStyle>,
}

impl ScrollLockInner {
    fn acquire(&self) {
        let holders = self.holders.get();
        if holders == 0 {
            *self.saved.borrow_mut() = self.surface.overflow();
            self.surface.set_overflow(&OverflowStyle::locked());
            debug!("Scroll lock applied");
        }
        self.holders.set(holders + 1);
    }

    fn release(&self) {
        let holders = self.holders.get();
        if holders == 0 {
            return;
        }
        self.holders.set(holders - 1);
        if holders == 1 {
            let saved = self.saved.take();
            self.surface.set_overflow(&saved);
            debug!("Scroll lock released");
        }
    }
}

/// Shared handle to one surface's lock. Cloning shares the counter.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<ScrollLockInner>,
}

impl ScrollLock {
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            inner: Rc::new(ScrollLockInner {
                surface: Box::new(surface),
                holders: Cell::new(0),
                saved: RefCell::new(OverflowStyle::default()),
            }),
        }
    }

    /// Take a hold on the lock. The hold ends when the guard drops.
    pub fn acquire(&self) -> ScrollLockGuard {
        self.inner.acquire();
        ScrollLockGuard {
            inner: self.inner.clone(),
        }
    }

    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }
}

/// One hold on a `ScrollLock`
pub struct ScrollLockGuard {
    inner: Rc<ScrollLockInner>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.inner.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Body {
        overflow: Rc<RefCell<OverflowStyle>>,
        writes: Rc<Cell<usize>>,
    }

    impl ScrollSurface for Body {
        fn overflow(&self) -> OverflowStyle {
            self.overflow.borrow().clone()
        }

        fn set_overflow(&self, value: &OverflowStyle) {
            *self.overflow.borrow_mut() = value.clone();
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[test]
    fn test_single_guard() {
        let body = Body::default();
        let lock = ScrollLock::new(body.clone());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        assert_eq!(body.overflow(), OverflowStyle::locked());

        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(body.overflow(), OverflowStyle::default());
    }

    #[test]
    fn test_stacked_guards_keep_lock() {
        let body = Body::default();
        let lock = ScrollLock::new(body.clone());

        let first = lock.acquire();
        let second = lock.acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert_eq!(body.overflow(), OverflowStyle::locked());

        drop(second);
        assert_eq!(body.overflow(), OverflowStyle::default());
        // One write to lock, one to restore
        assert_eq!(body.writes.get(), 2);
    }

    #[test]
    fn test_restores_prior_value() {
        let body = Body::default();
        body.set_overflow(&OverflowStyle::uniform("scroll"));
        let lock = ScrollLock::new(body.clone());

        let guard = lock.acquire();
        assert_eq!(body.overflow(), OverflowStyle::locked());
        drop(guard);
        assert_eq!(body.overflow(), OverflowStyle::uniform("scroll"));
    }

    #[test]
    fn test_restores_single_longhand() {
        let body = Body::default();
        let vertical_only = OverflowStyle {
            x: None,
            y: Some("scroll".to_string()),
        };
        body.set_overflow(&vertical_only);
        let lock = ScrollLock::new(body.clone());

        drop(lock.acquire());
        assert_eq!(body.overflow(), vertical_only);
    }

    #[test]
    fn test_clones_share_counter() {
        let body = Body::default();
        let lock = ScrollLock::new(body.clone());
        let other = lock.clone();

        let guard = other.acquire();
        assert!(lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
    }
}
