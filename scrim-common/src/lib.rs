//! scrim-common - Platform-free dialog logic
//!
//! Holds everything about a dialog that does not need a DOM: the visibility
//! lifecycle, the reference-counted scroll lock, the side-effect session and
//! the dismissal router. The Dioxus components in `scrim-ui` drive these types
//! from their hooks.

pub mod confirmation;
pub mod controller;
pub mod dismissal;
pub mod effects;
pub mod scroll_lock;
pub mod size;
pub mod state;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use confirmation::{ActionTone, ConfirmationState, CONFIRMATION_SIZE};
pub use controller::DialogController;
pub use dismissal::{route, BackdropPress, Dismissal, DismissalContext, Gesture, ESCAPE_KEY};
pub use effects::{
    EffectChange, EffectHost, EffectSession, KeySubscription, ListenerGate, SideEffectManager,
};
pub use scroll_lock::{OverflowStyle, ScrollLock, ScrollLockGuard, ScrollSurface};
pub use size::{ModalSize, ParseModalSizeError};
pub use state::{DialogOptions, DialogState, Transition, Visibility, VisibilityLifecycle};
