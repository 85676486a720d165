//! Maps user gestures to the callback a dialog should invoke

use std::cell::Cell;

/// `KeyboardEvent.key` value that requests a close
pub const ESCAPE_KEY: &str = "Escape";

/// A user gesture on an open dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture<'a> {
    /// Document keydown with the given `KeyboardEvent.key`
    Key(&'a str),
    /// Click that reached the backdrop's handler. `started_in_panel` is set
    /// when the press began inside the panel and was released on the backdrop.
    BackdropClick { started_in_panel: bool },
    /// Header close affordance
    CloseButton,
    /// Footer cancel action
    Cancel,
    /// Footer confirm action
    Confirm,
}

/// Which callback to invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// Call `on_close`
    Close,
    /// Call `on_confirm`
    Confirm,
    Ignore,
}

/// Dialog state a gesture is judged against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissalContext {
    pub visible: bool,
    /// Footer actions are disabled (in-flight confirm)
    pub busy: bool,
    /// A confirm handler was supplied
    pub can_confirm: bool,
}

impl DismissalContext {
    /// Plain open dialog without a footer.
    pub fn open() -> Self {
        Self {
            visible: true,
            busy: false,
            can_confirm: false,
        }
    }
}

/// Decide what a gesture does. Never changes visibility itself: the caller
/// flips `is_open` in response to `Close`.
pub fn route(gesture: Gesture<'_>, ctx: DismissalContext) -> Dismissal {
    if !ctx.visible {
        return Dismissal::Ignore;
    }
    match gesture {
        Gesture::Key(key) if key == ESCAPE_KEY => Dismissal::Close,
        Gesture::Key(_) => Dismissal::Ignore,
        Gesture::BackdropClick {
            started_in_panel: true,
        } => Dismissal::Ignore,
        Gesture::BackdropClick {
            started_in_panel: false,
        } => Dismissal::Close,
        Gesture::CloseButton => Dismissal::Close,
        Gesture::Cancel if ctx.busy => Dismissal::Ignore,
        Gesture::Cancel => Dismissal::Close,
        Gesture::Confirm if ctx.busy || !ctx.can_confirm => Dismissal::Ignore,
        Gesture::Confirm => Dismissal::Confirm,
    }
}

/// Tracks whether the current click started inside the panel.
///
/// The panel stops `mousedown`/`click` propagation, so the backdrop's
/// `onclick` only fires for clicks whose target is the backdrop itself. A
/// drag that starts in the panel and ends on the backdrop still produces such
/// a click; the panel's `onmousedown` calls `press_panel` so that click reads
/// `true` from `take_click`. A click with no press before it (a synthetic
/// `click()`) reads `false` and dismisses.
#[derive(Debug, Default)]
pub struct BackdropPress {
    in_panel: Cell<bool>,
}

impl BackdropPress {
    /// A press began on the backdrop.
    pub fn press_backdrop(&self) {
        self.in_panel.set(false);
    }

    /// A press began inside the panel.
    pub fn press_panel(&self) {
        self.in_panel.set(true);
    }

    /// Consume the pending press: whether it began inside the panel.
    pub fn take_click(&self) -> bool {
        self.in_panel.replace(false)
    }
}
