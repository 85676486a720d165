//! One dialog instance: state, side effects and gesture routing together

use std::rc::Rc;

use crate::{
    route, BackdropPress, DialogOptions, DialogState, Dismissal, DismissalContext, EffectChange,
    EffectHost, Gesture, SideEffectManager, Transition,
};

/// Drives a single mounted dialog.
///
/// `sync` is pure and safe to call while rendering; `apply_effects` touches
/// the document and belongs in an effect. `unmount` (or dropping the
/// controller) tears everything down.
pub struct DialogController {
    state: DialogState,
    effects: SideEffectManager,
    backdrop: BackdropPress,
}

impl DialogController {
    pub fn new(host: Rc<dyn EffectHost>, options: DialogOptions) -> Self {
        Self {
            state: DialogState::new(options),
            effects: SideEffectManager::new(host),
            backdrop: BackdropPress::default(),
        }
    }

    pub fn configure(&mut self, options: DialogOptions) {
        self.state.configure(options);
    }

    /// Mirror the caller's `is_open` into the render gate.
    pub fn sync(&mut self, requested_open: bool) -> Transition {
        self.state.update(requested_open)
    }

    /// Bring the document effects in line with the render gate. The Escape
    /// listener calls `on_close` once per press.
    pub fn apply_effects(&mut self, on_close: impl Fn() + 'static) -> EffectChange {
        let visible = self.state.is_visible();
        self.effects.reconcile(visible, move |key: &str| {
            if route(Gesture::Key(key), DismissalContext::open()) == Dismissal::Close {
                on_close();
            }
        })
    }

    /// `sync` followed by `apply_effects`.
    pub fn update(
        &mut self,
        requested_open: bool,
        on_close: impl Fn() + 'static,
    ) -> (Transition, EffectChange) {
        let transition = self.sync(requested_open);
        let change = self.apply_effects(on_close);
        (transition, change)
    }

    /// Route a gesture on the dialog chrome (backdrop, close button).
    pub fn dispatch(&self, gesture: Gesture<'_>) -> Dismissal {
        route(gesture, self.context())
    }

    /// Route the click that reached the backdrop, consuming the pending press.
    pub fn backdrop_click(&self) -> Dismissal {
        let started_in_panel = self.backdrop.take_click();
        self.dispatch(Gesture::BackdropClick { started_in_panel })
    }

    pub fn backdrop(&self) -> &BackdropPress {
        &self.backdrop
    }

    pub fn context(&self) -> DismissalContext {
        DismissalContext {
            visible: self.state.is_visible(),
            ..DismissalContext::open()
        }
    }

    /// Forced teardown, regardless of the caller's `is_open`.
    pub fn unmount(&mut self) -> Transition {
        let transition = self.state.unmount();
        self.effects.release();
        transition
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn has_side_effects(&self) -> bool {
        self.effects.is_active()
    }
}
