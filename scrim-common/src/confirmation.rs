use crate::{DismissalContext, ModalSize};

/// Confirmation dialogs always use the small panel.
pub const CONFIRMATION_SIZE: ModalSize = ModalSize::Small;

/// Visual tone of the confirm action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTone {
    Primary,
    Danger,
}

/// Footer state of a confirmation dialog. `is_loading` is owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationState {
    pub is_dangerous: bool,
    pub is_loading: bool,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Default for ConfirmationState {
    fn default() -> Self {
        Self {
            is_dangerous: false,
            is_loading: false,
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

impl ConfirmationState {
    pub fn confirm_tone(&self) -> ActionTone {
        if self.is_dangerous {
            ActionTone::Danger
        } else {
            ActionTone::Primary
        }
    }

    /// Both footer actions are disabled while loading.
    pub fn actions_disabled(&self) -> bool {
        self.is_loading
    }

    pub fn shows_busy_indicator(&self) -> bool {
        self.is_loading
    }

    pub fn dismissal_context(&self, visible: bool, can_confirm: bool) -> DismissalContext {
        DismissalContext {
            visible,
            busy: self.is_loading,
            can_confirm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{route, Dismissal, Gesture};

    #[test]
    fn test_default_labels() {
        let state = ConfirmationState::default();
        assert_eq!(state.confirm_label, "Confirm");
        assert_eq!(state.cancel_label, "Cancel");
        assert_eq!(state.confirm_tone(), ActionTone::Primary);
    }

    #[test]
    fn test_dangerous_tone() {
        let state = ConfirmationState {
            is_dangerous: true,
            ..Default::default()
        };
        assert_eq!(state.confirm_tone(), ActionTone::Danger);
    }

    #[test]
    fn test_loading_toggles_footer() {
        let mut state = ConfirmationState {
            is_loading: true,
            ..Default::default()
        };
        assert!(state.actions_disabled());
        assert!(state.shows_busy_indicator());
        let ctx = state.dismissal_context(true, true);
        assert_eq!(route(Gesture::Confirm, ctx), Dismissal::Ignore);
        assert_eq!(route(Gesture::Cancel, ctx), Dismissal::Ignore);

        state.is_loading = false;
        assert!(!state.actions_disabled());
        let ctx = state.dismissal_context(true, true);
        assert_eq!(route(Gesture::Confirm, ctx), Dismissal::Confirm);
        assert_eq!(route(Gesture::Cancel, ctx), Dismissal::Close);
    }
}
