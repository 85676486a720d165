//! Confirm dialog component

use dioxus::prelude::*;
use scrim_common::{route, ConfirmationState, Dismissal, Gesture, CONFIRMATION_SIZE};

use crate::components::{AlertTriangleIcon, Button, ButtonSize, ButtonVariant, Modal};

/// A confirmation dialog: optional description and content above a
/// cancel/confirm footer.
///
/// `is_loading` belongs to the caller. While it is true both actions are
/// disabled and confirm shows a spinner; the caller decides when to close.
#[component]
pub fn ConfirmDialog(
    is_open: ReadSignal<bool>,
    /// Called by cancel, Escape, backdrop and the close button
    on_close: EventHandler<()>,
    /// Called by the confirm action. Without it confirm does nothing.
    #[props(default)]
    on_confirm: Option<EventHandler<()>>,
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default)] is_dangerous: bool,
    #[props(default)] is_loading: bool,
    /// Extra content between the description and the footer
    #[props(default)]
    content: Option<Element>,
) -> Element {
    let state = ConfirmationState {
        is_dangerous,
        is_loading,
        confirm_label,
        cancel_label,
    };
    let ctx = state.dismissal_context(is_open(), on_confirm.is_some());
    let confirm_variant = ButtonVariant::from(state.confirm_tone());
    let actions_disabled = state.actions_disabled();
    let show_spinner = state.shows_busy_indicator();
    let ConfirmationState {
        confirm_label,
        cancel_label,
        ..
    } = state;

    rsx! {
        Modal {
            is_open,
            on_close,
            title: Some(title),
            size: CONFIRMATION_SIZE,
            div { class: "space-y-4",
                if let Some(description) = description {
                    div { class: "flex items-start gap-3",
                        if is_dangerous {
                            AlertTriangleIcon { class: "w-5 h-5 shrink-0 text-red-400" }
                        }
                        p { class: "text-sm text-gray-400", "{description}" }
                    }
                }
                if let Some(content) = content {
                    {content}
                }
                div { class: "flex gap-3 pt-4",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Medium,
                        disabled: actions_disabled,
                        class: Some("flex-1".to_string()),
                        onclick: move |_| {
                            if route(Gesture::Cancel, ctx) == Dismissal::Close {
                                on_close.call(());
                            }
                        },
                        "{cancel_label}"
                    }
                    Button {
                        variant: confirm_variant,
                        size: ButtonSize::Medium,
                        loading: show_spinner,
                        disabled: actions_disabled,
                        class: Some("flex-1".to_string()),
                        onclick: move |_| {
                            if route(Gesture::Confirm, ctx) == Dismissal::Confirm {
                                if let Some(handler) = on_confirm {
                                    handler.call(());
                                }
                            }
                        },
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
