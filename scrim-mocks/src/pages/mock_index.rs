//! Mock index and route wrappers

use crate::mocks::{ConfirmDialogMock, ModalMock};
use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;
use scrim_ui::{Button, ButtonSize, ButtonVariant};

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "scrim mocks" }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Design System" }
            div { class: "grid grid-cols-3 gap-4 mb-8",
                SpecimenCard { title: "Button", to: Route::MockConfirmDialog { state: None },
                    div { class: "flex flex-wrap gap-2",
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Small,
                            onclick: |_| {},
                            "Primary"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            size: ButtonSize::Small,
                            onclick: |_| {},
                            "Danger"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: |_| {},
                            "Outline"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Small,
                            loading: true,
                            onclick: |_| {},
                            "Loading"
                        }
                    }
                }
            }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Components" }
            div { class: "space-y-2",
                LinkCard {
                    to: Route::MockModal { state: None },
                    title: "Modal",
                    description: "Overlay with backdrop, Escape handling and scroll lock",
                }
                LinkCard {
                    to: Route::MockConfirmDialog {
                        state: None,
                    },
                    title: "ConfirmDialog",
                    description: "Cancel/confirm dialog with dangerous and loading states",
                }
            }
        }
    }
}

/// A card showing specimen samples with a link to the full page
#[component]
fn SpecimenCard(title: &'static str, to: Route, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-gray-950 rounded-lg p-4 hover:bg-gray-900 transition-colors border border-gray-800",
            h3 { class: "text-sm font-medium text-gray-300 mb-3", "{title}" }
            div { class: "pointer-events-none", {children} }
        }
    }
}

#[component]
pub fn MockModal(state: Option<String>) -> Element {
    rsx! {
        ModalMock { initial_state: state }
    }
}

#[component]
pub fn MockConfirmDialog(state: Option<String>) -> Element {
    rsx! {
        ConfirmDialogMock { initial_state: state }
    }
}
