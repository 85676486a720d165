//! Modal mock component

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use crate::Route;
use dioxus::prelude::*;
use scrim_common::ModalSize;
use scrim_ui::{Button, ButtonSize, ButtonVariant, Modal};

#[component]
pub fn ModalMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "size",
            "Size",
            ModalSize::default().as_str(),
            ModalSize::ALL
                .iter()
                .map(|size| (size.as_str(), size.label()))
                .collect(),
        )
        .string_control("title", "Title", "Edit Playlist")
        .bool_control("open", "Open", false)
        .bool_control("close_button", "Close button", true)
        .bool_control("stacked", "Stacked dialog", false)
        .doc("Opens a second dialog on top of the first while both are open")
        .with_presets(vec![
            Preset::new("Closed"),
            Preset::new("Open").set_bool("open", true),
            Preset::new("Small Untitled")
                .set_bool("open", true)
                .set_string("size", ModalSize::Small.as_str())
                .set_string("title", ""),
            Preset::new("Bare Panel")
                .set_bool("open", true)
                .set_string("title", "")
                .set_bool("close_button", false),
            Preset::new("Stacked")
                .set_bool("open", true)
                .set_bool("stacked", true),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockModal { state });

    let size = registry
        .get_string("size")
        .parse::<ModalSize>()
        .unwrap_or_default();
    let title = Some(registry.get_string("title")).filter(|t| !t.trim().is_empty());
    let is_open = registry.get_bool("open");
    let show_close_button = registry.get_bool("close_button");
    let is_stacked = is_open && registry.get_bool("stacked");

    let close_registry = registry.clone();
    let stacked_registry = registry.clone();
    let open_registry = registry.clone();

    rsx! {
        MockPanel { title: "Modal".to_string(), registry,
            div { class: "space-y-6",
                p { class: "text-sm text-gray-400",
                    "Escape, a backdrop click or the close button ask the page to close the dialog. The page below stops scrolling while any dialog is open."
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    onclick: move |_| open_registry.set_bool("open", true),
                    "Open dialog"
                }
                // Tall filler so the scroll lock is observable
                div { class: "space-y-3",
                    for i in 0..40 {
                        div { key: "{i}", class: "h-10 rounded bg-gray-800/60" }
                    }
                }
            }

            Modal {
                is_open,
                on_close: move |_| {
                    tracing::debug!("Modal mock: close requested");
                    close_registry.set_bool("open", false);
                },
                title,
                size,
                show_close_button,
                div { class: "space-y-3 text-sm text-gray-300",
                    p { "Rename the playlist or change its cover." }
                    input {
                        class: "w-full px-3 py-2 rounded-lg bg-gray-900 border border-gray-700 text-white",
                        r#type: "text",
                        placeholder: "Playlist name",
                    }
                }
            }

            Modal {
                is_open: is_stacked,
                on_close: move |_| stacked_registry.set_bool("stacked", false),
                title: Some("Nested dialog".to_string()),
                size: ModalSize::Small,
                p { class: "text-sm text-gray-300",
                    "Closing this one leaves the first dialog open and the page locked."
                }
            }
        }
    }
}
