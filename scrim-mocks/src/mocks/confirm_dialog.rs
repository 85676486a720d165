//! ConfirmDialog mock component

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use super::sleep_ms;
use crate::Route;
use dioxus::prelude::*;
use scrim_ui::{Button, ButtonSize, ButtonVariant, ConfirmDialog};

/// How long the simulated confirm keeps the dialog busy
const CONFIRM_DELAY_MS: u64 = 1500;

#[component]
pub fn ConfirmDialogMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .bool_control("open", "Open", false)
        .bool_control("dangerous", "Dangerous", false)
        .bool_control("loading", "Loading", false)
        .doc("Confirm sets this for 1.5s before closing")
        .bool_control("description", "Description", true)
        .bool_control("content", "Extra content", false)
        .with_presets(vec![
            Preset::new("Closed"),
            Preset::new("Confirm").set_bool("open", true),
            Preset::new("Delete Item")
                .set_bool("open", true)
                .set_bool("dangerous", true),
            Preset::new("Deleting")
                .set_bool("open", true)
                .set_bool("dangerous", true)
                .set_bool("loading", true),
            Preset::new("With Content")
                .set_bool("open", true)
                .set_bool("content", true),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockConfirmDialog { state });

    let is_open = registry.get_bool("open");
    let is_dangerous = registry.get_bool("dangerous");
    let is_loading = registry.get_bool("loading");
    let description = registry
        .get_bool("description")
        .then(|| "This item will be permanently removed from your library.".to_string());
    let show_content = registry.get_bool("content");

    let (title, confirm_label) = if is_dangerous {
        ("Delete Item", "Delete")
    } else {
        ("Apply Changes", "Apply")
    };

    let open_registry = registry.clone();
    let close_registry = registry.clone();
    let confirm_registry = registry.clone();

    rsx! {
        MockPanel { title: "ConfirmDialog".to_string(), registry,
            div { class: "space-y-4",
                p { class: "text-sm text-gray-400",
                    "Confirm simulates a slow operation: both actions are disabled until it finishes, then the dialog closes."
                }
                Button {
                    variant: if is_dangerous { ButtonVariant::Danger } else { ButtonVariant::Primary },
                    size: ButtonSize::Medium,
                    onclick: move |_| open_registry.set_bool("open", true),
                    "{confirm_label}..."
                }
            }

            ConfirmDialog {
                is_open,
                on_close: move |_| close_registry.set_bool("open", false),
                on_confirm: move |_| {
                    let registry = confirm_registry.clone();
                    registry.set_bool("loading", true);
                    spawn(async move {
                        sleep_ms(CONFIRM_DELAY_MS).await;
                        tracing::info!("ConfirmDialog mock: operation finished");
                        registry.set_bool("loading", false);
                        registry.set_bool("open", false);
                    });
                },
                title: title.to_string(),
                description,
                confirm_label: confirm_label.to_string(),
                is_dangerous,
                is_loading,
                content: if show_content {
                    Some(rsx! {
                        ul { class: "text-sm text-gray-300 list-disc pl-5",
                            li { "Kind of Blue (1959)" }
                            li { "12 tracks, 45:44" }
                        }
                    })
                } else {
                    None
                },
            }
        }
    }
}
