//! Modal dialog overlay
//!
//! A controlled component: the caller owns `is_open` and the modal only
//! reports dismissal intent through `on_close` (Escape, backdrop click, close
//! button). It never closes itself.
//!
//! While open the modal holds a hold on the shared body scroll lock and a
//! document Escape listener. Both belong to an effect session inside the
//! `DialogController`, which is released when `is_open` turns false and on
//! unmount.
//!
//! The document is only touched from `use_effect`. Calling web_sys_x during
//! render panics on desktop (wry-bindgen IPC is not ready mid-diff), so the
//! render pass only mirrors `is_open` into the controller.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use scrim_common::{DialogController, DialogOptions, Dismissal, Gesture, ModalSize};

use crate::components::{ChromelessButton, XIcon};
use crate::host::use_effect_host;

/// Counter for generating unique modal IDs
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

const BACKDROP_CLASS: &str =
    "fixed inset-0 z-50 flex items-center justify-center overflow-y-auto bg-black/50 p-4";
const PANEL_CLASS: &str = "w-full rounded-lg border border-gray-700 bg-gray-800 shadow-lg";

fn panel_class(size: ModalSize, extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("{} {PANEL_CLASS} {extra}", size.max_width_class()),
        None => format!("{} {PANEL_CLASS}", size.max_width_class()),
    }
}

/// Modal component rendering a backdrop and a centered panel while open
#[component]
pub fn Modal(
    /// Controls whether the modal is open
    is_open: ReadSignal<bool>,
    /// Called when the user asks to close the modal
    on_close: EventHandler<()>,
    /// Heading shown in the header row
    #[props(default)]
    title: Option<String>,
    /// Panel max width
    #[props(default)]
    size: ModalSize,
    /// Show the X button in the header row
    #[props(default = true)]
    show_close_button: bool,
    /// Optional CSS classes for the panel
    #[props(default)]
    class: Option<String>,
    /// Modal content
    children: Element,
) -> Element {
    let modal_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{}", id)
    });
    let host = use_effect_host();
    let controller = use_hook(move || {
        Rc::new(RefCell::new(DialogController::new(
            host,
            DialogOptions::default(),
        )))
    });

    // Render gate: mirror is_open synchronously, no document access here.
    // Markup below reads the controller's state, not the raw props.
    let (is_visible, size, title, has_header, has_close_button) = {
        let mut dialog = controller.borrow_mut();
        dialog.configure(DialogOptions {
            size,
            title,
            show_close_button,
        });
        dialog.sync(is_open());
        let state = dialog.state();
        (
            state.is_visible(),
            state.size(),
            state.title().map(str::to_string),
            state.has_header(),
            state.has_close_button(),
        )
    };

    // Install or release the scroll lock and Escape listener
    let controller_for_effect = controller.clone();
    use_effect(move || {
        let requested_open = is_open();

        // Capture the Dioxus runtime so we can restore it inside the keydown
        // callback, which runs from wasm-bindgen outside the Dioxus runtime.
        let runtime = Runtime::current();

        let mut dialog = controller_for_effect.borrow_mut();
        dialog.sync(requested_open);
        dialog.apply_effects(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            on_close.call(());
        });
    });

    let controller_for_drop = controller.clone();
    use_drop(move || {
        controller_for_drop.borrow_mut().unmount();
    });

    if !is_visible {
        return rsx! {};
    }

    let title_id = format!("{modal_id}-title");
    let labelled_by = title.as_ref().map(|_| title_id.clone());
    let panel_class = panel_class(size, class.as_deref());

    let on_backdrop_mousedown = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.borrow().backdrop().press_backdrop()
    };
    let on_backdrop_click = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let dismissal = controller.borrow().backdrop_click();
            if dismissal == Dismissal::Close {
                on_close.call(());
            }
        }
    };
    // The panel stops propagation so the backdrop only sees its own events
    let on_panel_mousedown = {
        let controller = controller.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            controller.borrow().backdrop().press_panel();
        }
    };
    let on_close_button = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let dismissal = controller.borrow().dispatch(Gesture::CloseButton);
            if dismissal == Dismissal::Close {
                on_close.call(());
            }
        }
    };

    rsx! {
        div {
            class: BACKDROP_CLASS,
            role: "presentation",
            onmousedown: on_backdrop_mousedown,
            onclick: on_backdrop_click,
            div {
                id: "{modal_id}",
                class: "{panel_class}",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: labelled_by,
                onmousedown: on_panel_mousedown,
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                if has_header {
                    div { class: "flex items-center justify-between border-b border-gray-700 px-6 py-4",
                        if let Some(title) = title {
                            h2 {
                                id: "{title_id}",
                                class: "text-lg font-semibold text-white",
                                "{title}"
                            }
                        }
                        if has_close_button {
                            ChromelessButton {
                                class: Some(
                                    "ml-auto inline-flex items-center justify-center rounded-lg p-1.5 text-gray-400 hover:bg-gray-700 hover:text-white"
                                        .to_string(),
                                ),
                                aria_label: Some("Close dialog".to_string()),
                                onclick: on_close_button,
                                XIcon { class: "w-5 h-5" }
                            }
                        }
                    }
                }
                div { class: "px-6 py-4", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_class_uses_size() {
        assert!(panel_class(ModalSize::Small, None).starts_with("max-w-sm "));
        assert!(panel_class(ModalSize::Large, None).starts_with("max-w-lg "));
    }

    #[test]
    fn test_panel_class_appends_extra() {
        let class = panel_class(ModalSize::Medium, Some("mt-8"));
        assert!(class.starts_with("max-w-md "));
        assert!(class.ends_with(" mt-8"));
    }
}
