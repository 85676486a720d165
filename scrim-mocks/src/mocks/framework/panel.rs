//! Auto-generated control panel UI

use super::registry::{ControlDef, ControlRegistry};
use crate::Route;
use dioxus::prelude::*;

/// Main mock panel component that renders controls, presets, and the mock
#[component]
pub fn MockPanel(title: String, registry: ControlRegistry, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            div { class: "sticky top-0 z-40 bg-gray-800 border-b border-gray-700 p-4",
                div { class: "max-w-4xl mx-auto",
                    MockHeader { title }
                    if !registry.presets.is_empty() {
                        PresetBar { registry: registry.clone() }
                    }
                    ControlsRow { registry: registry.clone() }
                }
            }
            div { class: "max-w-4xl mx-auto p-6", {children} }
        }
    }
}

#[component]
fn MockHeader(title: String) -> Element {
    rsx! {
        div { class: "flex items-center gap-3 mb-3",
            Link {
                to: Route::MockIndex {},
                class: "text-gray-400 hover:text-white",
                "←"
            }
            h1 { class: "text-lg font-semibold text-white", "{title}" }
        }
    }
}

#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2 mb-3",
            span { class: "text-xs text-gray-500 self-center mr-2", "Presets:" }
            for preset in registry.presets.clone() {
                button {
                    class: if preset.matches(&registry) { "px-2 py-1 text-xs rounded bg-blue-600 text-white" } else { "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
                    onclick: {
                        let registry = registry.clone();
                        let preset = preset.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

/// Enum controls as button groups, free strings as text inputs, bools as checkboxes
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    let enum_controls: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| c.enum_options.is_some())
        .cloned()
        .collect();
    let string_controls: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| c.enum_options.is_none() && !c.is_bool())
        .cloned()
        .collect();
    let bool_controls: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| c.is_bool())
        .cloned()
        .collect();

    rsx! {
        for control in enum_controls {
            div { class: "flex flex-wrap items-center gap-2 mb-3",
                span { class: "text-xs text-gray-500 mr-2", "{control.label}:" }
                for (value , label) in control.enum_options.clone().unwrap_or_default() {
                    EnumButton {
                        registry: registry.clone(),
                        control_key: control.key,
                        value,
                        label,
                        doc: control.doc,
                    }
                }
            }
        }

        for control in string_controls {
            StringInput {
                registry: registry.clone(),
                control_key: control.key,
                label: control.label,
            }
        }

        if !bool_controls.is_empty() {
            div { class: "flex flex-wrap gap-4 text-sm",
                for control in bool_controls {
                    BoolCheckbox {
                        registry: registry.clone(),
                        control_key: control.key,
                        label: control.label,
                        doc: control.doc,
                    }
                }
            }
        }
    }
}

/// Individual enum button - reads signal reactively
#[component]
fn EnumButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let is_selected = registry.get_string(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "px-3 py-1.5 text-sm rounded bg-blue-600 text-white" } else { "px-3 py-1.5 text-sm rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
            onclick: move |_| registry.set_string(control_key, value.to_string()),
            title: doc.unwrap_or(""),
            "{label}"
        }
    }
}

#[component]
fn StringInput(registry: ControlRegistry, control_key: &'static str, label: &'static str) -> Element {
    let current = registry.get_string(control_key);

    rsx! {
        label { class: "flex items-center gap-2 mb-3 text-sm text-gray-400",
            "{label}"
            input {
                class: "flex-1 px-2 py-1 rounded bg-gray-900 border border-gray-700 text-white",
                r#type: "text",
                value: "{current}",
                oninput: move |e| registry.set_string(control_key, e.value()),
            }
        }
    }
}

/// Individual bool checkbox - reads signal reactively
#[component]
fn BoolCheckbox(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_bool(control_key);

    rsx! {
        label {
            class: "flex items-center gap-2 text-gray-400",
            title: doc.unwrap_or(""),
            input {
                r#type: "checkbox",
                checked: current,
                onchange: move |e| registry.set_bool(control_key, e.checked()),
            }
            "{label}"
            if doc.is_some() {
                span { class: "text-gray-600", "ⓘ" }
            }
        }
    }
}
