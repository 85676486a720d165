//! Control registry for typed control management with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{parse_state, StateBuilder};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
}

/// Definition of a control with metadata
#[derive(Clone, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
    /// (value, label) pairs for enum controls
    pub enum_options: Option<Vec<(&'static str, &'static str)>>,
}

impl ControlDef {
    fn new(key: &'static str, label: &'static str, default: ControlValue) -> Self {
        Self {
            key,
            label,
            default,
            doc: None,
            enum_options: None,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.default, ControlValue::Bool(_))
    }

    /// Value from decoded URL pairs, falling back to the default
    fn initial_value(&self, pairs: &[(String, String)]) -> ControlValue {
        let found = pairs.iter().find(|(k, _)| k == self.key).map(|(_, v)| v);
        match (&self.default, found) {
            (ControlValue::Bool(_), Some(v)) => ControlValue::Bool(v == "1" || v == "true"),
            (ControlValue::String(_), Some(v)) => match &self.enum_options {
                Some(options) if !options.iter().any(|(option, _)| option == v) => {
                    tracing::debug!("Unknown value {v:?} for control {}", self.key);
                    self.default.clone()
                }
                _ => ControlValue::String(v.clone()),
            },
            (default, None) => default.clone(),
        }
    }
}

/// Builder for creating a ControlRegistry
#[derive(Default)]
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.controls
            .push(ControlDef::new(key, label, ControlValue::Bool(default)));
        self
    }

    /// Add an enum control (represented as string internally)
    pub fn enum_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        let mut def = ControlDef::new(key, label, ControlValue::String(default.to_string()));
        def.enum_options = Some(options);
        self.controls.push(def);
        self
    }

    /// Add a free-form string control
    pub fn string_control(mut self, key: &'static str, label: &'static str, default: &str) -> Self {
        self.controls.push(ControlDef::new(
            key,
            label,
            ControlValue::String(default.to_string()),
        ));
        self
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        let state_pairs = initial_state
            .as_deref()
            .map(parse_state)
            .unwrap_or_default();

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();
        for def in &self.controls {
            let initial = def.initial_value(&state_pairs);
            let signal = use_signal(|| initial);
            values.insert(def.key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }
}

/// Registry holding all controls and their current values
#[derive(Clone, PartialEq)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl ControlRegistry {
    /// Get a boolean value (reads signal, creating subscription)
    pub fn get_bool(&self, key: &'static str) -> bool {
        self.values
            .get(key)
            .map(|s| matches!(&*s.read(), ControlValue::Bool(true)))
            .unwrap_or(false)
    }

    /// Get a string value (reads signal, creating subscription)
    pub fn get_string(&self, key: &'static str) -> String {
        self.values
            .get(key)
            .map(|s| match &*s.read() {
                ControlValue::String(s) => s.clone(),
                ControlValue::Bool(_) => String::new(),
            })
            .unwrap_or_default()
    }

    pub fn set_bool(&self, key: &'static str, value: bool) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Bool(value));
        }
    }

    pub fn set_string(&self, key: &'static str, value: String) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::String(value));
        }
    }

    /// Reset every control to its default, then apply the preset's values
    pub fn apply_preset(&self, preset: &Preset) {
        tracing::debug!("Applying preset {}", preset.name);
        for control in &self.controls {
            if let Some(mut signal) = self.values.get(control.key).copied() {
                let value = preset
                    .values
                    .get(control.key)
                    .unwrap_or(&control.default)
                    .clone();
                signal.set(value);
            }
        }
    }

    /// URL state string from current values
    pub fn build_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();

        for def in &self.controls {
            let Some(signal) = self.values.get(def.key) else {
                continue;
            };
            match (&*signal.read(), &def.default) {
                (ControlValue::Bool(v), ControlValue::Bool(default)) => {
                    builder.set_bool(def.key, *v, *default);
                }
                (ControlValue::String(v), ControlValue::String(default)) => {
                    builder.set_string(def.key, v, default);
                }
                _ => {}
            }
        }

        builder.build_option()
    }

    /// Keep the page URL in sync with the controls.
    ///
    /// `to_route` builds the page's route from the encoded state. The first
    /// run only subscribes, so opening a shared URL does not rewrite it.
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(to_route(registry.build_state()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_control() -> ControlDef {
        let mut def = ControlDef::new("size", "Size", ControlValue::String("md".to_string()));
        def.enum_options = Some(vec![("sm", "Small"), ("md", "Medium"), ("lg", "Large")]);
        def
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_key_uses_default() {
        let def = ControlDef::new("open", "Open", ControlValue::Bool(false));
        assert_eq!(def.initial_value(&[]), ControlValue::Bool(false));
    }

    #[test]
    fn test_bool_accepts_one_and_true() {
        let def = ControlDef::new("open", "Open", ControlValue::Bool(false));
        assert_eq!(
            def.initial_value(&pairs(&[("open", "1")])),
            ControlValue::Bool(true)
        );
        assert_eq!(
            def.initial_value(&pairs(&[("open", "true")])),
            ControlValue::Bool(true)
        );
        assert_eq!(
            def.initial_value(&pairs(&[("open", "0")])),
            ControlValue::Bool(false)
        );
    }

    #[test]
    fn test_enum_rejects_unknown_option() {
        let def = size_control();
        assert_eq!(
            def.initial_value(&pairs(&[("size", "lg")])),
            ControlValue::String("lg".to_string())
        );
        assert_eq!(
            def.initial_value(&pairs(&[("size", "xl")])),
            ControlValue::String("md".to_string())
        );
    }

    #[test]
    fn test_free_string_taken_verbatim() {
        let def = ControlDef::new("title", "Title", ControlValue::String("Hi".to_string()));
        assert_eq!(
            def.initial_value(&pairs(&[("title", "Delete Item")])),
            ControlValue::String("Delete Item".to_string())
        );
    }
}
