//! State presets for quick configuration switching

use super::registry::{ControlRegistry, ControlValue};
use std::collections::HashMap;

/// A named preset with predefined control values
#[derive(Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<&'static str, ControlValue>,
}

impl Preset {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values.insert(key, ControlValue::Bool(value));
        self
    }

    pub fn set_string(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key, ControlValue::String(value.to_string()));
        self
    }

    /// A preset matches when the controls it names hold its values and every
    /// other control is at its default.
    pub fn matches(&self, registry: &ControlRegistry) -> bool {
        registry.controls.iter().all(|control| {
            let expected = self.values.get(control.key).unwrap_or(&control.default);
            registry
                .values
                .get(control.key)
                .is_some_and(|signal| *signal.read() == *expected)
        })
    }
}
