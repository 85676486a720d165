//! Control state carried in the `state` query parameter
//!
//! Non-default control values are stored as a base64url JSON object so the
//! URL stays a single opaque parameter.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;

/// Decode a `state` parameter into key-value pairs. Malformed input decodes
/// to no pairs, leaving every control at its default.
pub fn parse_state(encoded: &str) -> Vec<(String, String)> {
    if encoded.is_empty() {
        return Vec::new();
    }

    let Ok(json_bytes) = URL_SAFE_NO_PAD.decode(encoded) else {
        tracing::debug!("Ignoring state that is not base64url");
        return Vec::new();
    };

    match serde_json::from_slice::<BTreeMap<String, String>>(&json_bytes) {
        Ok(map) => map.into_iter().collect(),
        Err(e) => {
            tracing::debug!("Ignoring state that is not a JSON object: {e}");
            Vec::new()
        }
    }
}

/// Encode key-value pairs into a `state` parameter
pub fn build_state(pairs: &[(String, String)]) -> String {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let json = serde_json::to_string(&map).expect("state map is always serializable");
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Collects the non-default control values of a mock page
#[derive(Default)]
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .push((key.to_string(), if value { "1" } else { "0" }.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str, default: &str) {
        if value != default {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// `None` when every control is at its default, keeping the URL clean
    pub fn build_option(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(build_state(&self.pairs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_skips_defaults() {
        let mut builder = StateBuilder::new();
        builder.set_bool("open", false, false);
        builder.set_string("size", "md", "md");
        assert_eq!(builder.build_option(), None);
    }

    #[test]
    fn test_builder_output_parses_back() {
        let mut builder = StateBuilder::new();
        builder.set_bool("open", true, false);
        builder.set_bool("close_button", false, true);
        builder.set_string("size", "sm", "md");

        let encoded = builder.build_option().unwrap();
        assert!(!encoded.contains('='));

        let pairs = parse_state(&encoded);
        assert_eq!(
            pairs,
            vec![
                ("close_button".to_string(), "0".to_string()),
                ("open".to_string(), "1".to_string()),
                ("size".to_string(), "sm".to_string()),
            ]
        );
    }

    #[test]
    fn test_garbage_state_is_ignored() {
        assert!(parse_state("").is_empty());
        assert!(parse_state("!!not base64!!").is_empty());
        // Valid base64 of a JSON array, not an object
        let array = URL_SAFE_NO_PAD.encode(b"[1,2]");
        assert!(parse_state(&array).is_empty());
    }
}
