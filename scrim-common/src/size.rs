use std::fmt;
use std::str::FromStr;

/// Panel width of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalSize {
    Small,
    Medium,
    Large,
}

#[allow(clippy::derivable_impls)]
impl Default for ModalSize {
    fn default() -> Self {
        ModalSize::Medium
    }
}

impl ModalSize {
    pub const ALL: [ModalSize; 3] = [ModalSize::Small, ModalSize::Medium, ModalSize::Large];

    /// Tailwind max-width class applied to the panel.
    pub fn max_width_class(self) -> &'static str {
        match self {
            ModalSize::Small => "max-w-sm",
            ModalSize::Medium => "max-w-md",
            ModalSize::Large => "max-w-lg",
        }
    }

    /// Human-readable name for pickers.
    pub fn label(self) -> &'static str {
        match self {
            ModalSize::Small => "Small",
            ModalSize::Medium => "Medium",
            ModalSize::Large => "Large",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModalSize::Small => "small",
            ModalSize::Medium => "medium",
            ModalSize::Large => "large",
        }
    }
}

impl fmt::Display for ModalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown modal size: {0:?} (expected small, medium or large)")]
pub struct ParseModalSizeError(pub String);

impl FromStr for ModalSize {
    type Err = ParseModalSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" | "small" => Ok(ModalSize::Small),
            "md" | "medium" => Ok(ModalSize::Medium),
            "lg" | "large" => Ok(ModalSize::Large),
            _ => Err(ParseModalSizeError(s.to_string())),
        }
    }
}
