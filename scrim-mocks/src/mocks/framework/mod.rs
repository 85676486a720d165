//! Storybook-like framework for the mock pages
//!
//! - ControlRegistry: typed control bag with URL sync
//! - Presets: named control configurations
//! - MockPanel: generated control panel above the mock content

mod panel;
mod preset;
mod registry;

pub use panel::MockPanel;
pub use preset::Preset;
pub use registry::ControlRegistryBuilder;
