//! Dialog components and the primitives they are built from

pub mod button;
pub mod confirm_dialog;
pub mod icons;
pub mod modal;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use confirm_dialog::ConfirmDialog;
pub use icons::{AlertTriangleIcon, LoaderIcon, XIcon};
pub use modal::Modal;
