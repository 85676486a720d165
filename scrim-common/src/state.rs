//! Visibility lifecycle and per-instance dialog state

use crate::ModalSize;

/// Whether a dialog is currently rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// No DOM, no side effects
    Closed,
    /// DOM rendered, side effects installed
    Open,
}

/// Result of feeding a new value into the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    Unchanged,
}

/// Mirrors the caller's `is_open` flag.
///
/// The only writer is `sync` (and `unmount` for forced teardown); the dialog
/// never flips its own visibility in response to a gesture.
#[derive(Debug, Clone)]
pub struct VisibilityLifecycle {
    requested_open: bool,
    visibility: Visibility,
    sessions_opened: u64,
}

impl Default for VisibilityLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityLifecycle {
    pub fn new() -> Self {
        Self {
            requested_open: false,
            visibility: Visibility::Closed,
            sessions_opened: 0,
        }
    }

    /// Apply the caller's current `is_open` value.
    pub fn sync(&mut self, requested_open: bool) -> Transition {
        self.requested_open = requested_open;
        match (self.visibility, requested_open) {
            (Visibility::Closed, true) => {
                self.visibility = Visibility::Open;
                self.sessions_opened += 1;
                Transition::Opened
            }
            (Visibility::Open, false) => {
                self.visibility = Visibility::Closed;
                Transition::Closed
            }
            _ => Transition::Unchanged,
        }
    }

    /// Forced Open -> Closed when the component goes away.
    pub fn unmount(&mut self) -> Transition {
        match self.visibility {
            Visibility::Open => {
                self.visibility = Visibility::Closed;
                Transition::Closed
            }
            Visibility::Closed => Transition::Unchanged,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn requested_open(&self) -> bool {
        self.requested_open
    }

    /// Number of Closed -> Open transitions seen so far.
    pub fn sessions_opened(&self) -> u64 {
        self.sessions_opened
    }
}

/// Presentation options of one dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOptions {
    pub size: ModalSize,
    pub title: Option<String>,
    pub show_close_button: bool,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            size: ModalSize::default(),
            title: None,
            show_close_button: true,
        }
    }
}

impl DialogOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn without_close_button(mut self) -> Self {
        self.show_close_button = false;
        self
    }
}

/// Everything a mounted dialog knows about itself
#[derive(Debug, Clone, Default)]
pub struct DialogState {
    lifecycle: VisibilityLifecycle,
    options: DialogOptions,
}

impl DialogState {
    pub fn new(options: DialogOptions) -> Self {
        Self {
            lifecycle: VisibilityLifecycle::new(),
            options,
        }
    }

    /// Replace the presentation options (props changed on re-render).
    pub fn configure(&mut self, options: DialogOptions) {
        self.options = options;
    }

    pub fn update(&mut self, requested_open: bool) -> Transition {
        self.lifecycle.sync(requested_open)
    }

    pub fn unmount(&mut self) -> Transition {
        self.lifecycle.unmount()
    }

    pub fn lifecycle(&self) -> &VisibilityLifecycle {
        &self.lifecycle
    }

    pub fn is_visible(&self) -> bool {
        self.lifecycle.is_visible()
    }

    pub fn size(&self) -> ModalSize {
        self.options.size
    }

    pub fn title(&self) -> Option<&str> {
        self.options.title.as_deref()
    }

    pub fn has_close_button(&self) -> bool {
        self.options.show_close_button
    }

    /// The header row shows when there is a title or a close button.
    pub fn has_header(&self) -> bool {
        self.options.title.is_some() || self.options.show_close_button
    }
}
