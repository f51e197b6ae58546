//! Collaborators provided by the host window manager
//!
//! The overlay never creates bindings, draws text or queries screens itself.
//! Everything it needs from the host is expressed by the traits below and
//! injected at the call site.

use std::rc::Rc;
use std::time::Duration;

use crate::keys::{BindingKey, Key};

/// A press or release callback owned by the host binding
pub type Action = Rc<dyn Fn()>;

/// Arguments for the host's native binding constructor
pub struct NativeBinding {
    pub modifiers: Vec<String>,
    pub key: Key,
    pub press: Option<Action>,
    pub release: Option<Action>,
}

impl std::fmt::Debug for NativeBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeBinding")
            .field("modifiers", &self.modifiers)
            .field("key", &self.key)
            .field("press", &self.press.is_some())
            .field("release", &self.release.is_some())
            .finish()
    }
}

/// The host's native key binding primitive
pub trait KeyBinder {
    /// Create a binding. A single request may produce several keys
    /// (for example one per keycode variant).
    fn create_binding(&mut self, binding: NativeBinding) -> Vec<BindingKey>;
}

/// Handle of a presented notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub u64);

/// Options passed through to the presentation sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentOptions {
    pub timeout: Duration,
    pub bg: String,
}

/// Errors reported by a presentation sink
#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    #[error("presentation sink unavailable")]
    Unavailable,

    #[error("failed to present page: {0}")]
    Io(#[from] std::io::Error),
}

/// The host's notification facility
pub trait Presenter {
    fn present(&mut self, markup: &str, options: &PresentOptions) -> Result<Handle, PresentError>;

    fn dismiss(&mut self, handle: Handle);
}

/// Measures the natural height of markup text in the host's layout
pub trait TextMeasure {
    fn height(&self, markup: &str) -> u32;
}

/// Screen and focus queries
pub trait Screen {
    /// Height of the usable work area on the screen under the pointer
    fn work_area_height(&self) -> u32;

    fn global_bindings(&self) -> Vec<BindingKey>;

    /// Bindings of the focused window, if any window has focus
    fn focused_client_bindings(&self) -> Option<Vec<BindingKey>>;
}

/// Presentation defaults read from the host theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub fg_focus: String,
    pub fg_normal: String,
    pub bg_focus: String,
    pub font: String,
    pub border_width: u32,
    pub padding: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg_focus: "#ffffff".to_string(),
            fg_normal: "#aaaaaa".to_string(),
            bg_focus: "#535d6c".to_string(),
            font: "monospace".to_string(),
            border_width: 1,
            padding: 4,
        }
    }
}

/// Everything `HelpOverlay::display` needs from the host
pub trait Host: Presenter + TextMeasure + Screen {
    fn theme(&self) -> Theme {
        Theme::default()
    }
}
