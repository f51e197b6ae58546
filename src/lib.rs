//! keydoc: documented key bindings and a paginated help overlay
//!
//! Bindings are registered through the host's own constructor with an
//! optional description and group. On request, every active documented
//! binding is rendered into aligned, grouped markup, split into pages that
//! fit the screen, and shown one page after another.
//!
//! The host window manager is abstracted by the traits in [`host`]; the
//! [`term`] module provides a terminal implementation used by the `keydoc`
//! binary.

pub mod config;
pub mod events;
pub mod host;
pub mod keys;
pub mod overlay;
pub mod registry;
pub mod render;
pub mod term;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{Config, ConfigError};
pub use events::OverlayEvent;
pub use overlay::{DisplayOptions, HelpOverlay};
pub use registry::{BindingRequest, Release};
