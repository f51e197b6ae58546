//! The keybinding help overlay
//!
//! Owns the documentation registry and turns it into a chain of pages shown
//! one after another through the host's notification sink.

mod chain;
mod display;

pub use chain::PageChain;
pub use display::{DisplayOptions, HelpOverlay};
