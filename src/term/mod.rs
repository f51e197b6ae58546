//! Terminal host for previewing the help overlay
//!
//! Implements the host traits on top of a plain text stream: pages are
//! printed without markup and measured in lines.

mod bindings;
mod host;

pub use bindings::{load_bindings, register_all, BindingEntry};
pub use host::TermHost;
