//! Key binding identities and human-readable labels
//!
//! A `BindingKey` is the host's handle for one registered shortcut. The
//! `Translations` table turns its modifiers and symbol into the label shown
//! in the help overlay.

mod binding;
mod label;

pub use binding::{BindingId, BindingKey, Key};
pub use label::{label_len, Translations};
