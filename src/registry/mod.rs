//! Registry of documented key bindings
//!
//! Wraps the host's binding constructor and records a help text and group
//! for every binding registered with a description.

mod request;
mod store;

pub use request::{BindingRequest, Release};
pub use store::{Documentation, GroupScope, Registry, DEFAULT_GROUP};
