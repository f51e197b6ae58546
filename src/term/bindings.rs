//! Bindings described in a JSON file
//!
//! ```json
//! [
//!   { "group": "Apps", "modifiers": ["Mod4"], "key": "Return", "description": "open terminal" },
//!   { "modifiers": ["Mod4"], "key": "#14", "description": "view tag" }
//! ]
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::config::ConfigError;
use crate::host::KeyBinder;
use crate::keys::Key;
use crate::overlay::HelpOverlay;
use crate::registry::BindingRequest;

/// One binding entry; entries without a group land in the default group
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BindingEntry {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub modifiers: Vec<String>,
    pub key: String,
    #[serde(default)]
    pub description: String,
}

pub fn load_bindings(path: &Path) -> Result<Vec<BindingEntry>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Register every entry in file order
pub fn register_all<B: KeyBinder + ?Sized>(
    overlay: &mut HelpOverlay,
    binder: &mut B,
    entries: Vec<BindingEntry>,
) {
    let count = entries.len();
    for entry in entries {
        let request = BindingRequest::new(entry.modifiers, Key::parse(&entry.key))
            .describe(entry.description);
        match entry.group {
            Some(group) => overlay.begin_group(group).register(binder, request),
            None => overlay.register(binder, request),
        };
    }
    info!(count, documented = overlay.registry().len(), "bindings registered");
}
