//! Binding registration requests

use crate::host::{Action, NativeBinding};
use crate::keys::Key;

/// Contents of the release-handler slot
pub enum Release {
    /// A real release callback
    Action(Action),
    /// Help text passed where a release callback would go.
    ///
    /// Used as the description when no explicit description is given, and
    /// never forwarded to the host. A string in this slot is always treated
    /// as documentation, even if the caller meant it as a sentinel.
    Text(String),
}

/// A binding to create through the host, plus its optional documentation
pub struct BindingRequest {
    modifiers: Vec<String>,
    key: Key,
    press: Option<Action>,
    release: Option<Release>,
    description: Option<String>,
}

impl BindingRequest {
    pub fn new<M, S>(modifiers: M, key: Key) -> Self
    where
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modifiers: modifiers.into_iter().map(Into::into).collect(),
            key,
            press: None,
            release: None,
            description: None,
        }
    }

    pub fn on_press(mut self, action: Action) -> Self {
        self.press = Some(action);
        self
    }

    pub fn on_release(mut self, release: Release) -> Self {
        self.release = Some(release);
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Split into the native call and the help text to record.
    ///
    /// An empty description counts as absent.
    pub(crate) fn into_parts(self) -> (NativeBinding, Option<String>) {
        let description = self.description.filter(|d| !d.is_empty());

        let (release, description) = match (self.release, description) {
            (Some(Release::Text(text)), None) => (None, Some(text).filter(|t| !t.is_empty())),
            (Some(Release::Text(_)), Some(description)) => (None, Some(description)),
            (Some(Release::Action(action)), description) => (Some(action), description),
            (None, description) => (None, description),
        };

        let native = NativeBinding {
            modifiers: self.modifiers,
            key: self.key,
            press: self.press,
            release,
        };

        (native, description)
    }
}
