//! Documentation storage keyed by binding identity

use std::collections::HashMap;

use tracing::debug;

use crate::host::KeyBinder;
use crate::keys::{BindingId, BindingKey};

use super::request::BindingRequest;

/// Group used for bindings registered outside any explicit group
pub const DEFAULT_GROUP: &str = "Misc";

/// Help text and group recorded for one binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documentation {
    pub help_text: String,
    pub group: String,
}

/// Documentation for every described binding.
///
/// The registry does not own bindings; it only maps host identities to
/// their documentation. Entries live until the registry is dropped.
#[derive(Debug, Default)]
pub struct Registry {
    docs: HashMap<BindingId, Documentation>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a group. Bindings registered through the returned scope are
    /// tagged with `name`.
    pub fn begin_group(&mut self, name: impl Into<String>) -> GroupScope<'_> {
        let name = name.into();
        debug!(group = %name, "begin keybinding group");
        GroupScope {
            registry: self,
            name,
        }
    }

    /// Register a binding in the default group
    pub fn register<B: KeyBinder + ?Sized>(
        &mut self,
        binder: &mut B,
        request: BindingRequest,
    ) -> Vec<BindingKey> {
        self.register_in(DEFAULT_GROUP, binder, request)
    }

    fn register_in<B: KeyBinder + ?Sized>(
        &mut self,
        group: &str,
        binder: &mut B,
        request: BindingRequest,
    ) -> Vec<BindingKey> {
        let (native, description) = request.into_parts();
        let keys = binder.create_binding(native);

        match (description, keys.first()) {
            (Some(help_text), Some(first)) => {
                debug!(
                    id = first.id().0,
                    group,
                    help = %help_text,
                    "documented binding"
                );
                self.docs.insert(
                    first.id(),
                    Documentation {
                        help_text,
                        group: group.to_string(),
                    },
                );
            }
            (Some(help_text), None) => {
                debug!(help = %help_text, "host created no binding, nothing to document");
            }
            (None, _) => {}
        }

        keys
    }

    pub fn lookup(&self, key: &BindingKey) -> Option<&Documentation> {
        self.docs.get(&key.id())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Registration context for one group
pub struct GroupScope<'a> {
    registry: &'a mut Registry,
    name: String,
}

impl GroupScope<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn register<B: KeyBinder + ?Sized>(
        &mut self,
        binder: &mut B,
        request: BindingRequest,
    ) -> Vec<BindingKey> {
        self.registry.register_in(&self.name, binder, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Key;
    use crate::registry::Release;
    use crate::testing::FakeHost;

    #[test]
    fn test_default_group() {
        let mut host = FakeHost::default();
        let mut registry = Registry::new();
        let keys = registry.register(
            &mut host,
            BindingRequest::new(["Control", "Mod1"], Key::sym("l")).describe("lock screen"),
        );
        let doc = registry.lookup(&keys[0]).unwrap();
        assert_eq!(doc.group, DEFAULT_GROUP);
        assert_eq!(doc.help_text, "lock screen");
    }

    #[test]
    fn test_group_is_fixed_at_registration() {
        let mut host = FakeHost::default();
        let mut registry = Registry::new();

        let apps = registry.begin_group("Apps").register(
            &mut host,
            BindingRequest::new(["Mod4"], Key::sym("Return")).describe("open terminal"),
        );
        let media = registry.begin_group("Media").register(
            &mut host,
            BindingRequest::new(Vec::<String>::new(), Key::sym("XF86AudioPlay")).describe("play"),
        );

        assert_eq!(registry.lookup(&apps[0]).unwrap().group, "Apps");
        assert_eq!(registry.lookup(&media[0]).unwrap().group, "Media");
    }

    #[test]
    fn test_scope_registers_many() {
        let mut host = FakeHost::default();
        let mut registry = Registry::new();
        let mut scope = registry.begin_group("Apps");
        assert_eq!(scope.name(), "Apps");
        scope.register(
            &mut host,
            BindingRequest::new(["Mod4"], Key::sym("Return")).describe("open terminal"),
        );
        scope.register(
            &mut host,
            BindingRequest::new(["Mod4"], Key::sym("d"))
                .on_release(Release::Text("launcher".into())),
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_undocumented_binding_still_created() {
        let mut host = FakeHost::default();
        let mut registry = Registry::new();
        let keys = registry.register(&mut host, BindingRequest::new(["Mod4"], Key::sym("x")));
        assert_eq!(keys.len(), 1);
        assert_eq!(host.created.len(), 1);
        assert_eq!(host.created[0].modifiers, ["Mod4"]);
        assert_eq!(host.created[0].key, Key::sym("x"));
        assert!(!host.created[0].has_press);
        assert!(registry.lookup(&keys[0]).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_only_first_key_documented() {
        let mut host = FakeHost::with_keys_per_binding(2);
        let mut registry = Registry::new();
        let keys = registry.register(
            &mut host,
            BindingRequest::new(["Mod4"], Key::Code(10)).describe("view tag 1"),
        );
        assert_eq!(keys.len(), 2);
        assert!(registry.lookup(&keys[0]).is_some());
        assert!(registry.lookup(&keys[1]).is_none());
    }

    #[test]
    fn test_release_text_not_forwarded() {
        let mut host = FakeHost::default();
        let mut registry = Registry::new();
        registry.register(
            &mut host,
            BindingRequest::new(["Mod4"], Key::sym("d"))
                .on_release(Release::Text("launcher".into())),
        );
        assert!(!host.created[0].has_release);
    }
}
