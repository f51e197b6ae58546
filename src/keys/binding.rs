//! Binding identity types
//!
//! Bindings are created and owned by the host. This crate only reads them.

use std::fmt;

/// Opaque identity of one host binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(pub u64);

/// The key part of a binding
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Physical keycode, written as `#<code>`
    Code(u32),
    /// Symbolic key name such as `Return` or `d`
    Sym(String),
}

impl Key {
    /// Parse a key from its textual form. `#<digits>` is a keycode,
    /// anything else is a symbol.
    pub fn parse(raw: &str) -> Self {
        raw.strip_prefix('#')
            .and_then(|code| code.parse().ok())
            .map(Key::Code)
            .unwrap_or_else(|| Key::Sym(raw.to_string()))
    }

    pub fn sym(name: impl Into<String>) -> Self {
        Key::Sym(name.into())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Code(code) => write!(f, "#{}", code),
            Key::Sym(name) => write!(f, "{}", name),
        }
    }
}

/// One registered keyboard shortcut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingKey {
    id: BindingId,
    modifiers: Vec<String>,
    key: Key,
}

impl BindingKey {
    pub fn new(id: BindingId, modifiers: Vec<String>, key: Key) -> Self {
        Self { id, modifiers, key }
    }

    pub fn id(&self) -> BindingId {
        self.id
    }

    /// Modifier names in the order they were registered
    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    pub fn key(&self) -> &Key {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keycode() {
        assert_eq!(Key::parse("#14"), Key::Code(14));
        assert_eq!(Key::Code(14).to_string(), "#14");
    }

    #[test]
    fn test_parse_symbol() {
        assert_eq!(Key::parse("Return"), Key::sym("Return"));
        // Not a valid code, stays a symbol
        assert_eq!(Key::parse("#x"), Key::sym("#x"));
        assert_eq!(Key::parse("#"), Key::sym("#"));
    }

    #[test]
    fn test_modifier_order_preserved() {
        let key = BindingKey::new(
            BindingId(1),
            vec!["Shift".into(), "Mod4".into()],
            Key::sym("q"),
        );
        assert_eq!(key.modifiers(), ["Shift", "Mod4"]);
    }
}
