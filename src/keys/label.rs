//! Label formatting for bindings
//!
//! Labels look like `Mod1 + Mod2 + Sym`. Each modifier and the symbol are
//! looked up in the translation table first.

use std::collections::HashMap;

use super::binding::BindingKey;

/// Built-in translations, overridable by configuration
const DEFAULT_TRANSLATIONS: &[(&str, &str)] = &[
    ("Mod4", "⊞"),
    ("Shift", "⇧"),
    ("Control", "Ctrl"),
    ("#14", "#"),
    (" ", "Space"),
];

const SEPARATOR: &str = " + ";

/// Translation table from raw modifier/symbol names to display strings
#[derive(Debug, Clone)]
pub struct Translations {
    table: HashMap<String, String>,
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            table: DEFAULT_TRANSLATIONS
                .iter()
                .map(|(raw, shown)| (raw.to_string(), shown.to_string()))
                .collect(),
        }
    }
}

impl Translations {
    /// Defaults merged with `overrides`; overrides win on collision.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut translations = Self::default();
        for (raw, shown) in overrides {
            translations.table.insert(raw.clone(), shown.clone());
        }
        translations
    }

    /// Translate a single name, falling back to the raw name
    pub fn translate<'a>(&'a self, raw: &'a str) -> &'a str {
        self.table.get(raw).map(String::as_str).unwrap_or(raw)
    }

    /// Format the label of a binding
    pub fn format(&self, binding: &BindingKey) -> String {
        let symbol = binding.key().to_string();
        let symbol = self.translate(&symbol);

        let mut label = String::new();
        for modifier in binding.modifiers() {
            label.push_str(self.translate(modifier));
            label.push_str(SEPARATOR);
        }
        label.push_str(symbol);
        label
    }
}

/// Length of a label in Unicode scalar values, used for column alignment
pub fn label_len(label: &str) -> usize {
    label.chars().count()
}
