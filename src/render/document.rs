//! Per-group help text

use std::collections::BTreeMap;

use tracing::debug;

use crate::keys::{label_len, BindingKey, Translations};
use crate::registry::Registry;

use super::markup::escape;

/// Trailing spaces between the key column and the help text
const COLUMN_GAP: usize = 2;

/// Styling applied to each help line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStyle {
    pub key_color: String,
    pub help_color: String,
    pub font: String,
}

/// Render documented bindings into one markup block per group.
///
/// Undocumented bindings are skipped. The key column is padded to the
/// longest label across all groups. Lines keep the order of `bindings`.
pub fn render(
    bindings: &[BindingKey],
    registry: &Registry,
    translations: &Translations,
    style: &KeyStyle,
) -> BTreeMap<String, String> {
    let documented: Vec<_> = bindings
        .iter()
        .filter_map(|binding| {
            registry
                .lookup(binding)
                .map(|doc| (translations.format(binding), doc))
        })
        .collect();

    let longest = documented
        .iter()
        .map(|(label, _)| label_len(label))
        .max()
        .unwrap_or(0);

    debug!(
        bindings = bindings.len(),
        documented = documented.len(),
        longest,
        "rendering keybinding help"
    );

    let mut groups: BTreeMap<String, String> = BTreeMap::new();
    for (label, doc) in documented {
        let padded = format!("{:<width$}", label, width = longest + COLUMN_GAP);
        let text = groups.entry(doc.group.clone()).or_default();
        text.push_str(&format!(
            "<span font=\"{}\" foreground=\"{}\">{}</span><span foreground=\"{}\">{}</span>\n",
            style.font,
            style.key_color,
            escape(&padded),
            style.help_color,
            escape(&doc.help_text),
        ));
    }

    groups
}
