//! Packing group blocks into screen-sized pages

use std::collections::BTreeMap;

use tracing::debug;

use crate::host::TextMeasure;

use super::markup::escape;

/// Appended to every page except the last
pub const MORE_HINT: &str = "\n<i>Click to see more...</i>";

/// Usable page height inside the notification frame
pub fn max_page_height(work_area_height: u32, border_width: u32, padding: u32) -> u32 {
    work_area_height
        .saturating_sub(border_width.saturating_mul(2))
        .saturating_sub(padding.saturating_mul(2))
}

/// Split rendered groups into pages no taller than `max_height`.
///
/// Groups are visited in name order and placed greedily. A block that does
/// not fit starts a new page; a block is always placed on an empty page,
/// even if it alone is taller than `max_height`, so no group is dropped.
/// Always returns at least one page, which is empty when `groups` is.
pub fn paginate<M: TextMeasure + ?Sized>(
    groups: &BTreeMap<String, String>,
    max_height: u32,
    measure: &M,
) -> Vec<String> {
    let mut pages = Vec::new();
    let mut page = String::new();

    for (name, text) in groups {
        let block = format!("<b>{}</b>\n{}", escape(name), text);

        if page.is_empty() {
            page = block;
            continue;
        }

        let candidate = format!("{}\n{}", page, block);
        if measure.height(&candidate) <= max_height {
            page = candidate;
        } else {
            debug!(group = %name, page = pages.len() + 1, "group does not fit, starting new page");
            page.push_str(MORE_HINT);
            pages.push(std::mem::replace(&mut page, block));
        }
    }
    pages.push(page);

    debug!(groups = groups.len(), pages = pages.len(), max_height, "paginated help");
    pages
}
