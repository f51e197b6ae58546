//! Rendering documented bindings into paged markup
//!
//! `render` produces one text block per group; `paginate` packs those
//! blocks into pages that fit the screen.

mod document;
mod markup;
mod paginate;

pub use document::{render, KeyStyle};
pub use markup::{escape, strip};
pub use paginate::{max_page_height, paginate, MORE_HINT};
