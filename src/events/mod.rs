//! Events module for the help overlay
//!
//! Structured events describing how a page chain progresses, published on
//! an optional broadcast channel for logging or UI hooks.

use serde::{Deserialize, Serialize};

/// Events emitted by the overlay while presenting pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayEvent {
    /// A page was handed to the presentation sink
    PagePresented {
        /// Zero-based page index
        index: usize,
        /// Number of pages in the chain
        total: usize,
    },

    /// The last page was dismissed
    ChainFinished { pages: usize },

    /// A chain stopped before its last page (timeout, new display, sink failure)
    ChainAbandoned {
        /// Index of the page that was showing
        at: usize,
        total: usize,
    },

    /// Nothing to show; the current notification was cleared
    Cleared,
}

impl std::fmt::Display for OverlayEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayEvent::PagePresented { index, total } => {
                write!(f, "PAGE_PRESENTED ({}/{})", index + 1, total)
            }
            OverlayEvent::ChainFinished { pages } => write!(f, "CHAIN_FINISHED ({} pages)", pages),
            OverlayEvent::ChainAbandoned { at, total } => {
                write!(f, "CHAIN_ABANDONED ({}/{})", at + 1, total)
            }
            OverlayEvent::Cleared => write!(f, "CLEARED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = OverlayEvent::PagePresented { index: 1, total: 3 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("page_presented"));
        assert!(json.contains("\"total\":3"));
    }

    #[test]
    fn test_event_deserialization() {
        let json = r#"{"type":"cleared"}"#;
        let event: OverlayEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, OverlayEvent::Cleared);
    }

    #[test]
    fn test_display_is_one_based() {
        let event = OverlayEvent::ChainAbandoned { at: 0, total: 2 };
        assert_eq!(event.to_string(), "CHAIN_ABANDONED (1/2)");
    }
}
