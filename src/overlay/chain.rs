//! Sequential page presentation

/// A finite sequence of pages and the index of the one showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChain {
    pages: Vec<String>,
    index: usize,
}

impl PageChain {
    /// `pages` must not be empty; an empty input becomes one empty page.
    pub fn new(mut pages: Vec<String>) -> Self {
        if pages.is_empty() {
            pages.push(String::new());
        }
        Self { pages, index: 0 }
    }

    pub fn current(&self) -> &str {
        &self.pages[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.pages.len()
    }

    /// Move to the next page. Returns `None` once the last page is passed.
    pub fn advance(&mut self) -> Option<&str> {
        if self.is_last() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}
