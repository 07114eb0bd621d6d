//! Pagination
//!
//! Page navigation for the DataTable. `PageState` is a plain value: every
//! navigation returns a new state instead of mutating the old one.

use std::ops::Range;

use crate::constants::ITEMS_PER_PAGE;

/// Current page over a list of known length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-indexed
    current_page: usize,
    total_items: usize,
    items_per_page: usize,
}

impl PageState {
    /// Start at page 1 with the default page size
    pub fn new(total_items: usize) -> Self {
        Self::with_page_size(total_items, ITEMS_PER_PAGE)
    }

    pub fn with_page_size(total_items: usize, items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            total_items,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Move to page `page`, clamped into `[1, total_pages]`
    ///
    /// Out-of-range requests are expected (repeated "Next" at the last page)
    /// and never fail. With zero pages the state stays on page 1.
    pub fn go_to_page(self, page: i64) -> Self {
        let last = self.total_pages().max(1) as i64;
        Self {
            current_page: page.clamp(1, last) as usize,
            ..self
        }
    }

    pub fn next(self) -> Self {
        let page = self.current_page as i64 + 1;
        self.go_to_page(page)
    }

    pub fn previous(self) -> Self {
        let page = self.current_page as i64 - 1;
        self.go_to_page(page)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Index range of the visible rows, clipped to the list
    pub fn visible_range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.items_per_page).min(self.total_items);
        let end = (start + self.items_per_page).min(self.total_items);
        start..end
    }

    /// Whether page controls should be rendered at all
    pub fn controls_visible(&self) -> bool {
        self.total_pages() > 1
    }

    /// Direct-jump page numbers, `None` when controls are hidden
    pub fn page_numbers(&self) -> Option<Vec<usize>> {
        self.controls_visible()
            .then(|| (1..=self.total_pages()).collect())
    }

    /// Same page size over a new list, back on page 1
    pub fn reset(self, total_items: usize) -> Self {
        Self::with_page_size(total_items, self.items_per_page)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(0)
    }
}
