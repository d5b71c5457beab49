//! Client-side pagination over the ordered rows.

use std::{any::Any, ops::Range};

use log::debug;
use roster_states::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(crate::TableConfig::default().page_size)
    }
}

impl Pagination {
    /// Starts on the first page. A zero page size is bumped to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total` rows; an empty table still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Positions of the current page within the ordered rows.
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    pub fn is_first(&self) -> bool {
        self.page_index == 0
    }

    pub fn is_last(&self, total: usize) -> bool {
        self.page_index + 1 >= self.page_count(total)
    }

    pub fn next_page(&mut self, total: usize) {
        if !self.is_last(total) {
            self.page_index += 1;
            debug!("Moved to page {}", self.page_index);
        }
    }

    pub fn previous_page(&mut self) {
        if !self.is_first() {
            self.page_index -= 1;
            debug!("Moved to page {}", self.page_index);
        }
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn last_page(&mut self, total: usize) {
        self.page_index = self.page_count(total) - 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
        debug!("Page size is now {}", self.page_size);
    }

    /// Pulls the index back into range after the row count shrank.
    /// Returns `true` if it moved.
    pub fn clamp(&mut self, total: usize) -> bool {
        let last = self.page_count(total) - 1;
        if self.page_index > last {
            self.page_index = last;
            return true;
        }
        false
    }
}

impl State for Pagination {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
