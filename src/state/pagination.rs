//! Paginator
//!
//! Slices an ordered dataset into fixed-size, 1-indexed pages. Every input
//! is clamped; nothing here can fail.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{debug, warn};

use crate::constants::DEFAULT_PAGE_SIZE;

/// Serializable snapshot of the pagination controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next: bool,
    pub has_prev: bool,
    /// 1-based index of the first row on the page (0 when empty)
    pub first_item: usize,
    /// 1-based index of the last row on the page (0 when empty)
    pub last_item: usize,
}

/// Client-side pagination state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    page_size: usize,
    current_page: usize,
}

impl Paginator {
    /// Create a paginator positioned on page 1
    pub fn new(page_size: usize) -> Self {
        Self {
            total_items: 0,
            page_size: sanitize_page_size(page_size),
            current_page: 1,
        }
    }

    /// Create a paginator for a dataset of `total_items` rows
    pub fn with_total(total_items: usize, page_size: usize) -> Self {
        Self {
            total_items,
            ..Self::new(page_size)
        }
    }

    // ==================== Getters ====================

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages, never less than 1
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// Current page, clamped against the latest dataset length
    pub fn current_page(&self) -> usize {
        self.current_page.clamp(1, self.total_pages())
    }

    pub fn has_prev(&self) -> bool {
        self.current_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    /// Index range of the current page within the dataset
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.current_page() - 1) * self.page_size;
        if start >= self.total_items {
            return 0..0;
        }
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// Slice the current page out of `data`.
    ///
    /// `data` should have `total_items` rows; a shorter slice is clamped
    /// rather than indexed out of bounds.
    pub fn paginate<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        let range = self.page_range();
        let end = range.end.min(data.len());
        let start = range.start.min(end);
        &data[start..end]
    }

    pub fn page_info(&self) -> PageInfo {
        let range = self.page_range();
        let (first_item, last_item) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };

        PageInfo {
            current_page: self.current_page(),
            page_size: self.page_size,
            total_pages: self.total_pages(),
            total_items: self.total_items,
            has_next: self.has_next(),
            has_prev: self.has_prev(),
            first_item,
            last_item,
        }
    }

    // ==================== Setters ====================

    /// Report a new dataset length (refetch, filter change, delete)
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        let clamped = self.current_page();
        if clamped != self.current_page {
            debug!(from = self.current_page, to = clamped, "Current page clamped after dataset change");
            self.current_page = clamped;
        }
    }

    /// Jump to page `page`, clamped into `[1, total_pages]`
    pub fn set_page(&mut self, page: usize) {
        let clamped = page.clamp(1, self.total_pages());
        if clamped != page {
            debug!(requested = page, page = clamped, "Page request clamped");
        }
        self.current_page = clamped;
    }

    /// Change the page size and keep the current page in range
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = sanitize_page_size(page_size);
        if page_size == self.page_size {
            return;
        }
        self.page_size = page_size;
        self.current_page = self.current_page.clamp(1, self.total_pages());
        debug!(page_size, page = self.current_page, "Page size changed");
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.current_page().saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    pub fn last_page(&mut self) {
        self.set_page(self.total_pages());
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

fn sanitize_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        warn!("Page size must be positive, clamping to 1");
        return 1;
    }
    page_size
}
