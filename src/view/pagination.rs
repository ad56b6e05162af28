//! Table pagination
//!
//! A cursor of (page index, page size) that always points inside the
//! collection it pages over. Changing the page size returns to the first
//! page; shrinking the collection pulls the cursor back to its last page.

use serde::Serialize;
use std::ops::Range;

/// Page sizes offered by the restaurant table
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 25];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Cursor on the first page; a zero page size is treated as 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total / page_size)`
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    fn last_page(&self, total: usize) -> usize {
        self.page_count(total).saturating_sub(1)
    }

    /// Move to a page, clamped into `0..page_count`
    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.min(self.last_page(total));
    }

    /// Change the page size and return to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn next(&mut self, total: usize) {
        self.set_page(self.page + 1, total);
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Pull the cursor back inside a collection that may have shrunk
    pub fn clamp(&mut self, total: usize) {
        self.set_page(self.page, total);
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// Index range of the current page within a collection of `total`
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// The current page of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// The current page of `items` with its position metadata
    pub fn paginate<T: Clone>(&self, items: &[T]) -> Page<T> {
        let total = items.len();
        Page {
            items: self.slice(items).to_vec(),
            page: self.page,
            page_size: self.page_size,
            page_count: self.page_count(total),
            range: self.range(total),
            total,
        }
    }
}

/// One page of a derived view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    /// Position of `items` within the filtered collection
    pub range: Range<usize>,
    /// Size of the filtered collection
    pub total: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Displayed-rows label, e.g. "1–5 of 12"
    pub fn label(&self) -> String {
        if self.total == 0 {
            return "0–0 of 0".to_string();
        }
        format!("{}–{} of {}", self.range.start + 1, self.range.end, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_and_last_page_size() {
        let items: Vec<u32> = (0..23).collect();
        let mut pagination = Pagination::new(5);

        let pages = pagination.page_count(items.len());
        assert_eq!(pages, 5);

        pagination.set_page(pages - 1, items.len());
        let last = pagination.slice(&items);
        assert_eq!(last.len(), items.len() - 5 * (pages - 1));
        assert_eq!(last, &[20, 21, 22]);
    }

    #[test]
    fn test_exact_multiple() {
        let pagination = Pagination::new(5);
        assert_eq!(pagination.page_count(10), 2);
        assert_eq!(pagination.page_count(0), 0);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut pagination = Pagination::new(5);
        pagination.set_page(3, 23);
        assert_eq!(pagination.page(), 3);

        pagination.set_page_size(10);
        assert_eq!(pagination.page(), 0);
        assert_eq!(pagination.page_size(), 10);

        pagination.set_page(1, 23);
        pagination.set_page_size(10);
        assert_eq!(pagination.page(), 0);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut pagination = Pagination::new(10);
        pagination.set_page(7, 23);
        assert_eq!(pagination.page(), 2);

        pagination.set_page(4, 0);
        assert_eq!(pagination.page(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut pagination = Pagination::new(5);
        pagination.set_page(2, 11);
        assert_eq!(pagination.page(), 2);

        pagination.clamp(10);
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.range(10), 5..10);
    }

    #[test]
    fn test_next_prev() {
        let mut pagination = Pagination::new(5);
        assert!(!pagination.has_prev());
        pagination.next(12);
        pagination.next(12);
        pagination.next(12);
        assert_eq!(pagination.page(), 2);
        assert!(!pagination.has_next(12));

        pagination.prev();
        assert_eq!(pagination.page(), 1);
        assert!(pagination.has_prev());
    }

    #[test]
    fn test_paginate_label() {
        let items: Vec<u32> = (1..=12).collect();
        let mut pagination = Pagination::new(5);
        pagination.set_page(2, items.len());

        let page = pagination.paginate(&items);
        assert_eq!(page.items, vec![11, 12]);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.label(), "11–12 of 12");

        let empty = Pagination::new(5).paginate::<u32>(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.label(), "0–0 of 0");
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let mut pagination = Pagination::new(0);
        assert_eq!(pagination.page_size(), 1);
        pagination.set_page_size(0);
        assert_eq!(pagination.page_size(), 1);
    }
}
