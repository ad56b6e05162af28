//! View state
//!
//! Everything the dashboard remembers about what is on screen, kept apart
//! from the records themselves:
//!
//! - **filter**: per-field selections with an `"all"` wildcard
//! - **pagination**: the page cursor of a table
//! - **router**: the active section and its pending transition
//! - **form**: add/edit buffers and details dialogs

pub mod filter;
pub mod form;
pub mod pagination;
pub mod router;

pub use filter::{distinct_values, with_all, Choice, FieldFilter, Filterable, ALL};
pub use form::{DialogState, FormController, SaveOutcome};
pub use pagination::{Page, Pagination, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use router::{Section, SectionRouter, Ticket};

/// Filter then paginate, keeping insertion order
///
/// The cursor is clamped against the filtered length first, so a filter that
/// shrinks the result never leaves the table on an empty page.
pub fn visible_page<'a, T: Filterable>(
    items: &'a [T],
    filter: &FieldFilter,
    pagination: &mut Pagination,
) -> Page<&'a T> {
    let matching = filter.apply(items);
    pagination.clamp(matching.len());
    pagination.paginate(&matching)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Restaurant;
    use crate::provider::{DataProvider, SeedProvider};

    #[test]
    fn test_visible_page_filters_then_slices() {
        let restaurants = SeedProvider.restaurants();
        let filter = FieldFilter::new().field("status", "active");
        let mut pagination = Pagination::new(2);
        pagination.set_page(1, 3);

        let page = visible_page(&restaurants, &filter, &mut pagination);
        let ids: Vec<u32> = page.items.iter().map(|r: &&Restaurant| r.id).collect();
        assert_eq!(ids, vec![5]);
        assert_eq!(page.total, 3);
        assert_eq!(page.page_count, 2);
    }

    #[test]
    fn test_visible_page_clamps_after_narrowing() {
        let restaurants = SeedProvider.restaurants();
        let mut pagination = Pagination::new(2);
        pagination.set_page(2, restaurants.len());

        let filter = FieldFilter::new().field("city", "Austin");
        let page = visible_page(&restaurants, &filter, &mut pagination);
        assert_eq!(pagination.page(), 0);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Taco Fiesta");
    }
}
