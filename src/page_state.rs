//! Works out which slice of a collection belongs to a page.

use serde::Serialize;

/// The slice of items for the requested page and the page count.
///
/// `start` is inclusive and `end` exclusive, both zero-based indices into the
/// collection. `end` may run past the collection when the requested page is
/// not full, callers must skip indices that hold no item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    /// The number of pages needed to show every item.
    pub number_of_pages: usize,
    /// The number of items on the last page when it is not full, otherwise zero.
    pub remainder: usize,
    /// The index of the first item on the page.
    pub start: usize,
    /// One past the index of the last item on the page.
    pub end: usize,
}

/// Calculate the page count and the slice of items for `requested_page`.
///
/// `total` replaces `item_count` for the page count when it is positive, which
/// supports collections that only hold part of an externally counted data set.
/// `per_page` must be positive, see [crate::PaginationConfig]. Pages are
/// numbered from 1, a `requested_page` of 0 is read as page 1.
///
/// When the page would start at or past the end of the collection the first
/// page is returned instead (`start = 0`, `end = per_page`).
pub fn compute_page_state(
    item_count: usize,
    per_page: usize,
    requested_page: usize,
    total: Option<usize>,
) -> PageState {
    let per_page = per_page.max(1);
    let page = requested_page.max(1);
    let effective_count = match total {
        Some(total) if total > 0 => total,
        _ => item_count,
    };

    let remainder = effective_count % per_page;
    let number_of_pages = effective_count / per_page + usize::from(remainder != 0);

    let start = (page - 1).saturating_mul(per_page);
    let end = if page == number_of_pages && remainder == 0 {
        start.saturating_add(per_page)
    } else if page == number_of_pages {
        start.saturating_add(remainder)
    } else {
        page.saturating_mul(per_page)
    };

    if start >= item_count {
        tracing::debug!(
            "page {page} starts at item {start} but only {item_count} items are loaded, \
            falling back to the first page"
        );

        return PageState {
            number_of_pages,
            remainder,
            start: 0,
            end: per_page,
        };
    }

    PageState {
        number_of_pages,
        remainder,
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::{PageState, compute_page_state};

    #[test]
    fn first_page_of_externally_counted_total() {
        let want = PageState {
            number_of_pages: 10,
            remainder: 5,
            start: 0,
            end: 10,
        };

        let got = compute_page_state(95, 10, 1, Some(95));

        assert_eq!(want, got);
    }

    #[test]
    fn last_page_with_remainder_ends_at_last_item() {
        let want = PageState {
            number_of_pages: 5,
            remainder: 7,
            start: 40,
            end: 47,
        };

        let got = compute_page_state(47, 10, 5, None);

        assert_eq!(want, got);
    }

    #[test]
    fn last_page_without_remainder_is_full() {
        let want = PageState {
            number_of_pages: 4,
            remainder: 0,
            start: 30,
            end: 40,
        };

        let got = compute_page_state(40, 10, 4, None);

        assert_eq!(want, got);
    }

    #[test]
    fn middle_page() {
        let got = compute_page_state(47, 10, 3, None);

        assert_eq!((got.start, got.end), (20, 30));
    }

    #[test]
    fn page_past_the_end_falls_back_to_first_page() {
        let want = PageState {
            number_of_pages: 5,
            remainder: 7,
            start: 0,
            end: 10,
        };

        let got = compute_page_state(47, 10, 10, Some(47));

        assert_eq!(want, got);
    }

    #[test]
    fn total_larger_than_loaded_items_falls_back_to_first_page() {
        // Only the first 10 of 100 items are loaded.
        let got = compute_page_state(10, 10, 3, Some(100));

        assert_eq!(got.number_of_pages, 10);
        assert_eq!((got.start, got.end), (0, 10));
    }

    #[test]
    fn zero_total_uses_item_count() {
        let got = compute_page_state(25, 10, 1, Some(0));

        assert_eq!(got.number_of_pages, 3);
        assert_eq!(got.remainder, 5);
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let want = PageState {
            number_of_pages: 0,
            remainder: 0,
            start: 0,
            end: 10,
        };

        let got = compute_page_state(0, 10, 1, None);

        assert_eq!(want, got);
    }

    #[test]
    fn page_zero_is_read_as_first_page() {
        assert_eq!(
            compute_page_state(30, 10, 0, None),
            compute_page_state(30, 10, 1, None)
        );
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let got = compute_page_state(30, 10, usize::MAX, None);

        assert_eq!((got.start, got.end), (0, 10));
    }

    #[test]
    fn last_page_of_huge_total_does_not_overflow() {
        let last_page = usize::MAX / 10 + 1;

        let got = compute_page_state(0, 10, last_page, Some(usize::MAX));

        assert_eq!(got.number_of_pages, last_page);
        assert_eq!(got.remainder, 5);
        assert_eq!((got.start, got.end), (0, 10));
    }

    #[test]
    fn last_page_of_huge_total_ends_at_last_item() {
        let last_page = usize::MAX / 10 + 1;

        let got = compute_page_state(usize::MAX, 10, last_page, None);

        assert_eq!((got.start, got.end), (usize::MAX - 5, usize::MAX));
    }

    #[test]
    fn page_count_is_ceiling_of_item_count_over_per_page() {
        for per_page in 1..=12 {
            for item_count in 0_usize..=50 {
                let got = compute_page_state(item_count, per_page, 1, None);
                let want = item_count.div_ceil(per_page);

                assert_eq!(
                    got.number_of_pages, want,
                    "want {want} pages for {item_count} items with {per_page} per page, got {}",
                    got.number_of_pages
                );
            }
        }
    }

    #[test]
    fn pages_partition_the_collection() {
        for per_page in 1..=8 {
            for item_count in 1_usize..=40 {
                let number_of_pages = item_count.div_ceil(per_page);
                let mut next_index = 0;

                for page in 1..=number_of_pages {
                    let state = compute_page_state(item_count, per_page, page, None);

                    assert_eq!(
                        state.start, next_index,
                        "page {page} of {item_count} items ({per_page} per page) leaves a gap"
                    );
                    assert!(state.start < state.end);
                    assert!(state.end - state.start <= per_page);

                    next_index = state.end;
                }

                assert_eq!(next_index, item_count);
            }
        }
    }
}
