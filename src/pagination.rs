//! This module works out which page links to show around the requested page.
//!
//! Pages are split into blocks of `range` pages. The links shown are the block
//! that holds the requested page, with links to the neighbouring blocks when
//! there are any.

use serde::Serialize;

use crate::config::BookendTarget;

/// The block of page numbers to show as links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRangeWindow {
    /// The first page in the block, starting from 1.
    pub start: usize,
    /// The last page in the block, inclusive.
    pub end: usize,
    /// Whether there are pages before the block.
    pub show_prev: bool,
    /// Whether there are pages after the block.
    pub show_next: bool,
}

impl PageRangeWindow {
    fn new(start: usize, end: usize, show_prev: bool, show_next: bool) -> Self {
        Self {
            start,
            end,
            show_prev,
            show_next,
        }
    }
}

/// Work out the block of page links to show for `requested_page`.
///
/// `has_external_total` is whether the page count came from an externally
/// supplied total rather than the collection itself.
/// `requested_page` is clamped to the pages that exist.
///
/// Returns `None` when there are no pages.
pub fn compute_window(
    requested_page: usize,
    number_of_pages: usize,
    range: usize,
    has_external_total: bool,
) -> Option<PageRangeWindow> {
    if number_of_pages == 0 {
        return None;
    }

    let range = range.max(1);
    let page = requested_page.clamp(1, number_of_pages);
    let full_blocks = number_of_pages / range;

    let window = if range > number_of_pages && !has_external_total {
        PageRangeWindow::new(1, number_of_pages, false, false)
    } else if page <= range && number_of_pages <= range {
        PageRangeWindow::new(1, number_of_pages, false, false)
    } else if page <= range {
        PageRangeWindow::new(1, range, false, true)
    } else if page > range * full_blocks {
        // The last block, holding fewer than `range` pages.
        PageRangeWindow::new(range * full_blocks + 1, number_of_pages, true, false)
    } else if number_of_pages % range == 0 && page > range * (full_blocks - 1) {
        // The last block, holding exactly `range` pages.
        PageRangeWindow::new(range * (full_blocks - 1) + 1, number_of_pages, true, false)
    } else {
        let position_in_block = if page % range == 0 {
            range - 1
        } else {
            page % range - 1
        };
        let start = page - position_in_block;

        PageRangeWindow::new(start, start + range - 1, true, true)
    };

    tracing::debug!("page {page} of {number_of_pages} shows links for {window:?}");

    Some(window)
}

/// A single entry in the list of page links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageLink {
    /// A link to another page.
    Page(usize),
    /// The requested page, shown without a link.
    Current(usize),
    /// The bookend link to earlier pages, holding the page it points to.
    Prev(usize),
    /// The bookend link to later pages, holding the page it points to.
    Next(usize),
}

/// List the page links for `window`, adding bookends where the window asks for them.
///
/// `requested_page` should be the same page given to [compute_window]. Only a
/// page inside the window is marked current, so a page past the last one marks
/// nothing. Bookends are placed relative to the page clamped into the window.
pub fn create_page_links(
    window: &PageRangeWindow,
    requested_page: usize,
    bookend_target: BookendTarget,
) -> Vec<PageLink> {
    let current = requested_page.max(1);
    let page = current.clamp(window.start, window.end);
    let map_page = |i| {
        if i == current {
            PageLink::Current(i)
        } else {
            PageLink::Page(i)
        }
    };

    let mut links: Vec<PageLink> = (window.start..=window.end).map(map_page).collect();

    if window.show_prev {
        let target = match bookend_target {
            BookendTarget::AdjacentPage => page - 1,
            BookendTarget::AdjacentBlock => window.start - 1,
        };
        links.insert(0, PageLink::Prev(target.max(1)));
    }

    if window.show_next {
        let target = match bookend_target {
            BookendTarget::AdjacentPage => page + 1,
            BookendTarget::AdjacentBlock => window.end + 1,
        };
        links.push(PageLink::Next(target));
    }

    links
}
