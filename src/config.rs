//! Configuration for paging a collection and styling its page links.

use serde::Deserialize;

/// The number of items per page used when none, or an invalid value, is given.
pub const DEFAULT_PER_PAGE: usize = 10;
/// The number of page links shown at once when none, or an invalid value, is given.
pub const DEFAULT_RANGE: usize = 10;
/// The text placed between page links.
pub const DEFAULT_SEPARATOR: &str = " | ";

/// The config for pagination.
///
/// Invalid values are normalized rather than rejected: a per-page count or a
/// range of zero falls back to the defaults ([DEFAULT_PER_PAGE] and
/// [DEFAULT_RANGE]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    per_page: usize,
    range: usize,
    total: Option<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            range: DEFAULT_RANGE,
            total: None,
        }
    }
}

impl PaginationConfig {
    /// Create a config, normalizing `per_page` and `range`.
    pub fn new(per_page: usize, range: usize, total: Option<usize>) -> Self {
        Self::default()
            .with_per_page(per_page)
            .with_range(range)
            .with_total(total)
    }

    /// Set the number of items per page.
    pub fn with_per_page(self, per_page: usize) -> Self {
        let per_page = if per_page == 0 {
            tracing::warn!("per page must be positive, using the default {DEFAULT_PER_PAGE}");
            DEFAULT_PER_PAGE
        } else {
            per_page
        };

        Self { per_page, ..self }
    }

    /// Set the maximum number of page links shown at once.
    pub fn with_range(self, range: usize) -> Self {
        let range = if range == 0 {
            tracing::warn!("page range must be positive, using the default {DEFAULT_RANGE}");
            DEFAULT_RANGE
        } else {
            range
        };

        Self { range, ..self }
    }

    /// Set the externally counted total number of items.
    ///
    /// Use this when the collection passed to the paginator only holds part of
    /// the data set, e.g. the rows of a paged database query.
    pub fn with_total(self, total: Option<usize>) -> Self {
        Self { total, ..self }
    }

    /// The number of items per page, always positive.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// The maximum number of page links shown at once, always positive.
    pub fn range(&self) -> usize {
        self.range
    }

    /// The externally counted total, if one was given.
    pub fn total(&self) -> Option<usize> {
        self.total
    }
}

/// The pair of labels used for the links either side of the page links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Bookend {
    /// `<` and `>`.
    #[default]
    SingleArrows,
    /// `<<` and `>>`.
    DoubleArrows,
    /// `Prev` and `Next`.
    PrevNext,
    /// `...` and `...`.
    Ellipsis,
}

impl Bookend {
    /// The label of the link to earlier pages.
    pub fn prev_label(self) -> &'static str {
        match self {
            Self::SingleArrows => "<",
            Self::DoubleArrows => "<<",
            Self::PrevNext => "Prev",
            Self::Ellipsis => "...",
        }
    }

    /// The label of the link to later pages.
    pub fn next_label(self) -> &'static str {
        match self {
            Self::SingleArrows => ">",
            Self::DoubleArrows => ">>",
            Self::PrevNext => "Next",
            Self::Ellipsis => "...",
        }
    }
}

/// Which page the bookend links point to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BookendTarget {
    /// The page just before or after the requested page.
    #[default]
    AdjacentPage,
    /// The page just outside the visible block of page links.
    AdjacentBlock,
}

/// How page links are labelled, joined and styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStyle {
    bookend: Bookend,
    bookend_target: BookendTarget,
    separator: String,
    link_class: Option<String>,
    current_class: Option<String>,
}

impl Default for LinkStyle {
    fn default() -> Self {
        Self {
            bookend: Bookend::default(),
            bookend_target: BookendTarget::default(),
            separator: DEFAULT_SEPARATOR.to_owned(),
            link_class: None,
            current_class: None,
        }
    }
}

impl LinkStyle {
    /// Set the bookend labels.
    pub fn with_bookend(self, bookend: Bookend) -> Self {
        Self { bookend, ..self }
    }

    /// Set where the bookend links point to.
    pub fn with_bookend_target(self, bookend_target: BookendTarget) -> Self {
        Self {
            bookend_target,
            ..self
        }
    }

    /// Set the text placed between page links.
    pub fn with_separator(self, separator: &str) -> Self {
        Self {
            separator: separator.to_owned(),
            ..self
        }
    }

    /// Set the CSS class of links to other pages.
    pub fn with_link_class(self, link_class: Option<String>) -> Self {
        Self { link_class, ..self }
    }

    /// Set the CSS class of the current page marker.
    pub fn with_current_class(self, current_class: Option<String>) -> Self {
        Self {
            current_class,
            ..self
        }
    }

    /// The bookend labels.
    pub fn bookend(&self) -> Bookend {
        self.bookend
    }

    /// Where the bookend links point to.
    pub fn bookend_target(&self) -> BookendTarget {
        self.bookend_target
    }

    /// The text placed between page links.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The CSS class of links to other pages.
    pub fn link_class(&self) -> Option<&str> {
        self.link_class.as_deref()
    }

    /// The CSS class of the current page marker.
    pub fn current_class(&self) -> Option<&str> {
        self.current_class.as_deref()
    }
}
