//! The parts of a request that page links are built from.

use axum::http::Uri;

/// The name of the query parameter that holds the page number.
pub const PAGE_PARAM: &str = "page";

/// The path and query parameters that every page link points back to.
///
/// The page parameter itself is never kept, each link sets its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkBase {
    path: String,
    query: Vec<(String, String)>,
}

impl LinkBase {
    /// Create a link base for `path` with the query parameters to keep.
    pub fn new(path: &str, query: Vec<(String, String)>) -> Self {
        let query = query
            .into_iter()
            .filter(|(key, _)| key != PAGE_PARAM)
            .collect();

        Self {
            path: path.to_owned(),
            query,
        }
    }

    /// Take the path and non-page query parameters from a request URI.
    pub fn from_uri(uri: &Uri) -> Self {
        Self::new(uri.path(), parse_query(uri))
    }

    /// The path links point to, without a query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters carried over to every link.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// The URL of `page`.
    pub fn href(&self, page: usize) -> String {
        let mut href = format!("{}?{PAGE_PARAM}={page}", self.path);

        if !self.query.is_empty() {
            match serde_urlencoded::to_string(&self.query) {
                Ok(query) => {
                    href.push('&');
                    href.push_str(&query);
                }
                Err(error) => {
                    tracing::error!("could not encode query parameters {:?}: {error}", self.query)
                }
            }
        }

        href
    }
}

/// Read the requested page number from a request URI.
///
/// A missing, unreadable or non-positive page number means the first page.
pub fn requested_page(uri: &Uri) -> usize {
    parse_query(uri)
        .into_iter()
        .find(|(key, _)| key == PAGE_PARAM)
        .and_then(|(_, value)| value.trim().parse::<i64>().ok())
        .filter(|page| *page > 0)
        .and_then(|page| usize::try_from(page).ok())
        .unwrap_or(1)
}

fn parse_query(uri: &Uri) -> Vec<(String, String)> {
    let Some(query) = uri.query() else {
        return Vec::new();
    };

    serde_urlencoded::from_str(query)
        .inspect_err(|error| tracing::debug!("could not parse query string {query:?}: {error}"))
        .unwrap_or_default()
}
