//! The API endpoints URIs.

/// The page that shows the paged table.
pub const ROOT: &str = "/";
/// The route that describes a page as JSON.
pub const PAGE_API: &str = "/api/page";
