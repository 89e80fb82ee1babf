//! Implements a struct that holds the state of the web server.

use std::sync::Arc;

use crate::{render::Paginator, row::Row};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The paginator shared by every request.
    pub paginator: Arc<Paginator>,

    /// The collection that is paged through.
    pub rows: Arc<Vec<Row>>,

    /// The heading shown above the table.
    pub title: String,
}

impl AppState {
    /// Create a new [AppState] that serves pages of `rows`.
    pub fn new(paginator: Paginator, rows: Vec<Row>, title: &str) -> Self {
        Self {
            paginator: Arc::new(paginator),
            rows: Arc::new(rows),
            title: title.to_owned(),
        }
    }
}
