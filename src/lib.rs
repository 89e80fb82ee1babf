//! Paged tables for ordered collections of records.
//!
//! This library works out which records belong to a requested page, which page
//! links to show around it, and renders the page as an HTML table or through
//! user supplied templates. A small web server and a command line renderer are
//! built on top of it.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod cli;
mod config;
mod date_format;
mod endpoints;
mod html;
mod links;
mod logging;
mod page_state;
mod pagination;
mod render;
mod request;
mod routing;
mod row;
mod source;
mod template;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use cli::PaginatorArgs;
pub use config::{
    Bookend, BookendTarget, DEFAULT_PER_PAGE, DEFAULT_RANGE, DEFAULT_SEPARATOR, LinkStyle,
    PaginationConfig,
};
pub use date_format::{DateFormat, parse_date};
pub use links::{HtmlLinkFactory, LinkFactory, LinkSet, build_links};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use page_state::{PageState, compute_page_state};
pub use pagination::{PageLink, PageRangeWindow, compute_window, create_page_links};
pub use render::{Paginator, TABLE_CLOSE, TABLE_OPEN};
pub use request::{LinkBase, PAGE_PARAM, requested_page};
pub use routing::build_router;
pub use row::{Row, Value};
pub use source::{load_rows, rows_from_csv, rows_from_json};
pub use template::{PAGE_LINKS_PLACEHOLDER, Templates, field_placeholder};

use crate::html::error_view;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("could not listen for the ctrl+c signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A date format description could not be parsed.
    ///
    /// Callers should pass in the original error as a string and the format
    /// description that caused the error.
    #[error("invalid date format \"{1}\": {0}")]
    InvalidDateFormat(String, String),

    /// A template file could not be read.
    ///
    /// Holds the path to the template and the I/O error as a string.
    #[error("could not read the template {0}: {1}")]
    TemplateReadError(String, String),

    /// A data file could not be opened or read.
    ///
    /// Holds the path to the file and the I/O error as a string.
    #[error("could not read the data file {0}: {1}")]
    SourceReadError(String, String),

    /// The data file is neither JSON nor CSV.
    #[error("unsupported data file {0}, expected a .json or .csv file")]
    UnsupportedSource(String),

    /// The data file is not a JSON array of flat objects.
    #[error("could not parse the JSON data: {0}")]
    InvalidJSON(String),

    /// The CSV had issues that prevented it from being parsed.
    #[error("could not parse the CSV data: {0}")]
    InvalidCSV(String),

    /// A request or response body could not be read.
    #[error("could not read the body: {0}")]
    BodyReadError(String),

    /// The rendered page could not be written out.
    #[error("could not write the rendered page: {0}")]
    WriteError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // None of these errors are caused by the client, so the details stay in the logs.
        tracing::error!("An unexpected error occurred: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(
                error_view(
                    "Internal Server Error",
                    "500",
                    "Sorry, something went wrong.",
                    "Try again later or check the server logs",
                )
                .into_string(),
            ),
        )
            .into_response()
    }
}
