//! Application router configuration and the route handlers for the paged table.

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use crate::{
    AppState, endpoints,
    html::{error_view, paged_table_view},
    page_state::PageState,
    pagination::{PageLink, PageRangeWindow},
    request::{LinkBase, requested_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_page))
        .route(endpoints::PAGE_API, get(get_page_description))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Render the requested page of the table.
async fn get_page(State(state): State<AppState>, uri: Uri) -> Response {
    let page = requested_page(&uri);
    let base = LinkBase::from_uri(&uri);
    let page_state = state.paginator.page_state(state.rows.len(), page);
    let rendered = state.paginator.render(&state.rows, page, &base);
    // The page whose rows were rendered, which is the first page after a fallback.
    let shown_page = page_state.start / state.paginator.config().per_page() + 1;

    Html(
        paged_table_view(
            &state.title,
            shown_page,
            page_state.number_of_pages,
            &rendered,
        )
        .into_string(),
    )
    .into_response()
}

/// How a page is laid out, without the rendered markup.
#[derive(Debug, Serialize)]
struct PageDescription {
    page: usize,
    state: PageState,
    window: Option<PageRangeWindow>,
    links: Vec<PageLink>,
}

/// Describe the requested page as JSON.
async fn get_page_description(State(state): State<AppState>, uri: Uri) -> Json<PageDescription> {
    let page = requested_page(&uri);
    let item_count = state.rows.len();

    Json(PageDescription {
        page,
        state: state.paginator.page_state(item_count, page),
        window: state.paginator.window(item_count, page),
        links: state.paginator.page_links(item_count, page),
    })
}

async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(
            error_view(
                "Not Found",
                "404",
                "Something's missing.",
                "Sorry, we can't find that page.",
            )
            .into_string(),
        ),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::{Html, Selector};
    use serde_json::json;

    use crate::{
        AppState,
        config::{Bookend, LinkStyle, PaginationConfig},
        endpoints,
        render::Paginator,
        row::Row,
        test_utils::assert_valid_html,
    };

    use super::build_router;

    fn get_test_server(item_count: i64) -> TestServer {
        let rows = (1..=item_count)
            .map(|id| Row::new().with_field("id", id).with_field("name", format!("Item {id}")))
            .collect();
        let paginator = Paginator::new(PaginationConfig::new(2, 3, None))
            .with_style(LinkStyle::default().with_bookend(Bookend::PrevNext));
        let state = AppState::new(paginator, rows, "Items");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[track_caller]
    fn must_get_cells(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("table.paged-table td").unwrap())
            .map(|cell| cell.text().collect())
            .collect()
    }

    #[tokio::test]
    async fn root_shows_first_page() {
        let server = get_test_server(5);

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
        assert_eq!(must_get_cells(&html), ["1", "Item 1", "2", "Item 2"]);
    }

    #[tokio::test]
    async fn shows_requested_page_with_links_back() {
        let server = get_test_server(5);

        let response = server
            .get(endpoints::ROOT)
            .add_query_param("page", 2)
            .add_query_param("sort", "name")
            .await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
        assert_eq!(must_get_cells(&html), ["3", "Item 3", "4", "Item 4"]);

        let hrefs: Vec<&str> = html
            .select(&Selector::parse("main a").unwrap())
            .filter_map(|link| link.value().attr("href"))
            .collect();
        assert!(
            hrefs.contains(&"/?page=1&sort=name"),
            "want link to page 1 keeping the sort parameter, got {hrefs:?}"
        );
    }

    #[tokio::test]
    async fn invalid_page_shows_first_page() {
        let server = get_test_server(5);

        let response = server
            .get(endpoints::ROOT)
            .add_query_param("page", "abc")
            .await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_eq!(must_get_cells(&html), ["1", "Item 1", "2", "Item 2"]);
    }

    #[tokio::test]
    async fn page_past_the_end_describes_rows_shown() {
        let server = get_test_server(5);

        let response = server
            .get(endpoints::ROOT)
            .add_query_param("page", 10)
            .await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
        assert_eq!(must_get_cells(&html), ["1", "Item 1", "2", "Item 2"]);
        let summary: String = html
            .select(&Selector::parse("main > p").unwrap())
            .next()
            .expect("No page summary found")
            .text()
            .collect();
        assert_eq!(summary, "Page 1 of 3");
        assert_eq!(html.select(&Selector::parse("main span").unwrap()).count(), 0);
    }

    #[tokio::test]
    async fn empty_collection_renders_empty_table() {
        let server = get_test_server(0);

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
        assert!(must_get_cells(&html).is_empty());
    }

    #[tokio::test]
    async fn page_api_describes_page() {
        let server = get_test_server(9);

        let response = server
            .get(endpoints::PAGE_API)
            .add_query_param("page", 4)
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<serde_json::Value>(),
            json!({
                "page": 4,
                "state": {"number_of_pages": 5, "remainder": 1, "start": 6, "end": 8},
                "window": {"start": 4, "end": 5, "show_prev": true, "show_next": false},
                "links": [
                    {"kind": "prev", "page": 3},
                    {"kind": "current", "page": 4},
                    {"kind": "page", "page": 5}
                ]
            })
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server(1);

        let response = server.get("/does/not/exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
    }
}
