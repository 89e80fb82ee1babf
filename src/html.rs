//! The HTML page shell shared by the web views.

use maud::{DOCTYPE, Markup, PreEscaped, html};

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page";

const STYLE: &str = r#"
    body {
        font-family: system-ui, sans-serif;
        margin: 0;
        color: #111827;
        background: #f9fafb;
    }

    .page {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 2rem 1.5rem;
    }

    .paged-table td {
        padding: 0.5rem 1rem;
        border-bottom: 1px solid #e5e7eb;
    }

    .page-link {
        color: #2563eb;
    }

    .page-current {
        font-weight: bold;
    }
"#;

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Paged Table" }
                style { (PreEscaped(STYLE)) }
            }

            body
            {
                (content)
            }
        }
    }
}

/// The page that shows one page of a paged table.
///
/// `rendered` is the output of the paginator and is inserted without escaping.
pub fn paged_table_view(title: &str, page: usize, number_of_pages: usize, rendered: &str) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { (title) }

            @if number_of_pages == 0 {
                p { "There is nothing to show yet." }
            } @else {
                p { "Page " (page) " of " (number_of_pages) }
            }

            (PreEscaped(rendered))
        }
    );

    base(title, &content)
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class=(PAGE_CONTAINER_STYLE)
        {
            h1 { (header) }

            p { (description) }

            p { (fix) }

            a href="/" { "Back to the first page" }
        }
    );

    base(title, &content)
}
