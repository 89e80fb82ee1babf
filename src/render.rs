//! Renders one page of a collection as an HTML table or through templates.

use std::io::Write;

use maud::html;

use crate::{
    Error,
    config::{LinkStyle, PaginationConfig},
    date_format::DateFormat,
    links::{HtmlLinkFactory, LinkSet, build_links},
    page_state::{PageState, compute_page_state},
    pagination::{PageLink, PageRangeWindow, compute_window, create_page_links},
    request::LinkBase,
    row::{Row, Value},
    template::{Templates, fill_page_links, fill_row},
};

/// The opening tag of the default table markup.
pub const TABLE_OPEN: &str =
    r#"<table class="paged-table" cellpadding="0" cellspacing="0" border="0">"#;
/// The closing tag of the default table markup.
pub const TABLE_CLOSE: &str = "</table>";

/// Pages through a collection of rows and renders the requested page.
///
/// A paginator only holds configuration. The collection is borrowed for each
/// call and every derived value is computed from scratch, so one paginator can
/// serve any number of requests.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    config: PaginationConfig,
    style: LinkStyle,
    templates: Templates,
    date_format: Option<DateFormat>,
    raw_values: bool,
}

impl Paginator {
    /// Create a paginator with the default link style and table markup.
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Set how page links are labelled and styled.
    pub fn with_style(self, style: LinkStyle) -> Self {
        Self { style, ..self }
    }

    /// Set the header, row and footer templates.
    pub fn with_templates(self, templates: Templates) -> Self {
        Self { templates, ..self }
    }

    /// Set the format used to display date values.
    pub fn with_date_format(self, date_format: Option<DateFormat>) -> Self {
        Self {
            date_format,
            ..self
        }
    }

    /// Substitute row template values without HTML escaping.
    ///
    /// Use this for templates that do not produce HTML. Default table rows are
    /// always escaped.
    pub fn with_raw_values(self, raw_values: bool) -> Self {
        Self { raw_values, ..self }
    }

    /// The pagination config.
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// The link style.
    pub fn style(&self) -> &LinkStyle {
        &self.style
    }

    /// The templates.
    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// The date format, if dates are reformatted.
    pub fn date_format(&self) -> Option<&DateFormat> {
        self.date_format.as_ref()
    }

    /// Whether row template values are substituted without escaping.
    pub fn raw_values(&self) -> bool {
        self.raw_values
    }

    /// Calculate the page count and the slice of items for `page`.
    pub fn page_state(&self, item_count: usize, page: usize) -> PageState {
        compute_page_state(item_count, self.config.per_page(), page, self.config.total())
    }

    /// Work out which page links to show for `page`.
    pub fn window(&self, item_count: usize, page: usize) -> Option<PageRangeWindow> {
        let state = self.page_state(item_count, page);

        self.window_for(&state, page)
    }

    /// List the page links for `page` without rendering them.
    pub fn page_links(&self, item_count: usize, page: usize) -> Vec<PageLink> {
        self.window(item_count, page)
            .map(|window| create_page_links(&window, page, self.style.bookend_target()))
            .unwrap_or_default()
    }

    /// Render the page links for `page`.
    pub fn links(&self, item_count: usize, page: usize, base: &LinkBase) -> LinkSet {
        let state = self.page_state(item_count, page);

        self.link_set(&state, page, base)
    }

    /// Render `page` of `items` and return the text.
    pub fn render(&self, items: &[Row], page: usize, base: &LinkBase) -> String {
        let state = self.page_state(items.len(), page);
        let links = self.link_set(&state, page, base);
        let joined_links = if links.len() > 1 {
            links.join(self.style.separator())
        } else {
            String::new()
        };

        tracing::debug!(
            "rendering page {page} of {} with items {}..{}",
            state.number_of_pages,
            state.start,
            state.end
        );

        let mut output = String::new();

        match &self.templates.header {
            Some(header) => output.push_str(&fill_page_links(header, &joined_links)),
            None => {
                if !joined_links.is_empty() {
                    output.push_str(&joined_links);
                    output.push('\n');
                }
                output.push_str(TABLE_OPEN);
                output.push('\n');
            }
        }

        for row in (state.start..state.end).filter_map(|index| items.get(index)) {
            match &self.templates.row {
                Some(template) => output.push_str(&self.row_from_template(template, row)),
                None => {
                    output.push_str(&self.default_row(row));
                    output.push('\n');
                }
            }
        }

        match &self.templates.footer {
            Some(footer) => output.push_str(&fill_page_links(footer, &joined_links)),
            None => {
                output.push_str(TABLE_CLOSE);
                output.push('\n');
                if !joined_links.is_empty() {
                    output.push_str(&joined_links);
                    output.push('\n');
                }
            }
        }

        output
    }

    /// Render `page` of `items` and write it to `writer`.
    ///
    /// The page is rendered in full before anything is written.
    ///
    /// # Errors
    /// Returns [Error::WriteError] if the output cannot be written.
    pub fn render_to(
        &self,
        items: &[Row],
        page: usize,
        base: &LinkBase,
        mut writer: impl Write,
    ) -> Result<(), Error> {
        let output = self.render(items, page, base);

        writer
            .write_all(output.as_bytes())
            .and_then(|_| writer.flush())
            .inspect_err(|error| tracing::error!("could not write rendered page: {error}"))
            .map_err(|error| Error::WriteError(error.to_string()))
    }

    fn window_for(&self, state: &PageState, page: usize) -> Option<PageRangeWindow> {
        compute_window(
            page,
            state.number_of_pages,
            self.config.range(),
            self.config.total().is_some(),
        )
    }

    fn link_set(&self, state: &PageState, page: usize, base: &LinkBase) -> LinkSet {
        match self.window_for(state, page) {
            Some(window) => build_links(
                &window,
                page,
                &self.style,
                &HtmlLinkFactory::new(base, &self.style),
            ),
            None => LinkSet::default(),
        }
    }

    fn default_row(&self, row: &Row) -> String {
        let cells = row.iter().map(|(_, value)| self.display_value(value));

        let markup = html! {
            tr { @for cell in cells { td { (cell) } } }
        };

        format!("    {}", markup.into_string())
    }

    fn row_from_template(&self, template: &str, row: &Row) -> String {
        let fields = row.iter().map(|(name, value)| {
            let value = if is_date_field(name) {
                self.display_date_field(value)
            } else {
                self.display_value(value)
            };

            if self.raw_values {
                (name, value)
            } else {
                (name, escape(&value))
            }
        });

        fill_row(template, fields)
    }

    /// The value as text, reformatted when it holds a date.
    fn display_value(&self, value: &Value) -> String {
        match (&self.date_format, value) {
            (Some(date_format), Value::Text(text)) => {
                date_format.reformat(text).unwrap_or_else(|| text.clone())
            }
            _ => value.to_string(),
        }
    }

    /// Like [Paginator::display_value], but whole numbers are read as Unix timestamps.
    fn display_date_field(&self, value: &Value) -> String {
        match (&self.date_format, value) {
            (Some(date_format), Value::Integer(seconds)) => date_format
                .reformat_timestamp(*seconds)
                .unwrap_or_else(|| value.to_string()),
            _ => self.display_value(value),
        }
    }
}

fn is_date_field(name: &str) -> bool {
    name.to_lowercase().contains("date")
}

fn escape(text: &str) -> String {
    let markup = html! { (text) };

    markup.into_string()
}
