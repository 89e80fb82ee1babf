//! Command line arguments shared by the binaries.

use std::path::PathBuf;

use crate::{
    Error,
    config::{
        Bookend, BookendTarget, DEFAULT_PER_PAGE, DEFAULT_RANGE, DEFAULT_SEPARATOR, LinkStyle,
        PaginationConfig,
    },
    date_format::DateFormat,
    render::Paginator,
    row::Row,
    source::load_rows,
    template::Templates,
};

/// The data to page through and how to display it.
#[derive(clap::Args, Debug, Clone)]
pub struct PaginatorArgs {
    /// File path to a JSON array of objects or a CSV file with a header row.
    #[arg(long)]
    pub data_path: PathBuf,

    /// The number of items on each page.
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: usize,

    /// The number of page links to show at once.
    #[arg(long, default_value_t = DEFAULT_RANGE)]
    pub range: usize,

    /// The total number of items, when the data file only holds some of them.
    #[arg(long)]
    pub total: Option<usize>,

    /// The labels for the links either side of the page links.
    #[arg(long, value_enum, default_value_t = Bookend::default())]
    pub bookend: Bookend,

    /// Which page the bookend links point to.
    #[arg(long, value_enum, default_value_t = BookendTarget::default())]
    pub bookend_target: BookendTarget,

    /// The text between page links.
    #[arg(long, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// The CSS class for links to other pages.
    #[arg(long)]
    pub link_class: Option<String>,

    /// The CSS class for the current page.
    #[arg(long)]
    pub current_class: Option<String>,

    /// The format for date fields, e.g. "[day]/[month]/[year]".
    #[arg(long)]
    pub date_format: Option<String>,

    /// File path to the header template.
    #[arg(long)]
    pub header_template: Option<PathBuf>,

    /// File path to the row template.
    #[arg(long)]
    pub row_template: Option<PathBuf>,

    /// File path to the footer template.
    #[arg(long)]
    pub footer_template: Option<PathBuf>,

    /// Substitute row template values without HTML escaping.
    #[arg(long)]
    pub raw_values: bool,
}

impl PaginatorArgs {
    /// Build a [Paginator] from the arguments.
    ///
    /// # Errors
    /// Returns an error if the date format is invalid or a template cannot be read.
    pub fn paginator(&self) -> Result<Paginator, Error> {
        let config = PaginationConfig::new(self.per_page, self.range, self.total);
        let style = LinkStyle::default()
            .with_bookend(self.bookend)
            .with_bookend_target(self.bookend_target)
            .with_separator(&self.separator)
            .with_link_class(self.link_class.clone())
            .with_current_class(self.current_class.clone());
        let templates = Templates::from_files(
            self.header_template.as_deref(),
            self.row_template.as_deref(),
            self.footer_template.as_deref(),
        )?;
        let date_format = self
            .date_format
            .as_deref()
            .map(DateFormat::parse)
            .transpose()?;

        Ok(Paginator::new(config)
            .with_style(style)
            .with_templates(templates)
            .with_date_format(date_format)
            .with_raw_values(self.raw_values))
    }

    /// Load the rows from the data file.
    ///
    /// # Errors
    /// Returns an error if the data file cannot be read or parsed.
    pub fn rows(&self) -> Result<Vec<Row>, Error> {
        load_rows(&self.data_path)
    }
}
