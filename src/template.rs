//! User supplied templates for the header, rows and footer of a page.
//!
//! Templates are plain text with placeholders. `[{page_links}]` is replaced by
//! the joined page links and `[{field_name}]` by the value of that field in a
//! row. Substitution is literal, placeholders that match nothing are left as is.

use std::{fs, path::Path};

use crate::Error;

/// The placeholder for the joined page links in header and footer templates.
pub const PAGE_LINKS_PLACEHOLDER: &str = "[{page_links}]";

/// Returns the placeholder for the field `name` in a row template.
pub fn field_placeholder(name: &str) -> String {
    format!("[{{{name}}}]")
}

/// The optional templates for a page, any missing template uses the default table markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Templates {
    /// Rendered before the rows.
    pub header: Option<String>,
    /// Rendered once per row.
    pub row: Option<String>,
    /// Rendered after the rows.
    pub footer: Option<String>,
}

impl Templates {
    /// Read each template that has a path.
    ///
    /// # Errors
    /// Returns [Error::TemplateReadError] if a template file cannot be read.
    pub fn from_files(
        header: Option<&Path>,
        row: Option<&Path>,
        footer: Option<&Path>,
    ) -> Result<Self, Error> {
        Ok(Self {
            header: header.map(read_template).transpose()?,
            row: row.map(read_template).transpose()?,
            footer: footer.map(read_template).transpose()?,
        })
    }
}

fn read_template(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path)
        .inspect_err(|error| tracing::error!("could not read template {}: {error}", path.display()))
        .map_err(|error| Error::TemplateReadError(path.display().to_string(), error.to_string()))
}

/// Replace the page links placeholder in a header or footer template.
pub fn fill_page_links(template: &str, page_links: &str) -> String {
    template.replace(PAGE_LINKS_PLACEHOLDER, page_links)
}

/// Replace each field placeholder in a row template.
pub fn fill_row<'a>(template: &str, fields: impl IntoIterator<Item = (&'a str, String)>) -> String {
    fields
        .into_iter()
        .fold(template.to_owned(), |filled, (name, value)| {
            filled.replace(&field_placeholder(name), &value)
        })
}
