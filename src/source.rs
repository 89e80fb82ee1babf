//! Loads a collection of rows from JSON or CSV files.

use std::{fs::File, io::Read, path::Path};

use crate::{
    Error,
    row::{Row, Value},
};

/// Load rows from `path`, choosing the parser from the file extension.
///
/// `.json` files must hold an array of objects whose values are scalars.
/// `.csv` files must start with a header row, which names the fields.
///
/// # Errors
/// Returns:
/// - [Error::UnsupportedSource] if the extension is not `json` or `csv`,
/// - [Error::SourceReadError] if the file cannot be opened,
/// - [Error::InvalidJSON] or [Error::InvalidCSV] if the contents cannot be parsed.
pub fn load_rows(path: &Path) -> Result<Vec<Row>, Error> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_lowercase);

    let open = || {
        File::open(path)
            .inspect_err(|error| tracing::error!("could not open {}: {error}", path.display()))
            .map_err(|error| Error::SourceReadError(path.display().to_string(), error.to_string()))
    };

    let rows = match extension.as_deref() {
        Some("json") => rows_from_json(open()?)?,
        Some("csv") => rows_from_csv(open()?)?,
        _ => return Err(Error::UnsupportedSource(path.display().to_string())),
    };

    tracing::info!("loaded {} rows from {}", rows.len(), path.display());

    Ok(rows)
}

/// Parse a JSON array of objects.
///
/// # Errors
/// Returns [Error::InvalidJSON] if the text is not an array of flat objects.
pub fn rows_from_json(reader: impl Read) -> Result<Vec<Row>, Error> {
    serde_json::from_reader(reader).map_err(|error| Error::InvalidJSON(error.to_string()))
}

/// Parse CSV data with a header row. Every cell is read as text.
///
/// # Errors
/// Returns [Error::InvalidCSV] if the header or a record cannot be read.
pub fn rows_from_csv(reader: impl Read) -> Result<Vec<Row>, Error> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|error| Error::InvalidCSV(error.to_string()))?
        .clone();

    reader
        .records()
        .map(|record| -> Result<Row, Error> {
            let record = record.map_err(|error| Error::InvalidCSV(error.to_string()))?;

            Ok(headers
                .iter()
                .zip(record.iter())
                .map(|(name, cell)| (name, Value::from(cell)))
                .collect())
        })
        .collect()
}
