//! Detects date-like field values and reformats them for display.

use time::{
    Date, OffsetDateTime, PrimitiveDateTime,
    format_description::{BorrowedFormatItem, OwnedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

use crate::Error;

const DATE: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");
const DATE_TIME: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const DATE_T_TIME: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// A user supplied format for displaying dates, e.g. `[day]/[month]/[year]`.
///
/// The syntax is that of [time's format descriptions](https://time-rs.github.io/book/api/format-description.html).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    description: String,
    items: OwnedFormatItem,
}

impl DateFormat {
    /// Parse a format description.
    ///
    /// # Errors
    /// Returns [Error::InvalidDateFormat] if `description` is not a valid
    /// format description.
    pub fn parse(description: &str) -> Result<Self, Error> {
        let items = time::format_description::parse_owned::<2>(description).map_err(|error| {
            Error::InvalidDateFormat(error.to_string(), description.to_owned())
        })?;

        Ok(Self {
            description: description.to_owned(),
            items,
        })
    }

    /// The format description this was parsed from.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Reformat `value` if it holds a date, otherwise return `None`.
    pub fn reformat(&self, value: &str) -> Option<String> {
        parse_date(value).and_then(|date_time| self.format(date_time))
    }

    /// Format a Unix timestamp in seconds, if it is in range.
    pub fn reformat_timestamp(&self, seconds: i64) -> Option<String> {
        OffsetDateTime::from_unix_timestamp(seconds)
            .ok()
            .and_then(|date_time| self.format(date_time))
    }

    fn format(&self, date_time: OffsetDateTime) -> Option<String> {
        date_time
            .format(&self.items)
            .inspect_err(|error| {
                tracing::debug!(
                    "could not format {date_time} as \"{}\": {error}",
                    self.description
                )
            })
            .ok()
    }
}

/// Try to read `value` as a date or date-time.
///
/// Accepts RFC 3339 date-times, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`
/// and `YYYY-MM-DD`. Values without an offset are taken to be UTC.
pub fn parse_date(value: &str) -> Option<OffsetDateTime> {
    if let Ok(date_time) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(date_time);
    }

    for description in [DATE_TIME, DATE_T_TIME] {
        if let Ok(date_time) = PrimitiveDateTime::parse(value, description) {
            return Some(date_time.assume_utc());
        }
    }

    Date::parse(value, DATE)
        .ok()
        .map(|date| date.midnight().assume_utc())
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::Error;

    use super::{DateFormat, parse_date};

    #[test]
    fn parses_plain_date() {
        assert_eq!(parse_date("2024-01-05"), Some(datetime!(2024-01-05 0:00 UTC)));
    }

    #[test]
    fn parses_date_time() {
        assert_eq!(
            parse_date("2024-01-05 13:45:10"),
            Some(datetime!(2024-01-05 13:45:10 UTC))
        );
        assert_eq!(
            parse_date("2024-01-05T13:45:10"),
            Some(datetime!(2024-01-05 13:45:10 UTC))
        );
    }

    #[test]
    fn parses_rfc3339() {
        assert_eq!(
            parse_date("2024-01-05T13:45:10+13:00"),
            Some(datetime!(2024-01-05 13:45:10 +13:00))
        );
    }

    #[test]
    fn rejects_non_dates() {
        for value in ["", "hello", "42", "2024-13-01", "05/01/2024"] {
            assert_eq!(parse_date(value), None, "want no date for {value:?}");
        }
    }

    #[test]
    fn reformats_date() {
        let format = DateFormat::parse("[day]/[month]/[year]").unwrap();

        assert_eq!(format.reformat("2024-01-05"), Some("05/01/2024".to_owned()));
        assert_eq!(format.reformat("Widget"), None);
    }

    #[test]
    fn reformats_timestamp() {
        let format = DateFormat::parse("[year]-[month]-[day]").unwrap();

        assert_eq!(
            format.reformat_timestamp(1_704_412_800),
            Some("2024-01-05".to_owned())
        );
    }

    #[test]
    fn invalid_description_is_an_error() {
        let result = DateFormat::parse("[not_a_component]");

        assert!(
            matches!(result, Err(Error::InvalidDateFormat(_, ref description)) if description == "[not_a_component]"),
            "want InvalidDateFormat error, got {result:?}"
        );
    }
}
