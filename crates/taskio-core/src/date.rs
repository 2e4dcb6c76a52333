//! Calendar-date parsing and the `YYYY-MM-DD` wire representation.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
/// Returns an error if the input does not match the format or names an
/// impossible date.
pub fn parse(input: &str) -> Result<Date, time::error::Parse> {
    Date::parse(input.trim(), FORMAT)
}

/// Format a calendar date in `YYYY-MM-DD` form.
#[must_use]
pub fn format(date: Date) -> String {
    date.format(FORMAT).unwrap_or_else(|_| date.to_string())
}

/// serde adapter for `Option<Date>` fields carried as `YYYY-MM-DD` strings.
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use time::Date;

    /// Serialize an optional date as a `YYYY-MM-DD` string.
    ///
    /// # Errors
    /// Propagates serializer failures.
    pub fn serialize<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_some(&super::format(*date)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional date from a `YYYY-MM-DD` string or `null`.
    ///
    /// # Errors
    /// Returns an error when the string is present but not a valid date.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse(&raw).map_err(de::Error::custom))
            .transpose()
    }
}
