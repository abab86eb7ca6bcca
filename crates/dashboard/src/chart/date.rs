use chrono::NaiveDate;
use serde_json::Value;

use crate::payload::Row;

// `YYYY-MM-DD`
const DATE_PREFIX_LEN: usize = 10;
const DATE_PREFIX_FORMAT: &str = "%Y-%m-%d";

/// Returns `true` if the category values look like calendar dates.
///
/// Only the first row is inspected: its category value must be a string that
/// starts with four digits, a hyphen, two digits, a hyphen and two digits.
/// Anything after that prefix, such as the time of a full timestamp, is
/// ignored.
pub fn detect_date_category(rows: &[Row], category_field: Option<&str>) -> bool {
    let (Some(first_row), Some(category_field)) = (rows.first(), category_field) else {
        return false;
    };

    match first_row.get(category_field) {
        Some(Value::String(value)) => has_date_prefix(value),
        _ => false,
    }
}

pub(crate) fn has_date_prefix(value: &str) -> bool {
    let bytes = value.as_bytes();

    bytes.len() >= DATE_PREFIX_LEN
        && bytes[..DATE_PREFIX_LEN]
            .iter()
            .enumerate()
            .all(|(idx, byte)| match idx {
                4 | 7 => *byte == b'-',
                _ => byte.is_ascii_digit(),
            })
}

/// Parses the `YYYY-MM-DD` prefix of a value as a calendar date.
pub(crate) fn parse_date_prefix(value: &str) -> Option<NaiveDate> {
    if !has_date_prefix(value) {
        return None;
    }

    NaiveDate::parse_from_str(&value[..DATE_PREFIX_LEN], DATE_PREFIX_FORMAT).ok()
}
