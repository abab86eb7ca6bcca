use serde::Serialize;
use serde_json::Value;

use crate::chart::date;

/// Text labels longer than this many characters are truncated.
pub const MAX_LABEL_CHARS: usize = 6;

/// Appended to truncated labels.
pub const ELLIPSIS: char = '…';

const SHORT_DATE_FORMAT: &str = "%d %b";

/// How the category values of a chart are turned into axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelFormat {
    /// Calendar dates, shortened to day and month, e.g. `05 Mar`.
    Date,
    /// Everything else; long strings are truncated.
    Text,
}

impl LabelFormat {
    /// Picks the label format for a category axis.
    pub fn for_category(is_date_category: bool) -> LabelFormat {
        if is_date_category {
            LabelFormat::Date
        } else {
            LabelFormat::Text
        }
    }

    /// Formats a category value.
    pub fn format(self, value: Option<&Value>) -> String {
        format_label(value, self == LabelFormat::Date)
    }
}

/// Formats a category value as an axis label.
///
/// Never fails: a date category value that is not a valid date is returned as
/// is, and absent values become an empty label.
pub fn format_label(value: Option<&Value>, is_date_category: bool) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(value)) if is_date_category => date::parse_date_prefix(value)
            .map_or_else(
                || value.clone(),
                |date| date.format(SHORT_DATE_FORMAT).to_string(),
            ),
        Some(Value::String(value)) => truncate(value),
        Some(value) => display_value(value),
    }
}

/// Returns the natural string form of a value: strings without quotes, `null`
/// as an empty string and everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(value) => value.clone(),
        value => value.to_string(),
    }
}

fn truncate(value: &str) -> String {
    match value.char_indices().nth(MAX_LABEL_CHARS) {
        Some((end, _)) => {
            let mut label = String::with_capacity(end + ELLIPSIS.len_utf8());
            label.push_str(&value[..end]);
            label.push(ELLIPSIS);
            label
        }
        None => value.to_owned(),
    }
}
