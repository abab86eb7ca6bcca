use serde_json::Value;

use crate::payload::Row;

/// The runtime type of a field value, as far as key inference cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A JSON string.
    String,
    /// A JSON number.
    Number,
    /// Anything else: `null`, booleans, arrays and objects.
    Other,
}

impl ValueKind {
    /// Classifies a field value.
    pub fn of(value: &Value) -> ValueKind {
        match value {
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => ValueKind::Other,
        }
    }
}

/// The fields picked for the category (x) axis and the value (y) axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferredKeys {
    /// The category field, absent only when there is nothing to pick from.
    pub category: Option<String>,
    /// The value field.
    pub value: Option<String>,
}

/// Infers the category and value fields from the first row.
///
/// The category field is the first field holding a string, falling back to
/// the first field. The value field is the first field holding a number,
/// falling back to the second field. Both scans start from the first field
/// independently of each other, so they can land on the same field, e.g. when
/// the row has a single numeric field.
pub fn infer_keys(rows: &[Row]) -> InferredKeys {
    let Some(first_row) = rows.first() else {
        return InferredKeys::default();
    };

    let first_of_kind = |kind: ValueKind| {
        first_row
            .iter()
            .find(|(_, value)| ValueKind::of(value) == kind)
            .map(|(key, _)| key.clone())
    };

    let category = first_of_kind(ValueKind::String).or_else(|| first_row.keys().next().cloned());
    let value = first_of_kind(ValueKind::Number).or_else(|| first_row.keys().nth(1).cloned());

    InferredKeys { category, value }
}
