//! Display formatting of dashboard values.

use serde_json::Number;
use serde_json::Value;

/// Shown in place of a missing value.
pub(crate) const PLACEHOLDER: &str = "—";

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a KPI or table cell value.
pub(crate) fn format_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::from(PLACEHOLDER),
        Some(Value::Number(number)) => format_number(number),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Formats a number with thousands separators and at most three fraction
/// digits, e.g. `1234567.8915` as `1,234,567.892`.
pub(crate) fn format_number(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return group_digits(&int.unsigned_abs().to_string(), int < 0);
    }

    if let Some(uint) = number.as_u64() {
        return group_digits(&uint.to_string(), false);
    }

    number.as_f64().map_or_else(|| number.to_string(), format_float)
}

pub(crate) fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let is_zero = int_part.bytes().all(|b| b == b'0') && fraction.is_empty();

    let mut formatted = group_digits(int_part, value < 0.0 && !is_zero);

    if !fraction.is_empty() {
        formatted.push('.');
        formatted.push_str(fraction);
    }

    formatted
}

fn group_digits(digits: &str, negative: bool) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if negative {
        grouped.push('-');
    }

    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Escapes text for use in HTML content and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    tinytemplate::escape(text, &mut escaped);
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn format_integers() {
        assert_eq!(format_value(Some(&json!(0))), "0");
        assert_eq!(format_value(Some(&json!(42))), "42");
        assert_eq!(format_value(Some(&json!(1234))), "1,234");
        assert_eq!(format_value(Some(&json!(-1234567))), "-1,234,567");
        assert_eq!(format_value(Some(&json!(u64::MAX))), "18,446,744,073,709,551,615");
    }

    #[test]
    fn format_floats() {
        assert_eq!(format_value(Some(&json!(1234567.891))), "1,234,567.891");
        assert_eq!(format_value(Some(&json!(87.5))), "87.5");
        assert_eq!(format_value(Some(&json!(2.0))), "2");
        assert_eq!(format_value(Some(&json!(0.12345))), "0.123");
        assert_eq!(format_value(Some(&json!(-0.0001))), "0");
        assert_eq!(format_value(Some(&json!(-12.25))), "-12.25");
    }

    #[test]
    fn format_other_values() {
        assert_eq!(format_value(None), PLACEHOLDER);
        assert_eq!(format_value(Some(&Value::Null)), PLACEHOLDER);
        assert_eq!(format_value(Some(&json!("Line 2"))), "Line 2");
        assert_eq!(format_value(Some(&json!(true))), "true");
    }

    #[test]
    fn escape_markup() {
        assert_eq!(
            escape_html(r#"<b class="x">Tom & Jerry"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; Jerry"
        );
    }
}
