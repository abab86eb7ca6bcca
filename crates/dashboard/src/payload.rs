//! The dashboard payload returned by the analytics backend.
//!
//! Every section is optional. The backend is not trusted to send well-formed
//! sections, so missing or `null` lists deserialize as empty ones and chart or
//! table rows that are not JSON objects become empty records. Text fields
//! accept numbers and booleans, and a field of the wrong shape falls back to
//! its default instead of failing the payload.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;

use crate::error::Result;

/// A single record of a chart or a table.
///
/// Field order is the order in which the fields appear in the payload.
pub type Row = Map<String, Value>;

/// The dashboard of one workspace session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardPayload {
    /// The headline metrics.
    #[serde(deserialize_with = "lenient_list")]
    pub kpis: Vec<Kpi>,

    /// The chart descriptors, in display order.
    #[serde(deserialize_with = "lenient_list")]
    pub charts: Vec<ChartDescriptor>,

    /// The tabular sections, in display order.
    #[serde(deserialize_with = "lenient_list")]
    pub tables: Vec<TableSection>,

    /// The generated commentary on the dashboard.
    #[serde(
        deserialize_with = "lenient_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub ai_insights: Option<AiInsights>,
}

impl DashboardPayload {
    /// Parses a payload from a JSON string.
    pub fn from_json(json: &str) -> Result<DashboardPayload> {
        let payload = serde_json::from_str(json)?;
        Ok(payload)
    }

    /// Parses a payload from a reader that yields JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<DashboardPayload> {
        let payload = serde_json::from_reader(reader)?;
        Ok(payload)
    }

    /// Parses a payload stored as a JSON file.
    pub fn from_path(path: &Path) -> Result<DashboardPayload> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns `true` if the payload has nothing to display.
    pub fn is_empty(&self) -> bool {
        self.kpis.is_empty()
            && self.charts.is_empty()
            && self.tables.is_empty()
            && self.ai_insights.as_ref().is_none_or(AiInsights::is_empty)
    }
}

/// A headline metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kpi {
    /// The backend's identifier of the metric.
    #[serde(deserialize_with = "lenient_text")]
    pub metric: String,

    /// The display title.
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,

    /// The current value; usually a number, but any JSON value is accepted.
    pub value: Value,

    /// The unit of the value, e.g. `units/h`.
    #[serde(deserialize_with = "lenient_tag")]
    pub unit: Option<String>,

    /// The change since the previous period; numeric strings such as `"+1.2"`
    /// are read as numbers.
    #[serde(deserialize_with = "lenient_number")]
    pub delta: Option<f64>,
}

impl Kpi {
    /// Returns the direction of the metric's change.
    pub fn trend(&self) -> Trend {
        match self.delta {
            Some(delta) if delta > 0.0 => Trend::Up,
            Some(delta) if delta < 0.0 => Trend::Down,
            Some(_) => Trend::Flat,
            None => Trend::Unknown,
        }
    }
}

/// The direction of a [Kpi]'s change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    /// The metric increased.
    Up,
    /// The metric decreased.
    Down,
    /// The metric did not change.
    Flat,
    /// The backend did not report a change.
    Unknown,
}

/// A chart as described by the backend: a free-form type tag and the rows to
/// plot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDescriptor {
    /// The backend's identifier of the charted metric.
    #[serde(deserialize_with = "lenient_text")]
    pub metric: String,

    /// The display title.
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,

    /// The declared chart type, e.g. `bar_chart` or `donut`.
    #[serde(rename = "chart_type", deserialize_with = "lenient_tag")]
    pub declared_type: Option<String>,

    /// The records to plot.
    #[serde(rename = "data", deserialize_with = "lenient_rows")]
    pub rows: Vec<Row>,
}

impl ChartDescriptor {
    /// Creates an untitled descriptor.
    pub fn new(declared_type: Option<&str>, rows: Vec<Row>) -> ChartDescriptor {
        Self {
            metric: String::new(),
            title: String::new(),
            declared_type: declared_type.map(str::to_owned),
            rows,
        }
    }
}

/// A tabular section of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSection {
    /// The display title.
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,

    /// The table rows.
    #[serde(deserialize_with = "lenient_rows")]
    pub data: Vec<Row>,
}

impl TableSection {
    /// Returns the column names, taken from the first row.
    pub fn columns(&self) -> Vec<&str> {
        self.data
            .first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// The generated commentary on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiInsights {
    /// A short summary of the dashboard.
    #[serde(deserialize_with = "lenient_tag")]
    pub summary: Option<String>,

    /// Notable observations.
    #[serde(deserialize_with = "lenient_strings")]
    pub insights: Vec<String>,

    /// Identified risks.
    #[serde(deserialize_with = "lenient_strings")]
    pub risks: Vec<String>,

    /// Suggested actions.
    #[serde(deserialize_with = "lenient_strings")]
    pub recommendations: Vec<String>,
}

impl AiInsights {
    /// Returns `true` if there is no commentary at all.
    pub fn is_empty(&self) -> bool {
        self.summary.as_deref().is_none_or(str::is_empty)
            && self.insights.is_empty()
            && self.risks.is_empty()
            && self.recommendations.is_empty()
    }
}

fn lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    };

    Ok(items)
}

fn lenient_object<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let object = match Value::deserialize(deserializer)? {
        object @ Value::Object(_) => serde_json::from_value(object).ok(),
        _ => None,
    };

    Ok(object)
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        scalar @ (Value::Number(_) | Value::Bool(_)) => scalar.to_string(),
        _ => String::new(),
    };

    Ok(text)
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    };

    Ok(number)
}

fn lenient_rows<'de, D>(deserializer: D) -> std::result::Result<Vec<Row>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(row) => row,
                _ => Row::new(),
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(rows)
}

fn lenient_tag<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = match Value::deserialize(deserializer)? {
        Value::String(tag) => Some(tag),
        scalar @ (Value::Number(_) | Value::Bool(_)) => Some(scalar.to_string()),
        _ => None,
    };

    Ok(tag)
}

fn lenient_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let strings = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(strings)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::PayloadError;

    const PAYLOAD: &str = r#"{
        "kpis": [
            { "metric": "oee", "title": "OEE", "value": 87.5, "unit": "%", "delta": 1.2 },
            { "metric": "scrap", "title": "Scrap rate", "value": 2.1, "delta": -0.4 },
            { "metric": "orders", "title": "Open orders", "value": 42 }
        ],
        "charts": [
            {
                "metric": "output_by_line",
                "title": "Output by line",
                "chart_type": "bar",
                "data": [{ "line": "L1", "units": 420 }, { "line": "L2", "units": 380 }]
            },
            { "metric": "defects", "title": "Defects", "chart_type": "pie", "data": null },
            { "metric": "broken", "title": "Broken", "chart_type": 7, "data": [1, "x", { "a": 1 }] }
        ],
        "tables": [
            { "title": "Below reorder level", "data": [{ "sku": "A-1", "on_hand": 3, "reorder_at": 10 }] }
        ],
        "ai_insights": {
            "summary": "Line 2 is trailing.",
            "insights": ["L2 output dropped", null, 3],
            "risks": "not a list"
        }
    }"#;

    #[test]
    fn parse_full_payload() -> Result<()> {
        let payload = DashboardPayload::from_json(PAYLOAD)?;

        assert_eq!(payload.kpis.len(), 3);
        assert_eq!(payload.charts.len(), 3);
        assert_eq!(payload.tables.len(), 1);
        assert!(!payload.is_empty());

        let chart = &payload.charts[0];
        assert_eq!(chart.declared_type.as_deref(), Some("bar"));
        assert_eq!(chart.rows.len(), 2);

        let insights = payload.ai_insights.expect("insights to be present");
        assert_eq!(insights.summary.as_deref(), Some("Line 2 is trailing."));
        assert_eq!(insights.insights, vec!["L2 output dropped", "3"]);
        assert!(insights.risks.is_empty());
        assert!(insights.recommendations.is_empty());

        Ok(())
    }

    #[test]
    fn malformed_chart_data_is_tolerated() -> Result<()> {
        let payload = DashboardPayload::from_json(PAYLOAD)?;

        assert!(payload.charts[1].rows.is_empty());

        let broken = &payload.charts[2];
        assert_eq!(broken.declared_type.as_deref(), Some("7"));
        assert_eq!(broken.rows.len(), 3);
        assert!(broken.rows[0].is_empty());
        assert!(broken.rows[1].is_empty());
        assert_eq!(broken.rows[2].len(), 1);

        Ok(())
    }

    #[test]
    fn mistyped_fields_are_tolerated() -> Result<()> {
        let payload = DashboardPayload::from_json(
            r#"{
                "kpis": [
                    { "title": 12, "value": 3, "unit": 5, "delta": "+1.2" },
                    { "title": ["x"], "unit": {}, "delta": "n/a" },
                    "not a kpi"
                ],
                "charts": [
                    { "metric": 9, "title": 5, "chart_type": "bar", "data": [{ "line": "L1", "units": 4 }] },
                    { "title": { "text": "Nested" }, "chart_type": ["pie"], "data": [] },
                    null
                ],
                "tables": [{ "title": true, "data": [] }],
                "ai_insights": { "summary": 7, "insights": ["ok"] }
            }"#,
        )?;

        let kpi = &payload.kpis[0];
        assert_eq!(payload.kpis.len(), 2);
        assert_eq!(kpi.title, "12");
        assert_eq!(kpi.unit.as_deref(), Some("5"));
        assert_eq!(kpi.delta, Some(1.2));
        assert_eq!(kpi.trend(), Trend::Up);

        let kpi = &payload.kpis[1];
        assert!(kpi.title.is_empty());
        assert_eq!(kpi.unit, None);
        assert_eq!(kpi.delta, None);

        assert_eq!(payload.charts.len(), 2);
        assert_eq!(payload.charts[0].metric, "9");
        assert_eq!(payload.charts[0].title, "5");
        assert_eq!(payload.charts[0].rows.len(), 1);
        assert!(payload.charts[1].title.is_empty());
        assert_eq!(payload.charts[1].declared_type, None);

        assert_eq!(payload.tables[0].title, "true");

        let insights = payload.ai_insights.expect("insights to be present");
        assert_eq!(insights.summary.as_deref(), Some("7"));
        assert_eq!(insights.insights, vec!["ok"]);

        Ok(())
    }

    #[test]
    fn mistyped_sections_are_empty() -> Result<()> {
        let payload = DashboardPayload::from_json(
            r#"{ "kpis": {}, "charts": "none", "tables": 3, "ai_insights": ["x"] }"#,
        )?;

        assert!(payload.is_empty());
        assert_eq!(payload.ai_insights, None);

        Ok(())
    }

    #[test]
    fn row_fields_keep_payload_order() -> Result<()> {
        let payload = DashboardPayload::from_json(
            r#"{ "tables": [{ "title": "t", "data": [{ "zeta": 1, "alpha": 2, "mid": 3 }] }] }"#,
        )?;

        assert_eq!(payload.tables[0].columns(), vec!["zeta", "alpha", "mid"]);

        Ok(())
    }

    #[test]
    fn null_sections_are_empty() -> Result<()> {
        let payload =
            DashboardPayload::from_json(r#"{ "kpis": null, "charts": null, "tables": null }"#)?;

        assert!(payload.is_empty());

        let payload = DashboardPayload::from_json("{}")?;
        assert_eq!(payload, DashboardPayload::default());

        Ok(())
    }

    #[test]
    fn kpi_trend() -> Result<()> {
        let payload = DashboardPayload::from_json(PAYLOAD)?;
        let trends: Vec<Trend> = payload.kpis.iter().map(Kpi::trend).collect();

        assert_eq!(trends, vec![Trend::Up, Trend::Down, Trend::Unknown]);

        let flat = Kpi {
            delta: Some(0.0),
            ..Kpi::default()
        };
        assert_eq!(flat.trend(), Trend::Flat);

        Ok(())
    }

    #[test]
    fn invalid_json_is_an_error() {
        let result = DashboardPayload::from_json("{ not json");

        assert!(matches!(result, Err(PayloadError::Json(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = DashboardPayload::from_path(Path::new("/nonexistent/opsboard/payload.json"));

        assert!(matches!(result, Err(PayloadError::Io(_))));
    }

    #[test]
    fn table_without_rows_has_no_columns() {
        let table = TableSection::default();

        assert!(table.columns().is_empty());
    }
}
