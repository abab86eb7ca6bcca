use std::fmt::Display;

use opsboard_dashboard::ChartDescriptor;
use opsboard_dashboard::Row;
use opsboard_dashboard::chart;
use opsboard_dashboard::chart::ChartDirective;
use opsboard_dashboard::chart::ChartKind;
use opsboard_dashboard::chart::ResolvedChartSpec;
use opsboard_dashboard::chart::display_value;
use serde::Serialize;
use tracing::debug;
use tracing::warn;

use crate::id::Id;
use crate::layout::Element;

const BAR_COLOR: &str = "#22d3ee";
const LINE_COLOR: &str = "#60a5fa";
const LINE_WIDTH: u32 = 3;
const PIE_COLORS: [&str; 7] = [
    "#22d3ee", "#60a5fa", "#34d399", "#fbbf24", "#f472b6", "#a78bfa", "#fb7185",
];
const CHART_HEIGHT: u32 = 288;
const CARTESIAN_HOVER_INFO: &str = "text+y";
const HOVER_MODE: &str = "closest";

/// A dashboard card holding one chart, or the reason it is not drawn.
#[derive(Debug)]
pub struct ChartPanel {
    id: Id,
    /// The chart title.
    pub title: String,
    /// The backend's identifier of the charted metric.
    pub metric: String,
    /// The chart itself, or a notice.
    pub content: ChartContent,
}

impl ChartPanel {
    /// Resolves a chart descriptor into a panel.
    pub fn from_descriptor(id: Id, descriptor: &ChartDescriptor) -> ChartPanel {
        let content = match chart::resolve(descriptor) {
            ChartDirective::NoData { .. } => ChartContent::Notice(Notice::NoChartData),
            ChartDirective::InvalidData { .. } => ChartContent::Notice(Notice::InvalidChartData),
            ChartDirective::Resolved(spec) if spec.kind == ChartKind::Unsupported => {
                let declared_type = descriptor.declared_type.clone().unwrap_or_default();
                ChartContent::Notice(Notice::UnsupportedChart(declared_type))
            }
            ChartDirective::Resolved(spec) => {
                ChartContent::Plot(PlotChart::new(id, spec, &descriptor.rows))
            }
        };

        match content {
            ChartContent::Plot(ref plot) => debug!(
                metric = %descriptor.metric,
                kind = ?plot.spec.kind,
                category = %plot.spec.category_field,
                value = %plot.spec.value_field,
                tick_stride = plot.spec.tick_stride,
                "resolved chart"
            ),
            ChartContent::Notice(ref notice) => warn!(
                metric = %descriptor.metric,
                declared_type = ?descriptor.declared_type,
                %notice,
                "chart is not drawn"
            ),
        }

        Self {
            id,
            title: descriptor.title.clone(),
            metric: descriptor.metric.clone(),
            content,
        }
    }

    /// Returns the drawn chart, if there is one.
    pub fn plot(&self) -> Option<&PlotChart> {
        match self.content {
            ChartContent::Plot(ref plot) => Some(plot),
            ChartContent::Notice(_) => None,
        }
    }
}

impl Element for ChartPanel {
    fn id(&self) -> Id {
        self.id
    }
}

/// The body of a [ChartPanel].
#[derive(Debug)]
pub enum ChartContent {
    /// A chart drawn with Plotly.
    Plot(PlotChart),
    /// A chart that cannot be drawn.
    Notice(Notice),
}

/// A placeholder message shown instead of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The chart has no rows.
    NoChartData,
    /// The chart rows have no two distinct fields to plot.
    InvalidChartData,
    /// The declared chart type is not supported.
    UnsupportedChart(String),
    /// The dashboard has no sections at all.
    EmptyDashboard,
}

impl Notice {
    /// A short name used for styling.
    pub fn class(&self) -> &'static str {
        match self {
            Notice::NoChartData | Notice::EmptyDashboard => "empty",
            Notice::InvalidChartData => "invalid",
            Notice::UnsupportedChart(_) => "unsupported",
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::NoChartData => write!(f, "No chart data"),
            Notice::InvalidChartData => write!(f, "Invalid chart data format"),
            Notice::UnsupportedChart(declared_type) => {
                write!(f, "Unsupported chart type: {declared_type}")
            }
            Notice::EmptyDashboard => write!(f, "Nothing to show for this session yet."),
        }
    }
}

/// A resolved chart with the points to draw.
#[derive(Debug)]
pub struct PlotChart {
    id: Id,
    /// The resolved chart.
    pub spec: ResolvedChartSpec,
    /// One point per row, in row order.
    pub points: Vec<Point>,
    /// The Plotly trace and layout.
    pub plot: PlotSpec,
}

impl PlotChart {
    /// Creates a chart from a resolved spec and the rows it was resolved from.
    pub fn new(id: Id, spec: ResolvedChartSpec, rows: &[Row]) -> PlotChart {
        let points: Vec<Point> = rows
            .iter()
            .map(|row| Point {
                x: spec.category(row).map(display_value).unwrap_or_default(),
                y: spec.value(row),
            })
            .collect();

        let plot = PlotSpec::new(&spec, rows);

        Self {
            id,
            spec,
            points,
            plot,
        }
    }

    /// Returns the id of the chart.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the names of the script variables that hold the chart's
    /// points.
    pub fn series(&self) -> Series {
        Series::from(self.id)
    }
}

/// A single point of a chart.
///
/// Cartesian charts place the point at its row index and show the category
/// value as hover text, so rows sharing a category keep their own slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// The category value.
    pub x: String,
    /// The numeric value; `None` leaves a gap.
    pub y: Option<f64>,
}

/// The names of the two script arrays holding a chart's points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub(crate) xs: String,
    pub(crate) ys: String,
}

impl Series {
    /// Creates a series from the two array names.
    pub fn new(xs: String, ys: String) -> Series {
        Self { xs, ys }
    }

    /// The name of the category array; also the hover text and pie labels.
    pub fn xs(&self) -> &str {
        &self.xs
    }

    /// The name of the value array.
    pub fn ys(&self) -> &str {
        &self.ys
    }
}

impl From<Id> for Series {
    fn from(id: Id) -> Self {
        Self::new(format!("xs{id}"), format!("ys{id}"))
    }
}

/// The Plotly description of a chart, minus the data arrays.
#[derive(Serialize, Debug)]
pub struct PlotSpec {
    /// The single trace of the chart.
    pub trace: Trace,
    /// The chart layout.
    pub layout: Layout,
}

impl PlotSpec {
    fn new(spec: &ResolvedChartSpec, rows: &[Row]) -> PlotSpec {
        let trace = Trace::new(spec);

        let layout = if spec.kind.is_cartesian() {
            Layout::cartesian(
                Axis::category(spec, rows),
                Axis::value(&spec.value_field),
            )
        } else {
            Layout::radial()
        };

        Self { trace, layout }
    }
}

/// A Plotly trace.
#[derive(Serialize, Debug)]
pub struct Trace {
    #[serde(rename = "type")]
    kind: TraceKind,
    name: String,
    #[serde(rename = "hoverinfo", skip_serializing_if = "Option::is_none")]
    hover_info: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<LineStyle>,
}

impl Trace {
    fn new(spec: &ResolvedChartSpec) -> Trace {
        let name = spec.value_field.clone();

        match spec.kind {
            ChartKind::Line => Self {
                kind: TraceKind::Scatter,
                name,
                hover_info: Some(CARTESIAN_HOVER_INFO),
                mode: Some(Mode::Lines),
                marker: None,
                line: Some(LineStyle {
                    color: LINE_COLOR,
                    width: LINE_WIDTH,
                }),
            },
            ChartKind::Pie => Self {
                kind: TraceKind::Pie,
                name,
                hover_info: None,
                mode: None,
                marker: Some(Marker {
                    color: None,
                    colors: Some(PIE_COLORS.to_vec()),
                }),
                line: None,
            },
            ChartKind::Bar | ChartKind::Unsupported => Self {
                kind: TraceKind::Bar,
                name,
                hover_info: Some(CARTESIAN_HOVER_INFO),
                mode: None,
                marker: Some(Marker {
                    color: Some(BAR_COLOR),
                    colors: None,
                }),
                line: None,
            },
        }
    }

    /// Returns `true` if the trace takes `labels`/`values` instead of `x`/`y`.
    pub fn is_radial(&self) -> bool {
        self.kind == TraceKind::Pie
    }
}

/// The Plotly trace types used by the dashboard.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum TraceKind {
    Bar,
    Scatter,
    Pie,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Mode {
    Lines,
}

#[derive(Serialize, Debug)]
struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    colors: Option<Vec<&'static str>>,
}

#[derive(Serialize, Debug)]
struct LineStyle {
    color: &'static str,
    width: u32,
}

/// A Plotly layout.
#[derive(Serialize, Debug)]
pub struct Layout {
    #[serde(rename = "xaxis", skip_serializing_if = "Option::is_none")]
    x_axis: Option<Axis>,
    #[serde(rename = "yaxis", skip_serializing_if = "Option::is_none")]
    y_axis: Option<Axis>,
    height: u32,
    #[serde(rename = "showlegend")]
    show_legend: bool,
    #[serde(rename = "autosize")]
    auto_size: bool,
    #[serde(rename = "hovermode")]
    hover_mode: &'static str,
    margin: Margin,
}

impl Layout {
    fn cartesian(x_axis: Axis, y_axis: Axis) -> Layout {
        Self {
            x_axis: Some(x_axis),
            y_axis: Some(y_axis),
            height: CHART_HEIGHT,
            show_legend: true,
            auto_size: true,
            hover_mode: HOVER_MODE,
            margin: Margin::default(),
        }
    }

    fn radial() -> Layout {
        Self {
            x_axis: None,
            y_axis: None,
            height: CHART_HEIGHT,
            show_legend: true,
            auto_size: true,
            hover_mode: HOVER_MODE,
            margin: Margin::default(),
        }
    }

    /// Returns the category axis of a cartesian chart.
    pub fn x_axis(&self) -> Option<&Axis> {
        self.x_axis.as_ref()
    }
}

/// A Plotly axis.
#[derive(Serialize, Debug)]
pub struct Axis {
    #[serde(rename = "type")]
    kind: AxisKind,
    title: AxisTitle,
    #[serde(rename = "tickmode", skip_serializing_if = "Option::is_none")]
    tick_mode: Option<TickMode>,
    #[serde(rename = "tickvals", skip_serializing_if = "Option::is_none")]
    tick_values: Option<Vec<usize>>,
    #[serde(rename = "ticktext", skip_serializing_if = "Option::is_none")]
    tick_text: Option<Vec<String>>,
    #[serde(rename = "showgrid")]
    show_grid: bool,
    #[serde(rename = "zeroline")]
    zero_line: bool,
    #[serde(rename = "automargin")]
    auto_margin: bool,
}

impl Axis {
    /// The category axis: one slot per row at the row's index, labelled at
    /// every index the stride keeps.
    fn category(spec: &ResolvedChartSpec, rows: &[Row]) -> Axis {
        let (tick_values, tick_text) = rows
            .iter()
            .enumerate()
            .filter(|(idx, _)| spec.shows_tick(*idx))
            .map(|(idx, row)| (idx, spec.format_label(spec.category(row))))
            .unzip();

        Self {
            kind: AxisKind::Linear,
            title: AxisTitle::new(&spec.category_field),
            tick_mode: Some(TickMode::Array),
            tick_values: Some(tick_values),
            tick_text: Some(tick_text),
            show_grid: false,
            zero_line: false,
            auto_margin: true,
        }
    }

    fn value(field: &str) -> Axis {
        Self {
            kind: AxisKind::Linear,
            title: AxisTitle::new(field),
            tick_mode: None,
            tick_values: None,
            tick_text: None,
            show_grid: true,
            zero_line: true,
            auto_margin: true,
        }
    }

    /// Returns the row indices that carry a tick label.
    pub fn tick_values(&self) -> &[usize] {
        self.tick_values.as_deref().unwrap_or_default()
    }

    /// Returns the tick labels of the axis.
    pub fn tick_text(&self) -> &[String] {
        self.tick_text.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize, Debug)]
struct AxisTitle {
    text: String,
}

impl AxisTitle {
    fn new(text: &str) -> AxisTitle {
        Self {
            text: text.to_owned(),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum AxisKind {
    Linear,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum TickMode {
    Array,
}

#[derive(Serialize, Debug)]
struct Margin {
    l: u32,
    r: u32,
    t: u32,
    b: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            l: 48,
            r: 16,
            t: 16,
            b: 48,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::Value;
    use serde_json::json;

    use crate::id::IdSeq;

    fn descriptor(declared_type: Option<&str>, rows: Value) -> ChartDescriptor {
        let rows = serde_json::from_value(rows).expect("rows to be an array of objects");
        ChartDescriptor::new(declared_type, rows)
    }

    #[test]
    fn bar_chart_is_drawn() -> Result<(), serde_json::Error> {
        let descriptor = descriptor(
            Some("bar_chart"),
            json!([{ "line": "Assembly-Line-1", "units": 420 }, { "line": "L2", "units": null }]),
        );

        let panel = ChartPanel::from_descriptor(IdSeq::new().next(), &descriptor);
        let plot = panel.plot().expect("a drawn chart");

        assert_eq!(
            plot.points,
            vec![
                Point {
                    x: String::from("Assembly-Line-1"),
                    y: Some(420.0)
                },
                Point {
                    x: String::from("L2"),
                    y: None
                },
            ]
        );

        let trace = serde_json::to_value(&plot.plot.trace)?;
        assert_eq!(
            trace,
            json!({
                "type": "bar",
                "name": "units",
                "hoverinfo": "text+y",
                "marker": { "color": BAR_COLOR }
            })
        );

        let layout = serde_json::to_value(&plot.plot.layout)?;
        assert_eq!(layout["xaxis"]["type"], "linear");
        assert_eq!(layout["xaxis"]["tickvals"], json!([0, 1]));
        assert_eq!(layout["xaxis"]["ticktext"], json!(["Assemb…", "L2"]));
        assert_eq!(layout["xaxis"]["zeroline"], false);
        assert_eq!(layout["yaxis"]["title"]["text"], "units");
        assert_eq!(layout["hovermode"], "closest");

        Ok(())
    }

    #[test]
    fn dense_date_series_are_thinned() {
        let rows: Vec<Value> = (0..50)
            .map(|idx| json!({ "day": format!("2024-03-{:02}", idx % 28 + 1), "scrap": idx }))
            .collect();
        let descriptor = descriptor(Some("line_chart"), Value::Array(rows));

        let panel = ChartPanel::from_descriptor(IdSeq::new().next(), &descriptor);
        let plot = panel.plot().expect("a drawn chart");
        let x_axis = plot.plot.layout.x_axis().expect("a category axis");

        assert_eq!(plot.spec.tick_stride, 7);
        assert_eq!(plot.points.len(), 50);
        assert_eq!(x_axis.tick_values(), [0, 7, 14, 21, 28, 35, 42, 49]);
        assert_eq!(
            x_axis.tick_text(),
            ["01 Mar", "08 Mar", "15 Mar", "22 Mar", "01 Mar", "08 Mar", "15 Mar", "22 Mar"]
        );
    }

    #[test]
    fn repeated_categories_keep_their_own_slot() {
        let descriptor = descriptor(
            Some("bar"),
            json!([
                { "name": "Widget", "qty": 3 },
                { "name": "Widget", "qty": 5 },
                { "name": "Gadget", "qty": 1 }
            ]),
        );

        let panel = ChartPanel::from_descriptor(IdSeq::new().next(), &descriptor);
        let plot = panel.plot().expect("a drawn chart");
        let x_axis = plot.plot.layout.x_axis().expect("a category axis");

        let ys: Vec<Option<f64>> = plot.points.iter().map(|point| point.y).collect();
        assert_eq!(ys, vec![Some(3.0), Some(5.0), Some(1.0)]);
        assert_eq!(x_axis.tick_values(), [0, 1, 2]);
        assert_eq!(x_axis.tick_text(), ["Widget", "Widget", "Gadget"]);
    }

    #[test]
    fn pie_chart_has_no_axes() -> Result<(), serde_json::Error> {
        let descriptor = descriptor(
            Some("donut"),
            json!([{ "defect": "Scratch", "count": 12 }, { "defect": "Dent", "count": 4 }]),
        );

        let panel = ChartPanel::from_descriptor(IdSeq::new().next(), &descriptor);
        let plot = panel.plot().expect("a drawn chart");
        let layout = serde_json::to_value(&plot.plot.layout)?;

        assert!(plot.plot.trace.is_radial());
        assert!(layout.get("xaxis").is_none());
        assert!(layout.get("yaxis").is_none());
        assert_eq!(layout["hovermode"], "closest");

        Ok(())
    }

    #[test]
    fn undrawable_charts_get_notices() {
        let mut ids = IdSeq::new();

        let empty = descriptor(Some("bar"), json!([]));
        let invalid = descriptor(Some("bar"), json!([{ "id": 7 }]));
        let unsupported = descriptor(Some("scatter"), json!([{ "x": "a", "y": 1 }]));
        let untyped = descriptor(None, json!([]));

        let notice = |descriptor: &ChartDescriptor, ids: &mut IdSeq| {
            match ChartPanel::from_descriptor(ids.next(), descriptor).content {
                ChartContent::Notice(notice) => notice,
                ChartContent::Plot(_) => panic!("expected a notice"),
            }
        };

        assert_eq!(notice(&empty, &mut ids), Notice::NoChartData);
        assert_eq!(notice(&invalid, &mut ids), Notice::InvalidChartData);
        assert_eq!(
            notice(&unsupported, &mut ids),
            Notice::UnsupportedChart(String::from("scatter"))
        );
        assert_eq!(notice(&untyped, &mut ids), Notice::NoChartData);
    }

    #[test]
    fn notice_messages() {
        assert_eq!(Notice::NoChartData.to_string(), "No chart data");
        assert_eq!(
            Notice::InvalidChartData.to_string(),
            "Invalid chart data format"
        );
        assert_eq!(
            Notice::UnsupportedChart(String::from("heatmap")).to_string(),
            "Unsupported chart type: heatmap"
        );
    }

    #[test]
    fn series_names_follow_the_id() {
        let id = IdSeq::new().next();

        assert_eq!(
            Series::from(id),
            Series::new(String::from("xs1"), String::from("ys1"))
        );
    }
}
