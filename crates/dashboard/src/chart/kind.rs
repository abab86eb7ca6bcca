use serde::Serialize;

/// The canonical kind of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// A bar chart over categories.
    Bar,
    /// A line chart over categories.
    Line,
    /// A pie (or donut) chart.
    Pie,
    /// The declared type did not match any known chart kind.
    Unsupported,
}

impl ChartKind {
    /// Returns `true` for kinds drawn on a category axis.
    pub fn is_cartesian(self) -> bool {
        matches!(self, ChartKind::Bar | ChartKind::Line)
    }
}

// Checked in order; the first pattern contained in the declared type wins.
const KIND_PATTERNS: [(&str, ChartKind); 4] = [
    ("bar", ChartKind::Bar),
    ("line", ChartKind::Line),
    ("pie", ChartKind::Pie),
    ("donut", ChartKind::Pie),
];

/// Maps a declared chart type onto a [ChartKind].
///
/// The match is a case-insensitive substring search, so `BAR_CHART` and
/// `stacked-bar` both resolve to [ChartKind::Bar]. Absent or unrecognized
/// types resolve to [ChartKind::Unsupported].
pub fn resolve_chart_type(declared_type: Option<&str>) -> ChartKind {
    let Some(declared_type) = declared_type else {
        return ChartKind::Unsupported;
    };

    let declared_type = declared_type.to_lowercase();

    KIND_PATTERNS
        .iter()
        .find(|(pattern, _)| declared_type.contains(pattern))
        .map_or(ChartKind::Unsupported, |&(_, kind)| kind)
}
