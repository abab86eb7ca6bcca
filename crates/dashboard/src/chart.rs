//! Chart resolution.
//!
//! The backend describes a chart with a free-form type tag and a list of
//! loosely typed records. [resolve] turns such a [ChartDescriptor] into a
//! [ChartDirective]: either a [ResolvedChartSpec] that is safe to draw, or one
//! of the two terminal states for data that cannot be drawn. Resolution is a
//! pure function of the descriptor and never fails.

mod date;
mod keys;
mod kind;
mod label;
mod ticks;

use serde::Serialize;
use serde_json::Value;

use crate::payload::ChartDescriptor;
use crate::payload::Row;

pub use crate::chart::date::detect_date_category;
pub use crate::chart::keys::InferredKeys;
pub use crate::chart::keys::ValueKind;
pub use crate::chart::keys::infer_keys;
pub use crate::chart::kind::ChartKind;
pub use crate::chart::kind::resolve_chart_type;
pub use crate::chart::label::ELLIPSIS;
pub use crate::chart::label::LabelFormat;
pub use crate::chart::label::MAX_LABEL_CHARS;
pub use crate::chart::label::display_value;
pub use crate::chart::label::format_label;
pub use crate::chart::ticks::DENSE_SERIES_ROWS;
pub use crate::chart::ticks::MAX_VISIBLE_TICKS;
pub use crate::chart::ticks::compute_tick_stride;
pub use crate::chart::ticks::shows_tick;

/// The outcome of resolving a [ChartDescriptor].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartDirective {
    /// The descriptor has no rows.
    NoData {
        /// The kind resolved from the declared type.
        kind: ChartKind,
    },

    /// The descriptor has rows, but no two distinct fields to plot.
    InvalidData {
        /// The kind resolved from the declared type.
        kind: ChartKind,
    },

    /// The chart can be drawn.
    Resolved(ResolvedChartSpec),
}

impl ChartDirective {
    /// Returns the chart kind resolved from the declared type.
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartDirective::NoData { kind } | ChartDirective::InvalidData { kind } => *kind,
            ChartDirective::Resolved(spec) => spec.kind,
        }
    }
}

/// A fully resolved chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedChartSpec {
    /// The chart kind.
    pub kind: ChartKind,
    /// The field plotted on the category (x) axis, or used for slice names.
    pub category_field: String,
    /// The field plotted on the value (y) axis, or used for slice sizes.
    pub value_field: String,
    /// Whether the category values are calendar dates.
    pub is_date_category: bool,
    /// The tick stride, see [compute_tick_stride].
    pub tick_stride: usize,
    /// The formatter of category labels.
    pub label_format: LabelFormat,
}

impl ResolvedChartSpec {
    /// Returns the category value of a row.
    pub fn category<'a>(&self, row: &'a Row) -> Option<&'a Value> {
        row.get(&self.category_field)
    }

    /// Returns the numeric value of a row, if it has one.
    pub fn value(&self, row: &Row) -> Option<f64> {
        row.get(&self.value_field).and_then(Value::as_f64)
    }

    /// Formats a category value as an axis label.
    pub fn format_label(&self, value: Option<&Value>) -> String {
        self.label_format.format(value)
    }

    /// Returns `true` if the tick at `index` is shown.
    pub fn shows_tick(&self, index: usize) -> bool {
        shows_tick(self.tick_stride, index)
    }
}

/// Resolves a chart descriptor into a rendering directive.
///
/// The kind comes from the declared type alone. Rows are only inspected when
/// there are some; the first row decides the fields, the date detection and
/// nothing else.
pub fn resolve(descriptor: &ChartDescriptor) -> ChartDirective {
    let kind = resolve_chart_type(descriptor.declared_type.as_deref());
    let rows = &descriptor.rows;

    if rows.is_empty() {
        return ChartDirective::NoData { kind };
    }

    let InferredKeys { category, value } = infer_keys(rows);

    let (Some(category_field), Some(value_field)) = (category, value) else {
        return ChartDirective::InvalidData { kind };
    };

    if category_field == value_field {
        return ChartDirective::InvalidData { kind };
    }

    let is_date_category = detect_date_category(rows, Some(&category_field));

    ChartDirective::Resolved(ResolvedChartSpec {
        kind,
        category_field,
        value_field,
        is_date_category,
        tick_stride: compute_tick_stride(rows.len()),
        label_format: LabelFormat::for_category(is_date_category),
    })
}
