//! opsboard's dashboard library.
//!
//! It reads the analytics backend's dashboard payloads and turns every chart
//! descriptor in them into a rendering directive that a charting layer can
//! draw without further checks.
//!
//! ```
//! use opsboard_dashboard::DashboardPayload;
//! use opsboard_dashboard::chart::{self, ChartDirective, ChartKind};
//!
//! let payload = DashboardPayload::from_json(r#"{
//!     "charts": [{
//!         "metric": "output_by_line",
//!         "title": "Output by line",
//!         "chart_type": "bar_chart",
//!         "data": [{ "line": "L1", "units": 420 }, { "line": "L2", "units": 380 }]
//!     }]
//! }"#).unwrap();
//!
//! match chart::resolve(&payload.charts[0]) {
//!     ChartDirective::Resolved(spec) => {
//!         assert_eq!(spec.kind, ChartKind::Bar);
//!         assert_eq!(spec.category_field, "line");
//!         assert_eq!(spec.value_field, "units");
//!     }
//!     other => panic!("unexpected directive: {other:?}"),
//! }
//! ```

#![warn(missing_docs)]

pub mod chart;
pub mod error;
pub mod payload;

pub use crate::payload::ChartDescriptor;
pub use crate::payload::DashboardPayload;
pub use crate::payload::Row;
