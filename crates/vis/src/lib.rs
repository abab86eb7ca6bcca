//! opsboard's visualization library.
//!
//! Renders a [DashboardPayload] as a static HTML report: KPI cards, Plotly
//! charts, tables and the AI commentary. Chart descriptors are resolved with
//! [opsboard_dashboard::chart::resolve]; charts that cannot be drawn are shown
//! as a short notice instead.
//!
//! [DashboardPayload]: opsboard_dashboard::DashboardPayload

#![warn(missing_docs)]

pub(crate) mod format;
pub(crate) mod template;

pub mod error;
pub mod id;
pub mod layout;
pub mod render;
