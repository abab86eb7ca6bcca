use std::path::Path;

use opsboard_dashboard::DashboardPayload;
use opsboard_dashboard::chart;
use opsboard_dashboard::chart::ChartDirective;
use serde::Serialize;
use tracing::info;

use crate::error::CliError;

#[derive(Debug, Serialize)]
struct ResolvedChart<'a> {
    metric: &'a str,
    title: &'a str,
    directive: ChartDirective,
}

pub(crate) fn resolve(input: &Path) -> Result<(), CliError> {
    let payload = DashboardPayload::from_path(input)?;
    info!(input = %input.display(), charts = payload.charts.len(), "resolving charts");

    let resolved = resolve_charts(&payload);
    println!("{}", serde_json::to_string_pretty(&resolved)?);

    Ok(())
}

fn resolve_charts(payload: &DashboardPayload) -> Vec<ResolvedChart<'_>> {
    payload
        .charts
        .iter()
        .map(|descriptor| ResolvedChart {
            metric: &descriptor.metric,
            title: &descriptor.title,
            directive: chart::resolve(descriptor),
        })
        .collect()
}
