//! The structure of a dashboard report, on the page and on disk.

mod data;
mod writer;

pub mod chart;
pub mod insights;
pub mod kpi;
pub mod section;
pub mod table;
pub mod view;

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use opsboard_dashboard::DashboardPayload;
use tracing::info;

use crate::error::Result;
use crate::id::Id;
use crate::layout::chart::ChartPanel;
use crate::layout::chart::Notice;
use crate::layout::data::DataEngine;
use crate::layout::insights::Insights;
use crate::layout::kpi::KpiCard;
use crate::layout::section::Section;
use crate::layout::table::Table;
use crate::layout::view::View;
use crate::render::Render;
use crate::render::output::OutputFile;
use crate::template::PageContext;
use crate::template::TemplateEngine;

/// An element of a [View] with an id of its own.
pub trait Element {
    /// Returns the id of the element.
    fn id(&self) -> Id;
}

/// The elements a [View] is made of.
#[derive(Debug)]
pub enum ElementKind {
    /// A titled group of elements.
    Section(Section),
    /// A headline metric card.
    Kpi(KpiCard),
    /// A chart card.
    Chart(ChartPanel),
    /// A table card.
    Table(Table),
    /// The AI commentary card.
    Insights(Insights),
    /// A placeholder message.
    Notice(Notice),
}

/// The report directory is structured as follows:
///
/// ./opsboard/index.html
/// ./opsboard/payload.json
///
/// ./opsboard/data/chart1.js
/// ./opsboard/data/chart2.js
/// ./opsboard/data/...
/// ./opsboard/data/chartN.js
///
/// The __index__ file is the dashboard page.
/// The __data__ directory contains the points of every drawn chart.
/// The __payload__ file is written only on request and holds the dashboard
/// payload the report was generated from.
#[derive(Debug)]
pub struct ReportLayout {
    root_path: PathBuf,
    index_file_path: PathBuf,
    data_path: PathBuf,
}

impl ReportLayout {
    const MAIN_DIR_NAME: &str = "opsboard";
    const DATA_DIR_NAME: &str = "data";
    const INDEX_FILE_NAME: &str = "index.html";
    const PAYLOAD_FILE_NAME: &str = "payload.json";

    /// Creates the report directory under `path`.
    ///
    /// An existing report directory is reused; its files are overwritten.
    pub fn init(path: &Path) -> Result<ReportLayout> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);
        let data_path = root_path.join(Self::DATA_DIR_NAME);

        fs::create_dir_all(&data_path)?;

        Ok(Self {
            root_path,
            index_file_path,
            data_path,
        })
    }

    /// Returns the report directory.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Returns the path of the dashboard page.
    pub fn index_file_path(&self) -> &Path {
        &self.index_file_path
    }

    /// Generates the dashboard page and the chart data files.
    pub fn generate_report(&self, title: &str, payload: &DashboardPayload) -> Result<Report> {
        let view = View::from_payload(title, payload);
        let charts = view.charts();

        let mut data_engine = DataEngine::new(&self.data_path);
        let scripts = data_engine
            .write(&charts)?
            .into_iter()
            .map(|file_name| format!("{}/{file_name}", Self::DATA_DIR_NAME))
            .collect();

        let mut body = String::new();
        view.render(&mut body)?;

        let template = TemplateEngine::new()?;
        let mut output = OutputFile::create(&self.index_file_path)?;
        template.render(&PageContext::new(title, scripts, body), &mut output)?;
        output.finish()?;

        let report = Report {
            index_file_path: self.index_file_path.clone(),
            charts: charts.len(),
            chart_notices: view.chart_notices(),
        };

        info!(
            path = %report.index_file_path.display(),
            charts = report.charts,
            chart_notices = report.chart_notices,
            "generated dashboard report"
        );

        Ok(report)
    }

    /// Writes the payload JSON next to the report, byte for byte as it was
    /// received.
    pub fn save_payload(&self, json: &str) -> Result<PathBuf> {
        let path = self.root_path.join(Self::PAYLOAD_FILE_NAME);
        fs::write(&path, json)?;

        Ok(path)
    }
}

/// A summary of a generated report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The path of the dashboard page.
    pub index_file_path: PathBuf,
    /// The number of drawn charts.
    pub charts: usize,
    /// The number of charts shown as a notice.
    pub chart_notices: usize,
}
