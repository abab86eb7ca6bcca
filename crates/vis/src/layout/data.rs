use std::fs;
use std::fs::OpenOptions;
use std::path::Path;

use tracing::debug;

use crate::layout::chart::PlotChart;
use crate::layout::writer::SeriesWriter;
use crate::render::error::RenderError;

const DATA_FILE_NAME: &str = "chart";

/// Writes the series data files of the drawn charts.
pub(crate) struct DataEngine<'a> {
    path: &'a Path,
}

impl<'a> DataEngine<'a> {
    pub(crate) fn new(path: &'a Path) -> DataEngine<'a> {
        Self { path }
    }

    /// Writes one data file per chart and returns the file names, in chart
    /// order.
    pub(crate) fn write(&mut self, charts: &[&PlotChart]) -> Result<Vec<String>, RenderError> {
        if !self.path.exists() {
            fs::create_dir_all(self.path)?;
        }

        let mut file_names = Vec::with_capacity(charts.len());

        for chart in charts {
            let file_name = format!("{DATA_FILE_NAME}{id}.js", id = chart.id());
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(self.path.join(&file_name))?;

            let mut writer = SeriesWriter::new(file, chart.series());
            writer.start()?;

            for point in &chart.points {
                writer.write(&point.x, point.y)?;
            }

            let written = writer.end()?;
            debug!(file = %file_name, points = written, "wrote chart series");

            file_names.push(file_name);
        }

        Ok(file_names)
    }
}
