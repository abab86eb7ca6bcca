use std::io::Seek;
use std::io::Write;

use crate::layout::chart::Series;
use crate::render::error::RenderError;

// The header is written last, once the number of points is known, over a line
// of spaces reserved up front:
//
// let xs1 = new Array(3), ys1 = new Array(3);
const HEADER_STATIC_BYTES: usize = 35;
const MAX_USIZE_DIGITS: usize = 20;

/// Writes a chart's points as a JavaScript file that declares two parallel
/// arrays, one for the category values and one for the numeric values.
pub(crate) struct SeriesWriter<W> {
    writer: W,
    index: usize,
    series: Series,
}

impl<W: Write + Seek> SeriesWriter<W> {
    pub(crate) fn new(writer: W, series: Series) -> Self {
        Self {
            writer,
            index: 0,
            series,
        }
    }

    fn reserved_bytes(&self) -> usize {
        HEADER_STATIC_BYTES + 2 * MAX_USIZE_DIGITS + self.series.xs.len() + self.series.ys.len()
    }

    pub(crate) fn start(&mut self) -> Result<(), RenderError> {
        let whitespaces = b" ".repeat(self.reserved_bytes());

        self.writer.write_all(&whitespaces)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub(crate) fn write(&mut self, x: &str, y: Option<f64>) -> Result<(), RenderError> {
        let x = serde_json::to_string(x)?;
        let y = y
            .filter(|y| y.is_finite())
            .map_or_else(|| String::from("null"), |y| y.to_string());

        let line = format!(
            "{xs}[{idx}] = {x}; {ys}[{idx}] = {y};\n",
            xs = self.series.xs,
            ys = self.series.ys,
            idx = self.index,
        );

        self.writer.write_all(line.as_bytes())?;
        self.index += 1;

        Ok(())
    }

    pub(crate) fn end(mut self) -> Result<usize, RenderError> {
        self.writer.rewind()?;

        let header = format!(
            "let {xs} = new Array({size}), {ys} = new Array({size});",
            xs = self.series.xs,
            ys = self.series.ys,
            size = self.index
        );

        self.writer.write_all(header.as_bytes())?;
        self.writer.flush()?;

        Ok(self.index)
    }
}
