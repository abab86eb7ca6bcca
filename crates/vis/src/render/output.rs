//! Output streams for rendered text.

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::render::OutputStream;
use crate::render::error::RenderError;

/// Writes rendered text into a file, replacing its previous content.
#[derive(Debug)]
pub struct OutputFile {
    writer: BufWriter<File>,
}

impl OutputFile {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> Result<OutputFile, RenderError> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Flushes the buffered text into the file.
    pub fn finish(mut self) -> Result<(), RenderError> {
        self.writer.flush()?;
        Ok(())
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.writer.write_all(data.as_bytes())?;
        Ok(())
    }
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.push_str(data);
        Ok(())
    }
}
