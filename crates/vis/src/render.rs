//! Rendering of a [View](crate::layout::view::View) into HTML.

pub mod error;
pub mod output;
pub mod view;

use crate::render::error::RenderError;

/// A sink for rendered text.
pub trait OutputStream {
    /// Appends `data` to the output.
    fn write(&mut self, data: &str) -> Result<(), RenderError>;
}

/// An element that knows how to render itself as HTML.
pub trait Render {
    /// Renders the element into `output`.
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream;
}
