use chrono::Utc;
use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::render::OutputStream;
use crate::render::error::RenderError;

const INDEX_TEMPLATE_NAME: &str = "index";
const INDEX_TEMPLATE: &str = include_str!("./template/index.html.tt");
const STYLE: &str = include_str!("./template/style.css");

/// Renders the page shell around a rendered view.
pub(crate) struct TemplateEngine {
    template: TinyTemplate<'static>,
}

impl TemplateEngine {
    pub(crate) fn new() -> Result<TemplateEngine, RenderError> {
        let mut template = TinyTemplate::new();
        template.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;

        Ok(Self { template })
    }

    pub(crate) fn render<O>(&self, context: &PageContext, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream,
    {
        let text = self.template.render(INDEX_TEMPLATE_NAME, context)?;
        output.write(&text)
    }
}

/// The values the page template is rendered with.
#[derive(Serialize, Debug)]
pub(crate) struct PageContext {
    title: String,
    generated_at: String,
    style: &'static str,
    scripts: Vec<String>,
    body: String,
}

impl PageContext {
    pub(crate) fn new(title: &str, scripts: Vec<String>, body: String) -> PageContext {
        Self {
            title: title.to_owned(),
            generated_at: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
            style: STYLE,
            scripts,
            body,
        }
    }
}
