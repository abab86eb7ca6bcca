use crate::format::escape_html;
use crate::layout::Element;
use crate::layout::ElementKind;
use crate::layout::chart::ChartContent;
use crate::layout::chart::ChartPanel;
use crate::layout::chart::Notice;
use crate::layout::chart::PlotChart;
use crate::layout::insights::Insights;
use crate::layout::kpi::KpiCard;
use crate::layout::kpi::Tone;
use crate::layout::section::Section;
use crate::layout::table::Table;
use crate::layout::view::View;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::error::RenderError;

const EMPTY_TABLE: &str = "No data";
const EMPTY_TABLE_NOTE: &str = "Nothing to show for this section yet.";

impl Render for ElementKind {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        match self {
            ElementKind::Section(s) => s.render(output),
            ElementKind::Kpi(k) => k.render(output),
            ElementKind::Chart(c) => c.render(output),
            ElementKind::Table(t) => t.render(output),
            ElementKind::Insights(i) => i.render(output),
            ElementKind::Notice(n) => n.render(output),
        }
    }
}

/// Renders the body of the page; the page shell comes from the template.
impl Render for View {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        for element in &self.elements {
            element.render(output)?;
        }

        Ok(())
    }
}

impl Render for Section {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id();
        let class = self.class;
        let title = escape_html(&self.title);

        output.write(&format!(
            r#"<section id="section-{id}" class="section {class}"><h2>{title}</h2><div class="grid">"#
        ))?;

        for element in &self.elements {
            element.render(output)?;
        }

        output.write("</div></section>")
    }
}

impl Render for KpiCard {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id();
        let title = escape_html(&self.title);
        let value = escape_html(&self.value);
        let unit = escape_html(&self.unit);
        let tone = self.badge.tone.class();
        let badge = escape_html(&self.badge.text);

        output.write(&format!(
            r#"
                <div id="kpi-{id}" class="card kpi">
                    <div class="card-header">
                        <h3>{title}</h3>
                        <span class="badge {tone}">{badge}</span>
                    </div>
                    <div><span class="kpi-value">{value}</span><span class="kpi-unit">{unit}</span></div>
                </div>
            "#,
        ))
    }
}

impl Render for ChartPanel {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id();
        let title = escape_html(&self.title);

        output.write(&format!(
            r#"<div id="card-{id}" class="card chart-card"><div class="card-header"><h3>{title}</h3></div>"#
        ))?;

        match self.content {
            ChartContent::Plot(ref plot) => plot.render(output)?,
            ChartContent::Notice(ref notice) => notice.render(output)?,
        }

        output.write("</div>")
    }
}

impl Render for PlotChart {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id();
        let series = self.series();
        let (xs, ys) = (series.xs(), series.ys());
        let trace = script_json(&self.plot.trace)?;
        let layout = script_json(&self.plot.layout)?;

        let data = if self.plot.trace.is_radial() {
            format!("trace.labels = {xs}; trace.values = {ys};")
        } else {
            format!(
                "trace.x = {ys}.map((_, idx) => idx); trace.y = {ys}; trace.hovertext = {xs};"
            )
        };

        output.write(&format!(
            r#"
                <div id="chart-{id}" class="chart"></div>
                <script>
                    {{
                        const trace = {trace};
                        {data}

                        const chart = document.getElementById("chart-{id}");
                        Plotly.newPlot(chart, [trace], {layout}, {{ responsive: true, displayModeBar: false }});
                    }}
                </script>
            "#,
        ))
    }
}

impl Render for Notice {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let class = self.class();
        let message = escape_html(&self.to_string());

        output.write(&format!(r#"<div class="notice {class}">{message}</div>"#))
    }
}

impl Render for Table {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id();
        let title = escape_html(&self.title);

        if self.is_empty() {
            let tone = Tone::Slate.class();
            return output.write(&format!(
                r#"
                    <div id="table-{id}" class="card table">
                        <div class="card-header">
                            <h3>{title}</h3>
                            <span class="badge {tone}">{EMPTY_TABLE}</span>
                        </div>
                        <div class="notice empty">{EMPTY_TABLE_NOTE}</div>
                    </div>
                "#,
            ));
        }

        let rows = self.rows.len();
        let tone = Tone::Cyan.class();

        output.write(&format!(
            r#"<div id="table-{id}" class="card table"><div class="card-header"><h3>{title}</h3><span class="badge {tone}">Rows: {rows}</span></div>"#
        ))?;
        output.write(r#"<div class="table-wrap"><table><thead><tr>"#)?;

        for column in &self.columns {
            output.write(&format!("<th>{}</th>", escape_html(column)))?;
        }

        output.write("</tr></thead><tbody>")?;

        for row in &self.rows {
            output.write("<tr>")?;
            for cell in row {
                output.write(&format!("<td>{}</td>", escape_html(cell)))?;
            }
            output.write("</tr>")?;
        }

        output.write("</tbody></table></div></div>")
    }
}

impl Render for Insights {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id();

        output.write(&format!(
            r#"<section id="insights-{id}" class="section insights"><h2>AI Insights</h2><div class="card">"#
        ))?;

        if let Some(summary) = &self.summary {
            output.write(&format!(
                r#"<p class="summary">{}</p>"#,
                escape_html(summary)
            ))?;
        }

        for list in &self.lists {
            output.write(&format!(
                r#"<div class="{class}"><h3>{title}</h3><ul>"#,
                class = list.kind.class(),
                title = list.kind.title(),
            ))?;

            for item in &list.items {
                output.write(&format!("<li>{}</li>", escape_html(item)))?;
            }

            output.write("</ul></div>")?;
        }

        output.write("</div></section>")
    }
}

/// Serializes a value as JSON that is safe to embed in a `<script>` element.
fn script_json<T>(value: &T) -> Result<String, RenderError>
where
    T: serde::Serialize,
{
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}
