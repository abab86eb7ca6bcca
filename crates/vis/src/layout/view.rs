use opsboard_dashboard::DashboardPayload;
use tracing::debug;

use crate::id::IdSeq;
use crate::layout::ElementKind;
use crate::layout::chart::ChartPanel;
use crate::layout::chart::Notice;
use crate::layout::chart::PlotChart;
use crate::layout::insights::Insights;
use crate::layout::kpi::KpiCard;
use crate::layout::section::Section;
use crate::layout::table::Table;

/// The whole dashboard page.
#[derive(Debug)]
pub struct View {
    /// The page title.
    pub title: String,
    /// The top-level elements, in display order.
    pub elements: Vec<ElementKind>,
}

impl View {
    /// Creates an empty page.
    pub fn new(title: &str) -> View {
        View {
            title: title.to_owned(),
            elements: Vec::new(),
        }
    }

    /// Appends an element.
    pub fn add(mut self, element: ElementKind) -> View {
        self.elements.push(element);
        self
    }

    /// Lays out a dashboard payload: KPIs first, then charts, tables and the
    /// AI commentary. Sections without content are left out.
    pub fn from_payload(title: &str, payload: &DashboardPayload) -> View {
        let mut ids = IdSeq::new();
        let mut view = View::new(title);

        if !payload.kpis.is_empty() {
            let section = payload
                .kpis
                .iter()
                .fold(Section::new(ids.next(), "Key metrics", "kpis"), |section, kpi| {
                    section.add(ElementKind::Kpi(KpiCard::new(ids.next(), kpi)))
                });
            view = view.add(ElementKind::Section(section));
        }

        if !payload.charts.is_empty() {
            let section = payload
                .charts
                .iter()
                .fold(Section::new(ids.next(), "Charts", "charts"), |section, chart| {
                    section.add(ElementKind::Chart(ChartPanel::from_descriptor(ids.next(), chart)))
                });
            view = view.add(ElementKind::Section(section));
        }

        if !payload.tables.is_empty() {
            let section = payload
                .tables
                .iter()
                .fold(Section::new(ids.next(), "Tables", "tables"), |section, table| {
                    section.add(ElementKind::Table(Table::new(ids.next(), table)))
                });
            view = view.add(ElementKind::Section(section));
        }

        if let Some(insights) = payload.ai_insights.as_ref().filter(|i| !i.is_empty()) {
            view = view.add(ElementKind::Insights(Insights::new(ids.next(), insights)));
        }

        if view.elements.is_empty() {
            view = view.add(ElementKind::Notice(Notice::EmptyDashboard));
        }

        debug!(
            kpis = payload.kpis.len(),
            charts = payload.charts.len(),
            tables = payload.tables.len(),
            "laid out dashboard"
        );

        view
    }

    /// Returns the drawn charts, in display order.
    pub fn charts(&self) -> Vec<&PlotChart> {
        self.panels().into_iter().filter_map(ChartPanel::plot).collect()
    }

    /// Returns the number of charts shown as a notice.
    pub fn chart_notices(&self) -> usize {
        self.panels()
            .into_iter()
            .filter(|panel| panel.plot().is_none())
            .count()
    }

    fn panels(&self) -> Vec<&ChartPanel> {
        let mut panels = Vec::new();
        collect_panels(&self.elements, &mut panels);
        panels
    }
}

fn collect_panels<'a>(elements: &'a [ElementKind], panels: &mut Vec<&'a ChartPanel>) {
    for element in elements {
        match element {
            ElementKind::Section(section) => collect_panels(&section.elements, panels),
            ElementKind::Chart(panel) => panels.push(panel),
            ElementKind::Kpi(_)
            | ElementKind::Table(_)
            | ElementKind::Insights(_)
            | ElementKind::Notice(_) => {}
        }
    }
}
