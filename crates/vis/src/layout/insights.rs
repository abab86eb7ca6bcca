use opsboard_dashboard::payload::AiInsights;

use crate::id::Id;
use crate::layout::Element;

/// The generated commentary on the dashboard.
#[derive(Debug)]
pub struct Insights {
    id: Id,
    /// A short summary.
    pub summary: Option<String>,
    /// The titled lists, in display order; empty lists are left out.
    pub lists: Vec<InsightList>,
}

impl Insights {
    /// Creates the commentary card.
    pub fn new(id: Id, insights: &AiInsights) -> Insights {
        let lists = [
            (InsightKind::Insight, &insights.insights),
            (InsightKind::Risk, &insights.risks),
            (InsightKind::Recommendation, &insights.recommendations),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(kind, items)| InsightList {
            kind,
            items: items.clone(),
        })
        .collect();

        Self {
            id,
            summary: insights.summary.clone().filter(|summary| !summary.is_empty()),
            lists,
        }
    }
}

impl Element for Insights {
    fn id(&self) -> Id {
        self.id
    }
}

/// A titled list of commentary items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightList {
    /// What the items are.
    pub kind: InsightKind,
    /// The items.
    pub items: Vec<String>,
}

/// The kinds of commentary lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum InsightKind {
    Insight,
    Risk,
    Recommendation,
}

impl InsightKind {
    /// The list heading.
    pub fn title(self) -> &'static str {
        match self {
            InsightKind::Insight => "Key Insights",
            InsightKind::Risk => "Risks",
            InsightKind::Recommendation => "Recommendations",
        }
    }

    /// A short name used for styling.
    pub fn class(self) -> &'static str {
        match self {
            InsightKind::Insight => "insight",
            InsightKind::Risk => "risk",
            InsightKind::Recommendation => "recommendation",
        }
    }
}
