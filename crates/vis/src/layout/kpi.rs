use opsboard_dashboard::payload::Kpi;
use opsboard_dashboard::payload::Trend;

use crate::format::PLACEHOLDER;
use crate::format::format_float;
use crate::format::format_value;
use crate::id::Id;
use crate::layout::Element;

/// A headline metric card.
#[derive(Debug)]
pub struct KpiCard {
    id: Id,
    /// The metric title.
    pub title: String,
    /// The formatted value.
    pub value: String,
    /// The unit, or a placeholder.
    pub unit: String,
    /// The change badge.
    pub badge: Badge,
}

impl KpiCard {
    /// Creates a card for a metric.
    pub fn new(id: Id, kpi: &Kpi) -> KpiCard {
        let badge = match (kpi.trend(), kpi.delta) {
            (Trend::Unknown, _) | (_, None) => Badge::new(Tone::Slate, String::from("Metric")),
            (trend, Some(delta)) => {
                let (tone, arrow) = match trend {
                    Trend::Up => (Tone::Emerald, '▲'),
                    Trend::Down => (Tone::Red, '▼'),
                    Trend::Flat | Trend::Unknown => (Tone::Amber, '•'),
                };
                Badge::new(tone, format!("{arrow} {}", format_float(delta)))
            }
        };

        Self {
            id,
            title: kpi.title.clone(),
            value: format_value(Some(&kpi.value)),
            unit: kpi
                .unit
                .clone()
                .filter(|unit| !unit.is_empty())
                .unwrap_or_else(|| String::from(PLACEHOLDER)),
            badge,
        }
    }
}

impl Element for KpiCard {
    fn id(&self) -> Id {
        self.id
    }
}

/// A small colored label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// The color of the badge.
    pub tone: Tone,
    /// The text of the badge.
    pub text: String,
}

impl Badge {
    /// Creates a badge.
    pub fn new(tone: Tone, text: String) -> Badge {
        Self { tone, text }
    }
}

/// The color of a [Badge].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Tone {
    Slate,
    Emerald,
    Amber,
    Red,
    Cyan,
}

impl Tone {
    /// A short name used for styling.
    pub fn class(self) -> &'static str {
        match self {
            Tone::Slate => "slate",
            Tone::Emerald => "emerald",
            Tone::Amber => "amber",
            Tone::Red => "red",
            Tone::Cyan => "cyan",
        }
    }
}
