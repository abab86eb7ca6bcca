use opsboard_dashboard::payload::TableSection;

use crate::format::format_value;
use crate::id::Id;
use crate::layout::Element;

/// A tabular section, with every cell already formatted.
#[derive(Debug)]
pub struct Table {
    id: Id,
    /// The table title.
    pub title: String,
    /// The column names, taken from the first row.
    pub columns: Vec<String>,
    /// The formatted cells, row by row.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from a payload section.
    pub fn new(id: Id, section: &TableSection) -> Table {
        let columns: Vec<String> = section.columns().into_iter().map(str::to_owned).collect();

        let rows = section
            .data
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| format_value(row.get(column)))
                    .collect()
            })
            .collect();

        Self {
            id,
            title: section.title.clone(),
            columns,
            rows,
        }
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Element for Table {
    fn id(&self) -> Id {
        self.id
    }
}
