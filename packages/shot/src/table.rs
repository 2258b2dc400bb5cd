//! Untyped shot tables as they come out of a CSV file.

use shot_chart_shot_models::{ColumnMapping, LogicalField};

/// A table of string cells with arbitrary column names.
///
/// Rows may be shorter than the header (ragged CSV); missing cells read as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotTable {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl ShotTable {
    /// Creates a table from a header row and data rows.
    #[must_use]
    pub fn new<H, R, C>(headers: H, records: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            records: records
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Column names in source order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows.
    #[must_use]
    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of the column named `name`, if present.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterates over the cells of column `index`, one per row.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .map(move |row| row.get(index).map_or("", String::as_str))
    }
}

/// A small demo table with non-canonical column names.
#[must_use]
pub fn demo_table() -> ShotTable {
    ShotTable::new(
        ["shot_x", "shot_y", "PlayerName", "period_no", "make_flag"],
        [
            ["180", "80", "Alice", "1", "make"],
            ["240", "200", "Alice", "2", "miss"],
            ["360", "140", "Bob", "1", "make"],
            ["520", "320", "Charlie", "2", "miss"],
            ["140", "400", "Charlie", "3", "make"],
        ],
    )
}

/// The mapping that normalizes [`demo_table`].
#[must_use]
pub fn demo_mapping() -> ColumnMapping {
    ColumnMapping::from([
        (LogicalField::X, "shot_x".to_string()),
        (LogicalField::Y, "shot_y".to_string()),
        (LogicalField::Result, "make_flag".to_string()),
        (LogicalField::Player, "PlayerName".to_string()),
        (LogicalField::Period, "period_no".to_string()),
    ])
}
