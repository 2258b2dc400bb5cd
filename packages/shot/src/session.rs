//! In-memory shot collection for tap-to-record sessions.

use shot_chart_shot_models::{ShotResult, ShotRow};
use shot_chart_zone::{Zone, classify_point};

/// Append-only log of classified shots with undo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotLog {
    rows: Vec<ShotRow>,
}

impl ShotLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies a tap at `(x, y)` and appends it.
    pub fn record_tap(&mut self, x: f64, y: f64, result: ShotResult, zones: &[Zone]) -> &ShotRow {
        let mut row = ShotRow::new(x, y, result);
        row.zone = Some(classify_point(x, y, zones));
        self.record(row)
    }

    /// Appends an already built row.
    pub fn record(&mut self, row: ShotRow) -> &ShotRow {
        self.rows.push(row);
        &self.rows[self.rows.len() - 1]
    }

    /// Removes and returns the most recent shot.
    pub fn undo_last(&mut self) -> Option<ShotRow> {
        self.rows.pop()
    }

    /// Removes every shot.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Recorded shots, oldest first.
    #[must_use]
    pub fn rows(&self) -> &[ShotRow] {
        &self.rows
    }

    /// Number of recorded shots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Extend<ShotRow> for ShotLog {
    fn extend<T: IntoIterator<Item = ShotRow>>(&mut self, iter: T) {
        self.rows.extend(iter);
    }
}
