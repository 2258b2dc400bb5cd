//! Manual make/miss counters for quick courtside tallying.
//!
//! Uses the coarse labels in [`TALLY_LABELS`] rather than the polygon zones,
//! since a manual tally has no coordinates to classify.

use shot_chart_shot_models::{ShotResult, TallySummaryRow};

use crate::ShotError;
use crate::summary::field_goal_pct;

/// Zone labels available for manual tallying, in display order.
pub const TALLY_LABELS: [&str; 3] = ["PAINT", "TWO_PT", "THREE_PT"];

/// Label of the aggregate line in [`ManualTally::summary`].
pub const TOTAL_LABEL: &str = "TOTAL";

/// Make/miss counters per tally label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualTally {
    counts: [(u64, u64); TALLY_LABELS.len()],
}

impl ManualTally {
    /// Creates a tally with every counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(label: &str) -> Result<usize, ShotError> {
        TALLY_LABELS
            .iter()
            .position(|l| *l == label)
            .ok_or_else(|| ShotError::UnknownTallyLabel {
                label: label.to_string(),
            })
    }

    /// Adds one make or miss to `label`.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError::UnknownTallyLabel`] if `label` is not one of
    /// [`TALLY_LABELS`].
    pub fn increment(&mut self, label: &str, result: ShotResult) -> Result<(), ShotError> {
        let (makes, misses) = &mut self.counts[Self::position(label)?];
        match result {
            ShotResult::Make => *makes += 1,
            ShotResult::Miss => *misses += 1,
        }
        Ok(())
    }

    /// Returns `(makes, misses)` for `label`.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError::UnknownTallyLabel`] for an unknown label.
    pub fn counts(&self, label: &str) -> Result<(u64, u64), ShotError> {
        Ok(self.counts[Self::position(label)?])
    }

    /// Sets every counter back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// One row per label followed by a `TOTAL` row.
    #[must_use]
    pub fn summary(&self) -> Vec<TallySummaryRow> {
        let row = |zone: &str, makes: u64, misses: u64| TallySummaryRow {
            zone: zone.to_string(),
            makes,
            misses,
            attempts: makes + misses,
            fg_pct: field_goal_pct(makes, makes + misses),
        };

        let mut rows: Vec<TallySummaryRow> = TALLY_LABELS
            .iter()
            .zip(self.counts)
            .map(|(&label, (makes, misses))| row(label, makes, misses))
            .collect();

        let (total_makes, total_misses) = self
            .counts
            .iter()
            .fold((0, 0), |(m, x), (makes, misses)| (m + makes, x + misses));
        rows.push(row(TOTAL_LABEL, total_makes, total_misses));

        rows
    }
}
