//! Per-zone aggregation and row filtering.

use std::collections::{BTreeMap, BTreeSet};

use shot_chart_shot_models::{ShotResult, ShotRow, ZoneSummary};
use shot_chart_zone::UNKNOWN_ZONE;

/// Zone label used for grouping; unclassified rows count as `UNKNOWN`.
fn zone_key(row: &ShotRow) -> &str {
    row.zone.as_deref().unwrap_or(UNKNOWN_ZONE)
}

/// Percentage of `makes` over `attempts`, rounded to one decimal place.
/// Zero attempts yields `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn field_goal_pct(makes: u64, attempts: u64) -> f64 {
    if attempts == 0 {
        return 0.0;
    }
    (makes as f64 / attempts as f64 * 1000.0).round() / 10.0
}

/// Groups rows by zone and computes attempts, makes and FG%.
///
/// Sorted by attempts descending, ties broken by zone name.
#[must_use]
pub fn summarize_by_zone(rows: &[ShotRow]) -> Vec<ZoneSummary> {
    let mut counts: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for row in rows {
        let entry = counts.entry(zone_key(row)).or_default();
        entry.0 += 1;
        if row.result.is_make() {
            entry.1 += 1;
        }
    }

    let mut summary: Vec<ZoneSummary> = counts
        .into_iter()
        .map(|(zone, (attempts, makes))| ZoneSummary {
            zone: zone.to_string(),
            attempts,
            makes,
            fg_pct: field_goal_pct(makes, attempts),
        })
        .collect();

    summary.sort_by(|a, b| b.attempts.cmp(&a.attempts));
    summary
}

/// Row filter over the categorical columns.
///
/// An empty set places no constraint on its column. A non-empty set keeps
/// only rows whose value is in the set; rows with no value are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotFilter {
    /// Accepted player names.
    pub players: BTreeSet<String>,
    /// Accepted periods.
    pub periods: BTreeSet<i64>,
    /// Accepted zone labels.
    pub zones: BTreeSet<String>,
    /// Accepted outcomes.
    pub results: BTreeSet<ShotResult>,
}

impl ShotFilter {
    /// Returns `true` if `row` passes every non-empty constraint.
    #[must_use]
    pub fn matches(&self, row: &ShotRow) -> bool {
        let player_ok = self.players.is_empty()
            || row
                .player
                .as_ref()
                .is_some_and(|player| self.players.contains(player));
        let period_ok = self.periods.is_empty()
            || row
                .period
                .is_some_and(|period| self.periods.contains(&period));
        let zone_ok = self.zones.is_empty() || self.zones.contains(zone_key(row));
        let result_ok = self.results.is_empty() || self.results.contains(&row.result);

        player_ok && period_ok && zone_ok && result_ok
    }

    /// Returns the rows that pass the filter, in input order.
    #[must_use]
    pub fn apply(&self, rows: &[ShotRow]) -> Vec<ShotRow> {
        rows.iter().filter(|row| self.matches(row)).cloned().collect()
    }
}

/// The distinct values available for each filterable column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Player names present in the data.
    pub players: BTreeSet<String>,
    /// Periods present in the data.
    pub periods: BTreeSet<i64>,
    /// Zone labels present in the data.
    pub zones: BTreeSet<String>,
    /// Outcomes present in the data.
    pub results: BTreeSet<ShotResult>,
}

impl FilterOptions {
    /// Collects the sorted distinct values of each column in `rows`.
    #[must_use]
    pub fn from_rows(rows: &[ShotRow]) -> Self {
        let mut options = Self::default();
        for row in rows {
            if let Some(player) = &row.player {
                options.players.insert(player.clone());
            }
            if let Some(period) = row.period {
                options.periods.insert(period);
            }
            options.zones.insert(zone_key(row).to_string());
            options.results.insert(row.result);
        }
        options
    }

    /// A filter that selects every option, i.e. keeps every row that has a
    /// value in each populated column.
    #[must_use]
    pub fn select_all(&self) -> ShotFilter {
        ShotFilter {
            players: self.players.clone(),
            periods: self.periods.clone(),
            zones: self.zones.clone(),
            results: self.results.clone(),
        }
    }
}
