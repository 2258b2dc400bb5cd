#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shot attempt types shared by import, classification, and aggregation.
//!
//! A [`ShotRow`] is the canonical record every input path converges on:
//! CSV imports after column mapping, and taps on the court image.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Outcome of a shot attempt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ShotResult {
    /// The shot went in.
    Make,
    /// The shot missed.
    Miss,
}

impl ShotResult {
    /// Returns `true` for [`ShotResult::Make`].
    #[must_use]
    pub const fn is_make(self) -> bool {
        matches!(self, Self::Make)
    }
}

/// Logical columns a source table can be mapped onto.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogicalField {
    /// Horizontal pixel coordinate (required).
    X,
    /// Vertical pixel coordinate (required).
    Y,
    /// Make/miss outcome (required).
    Result,
    /// Shooter name (optional).
    Player,
    /// Game period (optional).
    Period,
}

impl LogicalField {
    /// Fields every mapping must provide.
    pub const REQUIRED: &[Self] = &[Self::X, Self::Y, Self::Result];

    /// Fields a mapping may provide.
    pub const OPTIONAL: &[Self] = &[Self::Player, Self::Period];

    /// Returns `true` if the field must be mapped.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::X | Self::Y | Self::Result)
    }
}

/// Maps logical fields to column names in a source table.
pub type ColumnMapping = BTreeMap<LogicalField, String>;

/// A normalized shot attempt.
///
/// Field order matches the exported CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotRow {
    /// Horizontal pixel coordinate on the court image.
    pub x: f64,
    /// Vertical pixel coordinate on the court image.
    pub y: f64,
    /// Make or miss.
    pub result: ShotResult,
    /// Zone label, once classified.
    #[serde(default)]
    pub zone: Option<String>,
    /// Shooter name.
    #[serde(default)]
    pub player: Option<String>,
    /// Game period.
    #[serde(default)]
    pub period: Option<i64>,
}

impl ShotRow {
    /// Creates an unclassified row with no player or period.
    #[must_use]
    pub const fn new(x: f64, y: f64, result: ShotResult) -> Self {
        Self {
            x,
            y,
            result,
            zone: None,
            player: None,
            period: None,
        }
    }
}

/// Per-zone make/miss totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    /// Zone label.
    pub zone: String,
    /// Total attempts.
    pub attempts: u64,
    /// Made shots.
    pub makes: u64,
    /// Field goal percentage, rounded to one decimal place.
    pub fg_pct: f64,
}

/// One line of a manual tally summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TallySummaryRow {
    /// Zone label, or `"TOTAL"` for the final line.
    pub zone: String,
    /// Made shots.
    pub makes: u64,
    /// Missed shots.
    pub misses: u64,
    /// Makes plus misses.
    pub attempts: u64,
    /// Field goal percentage, rounded to one decimal place.
    pub fg_pct: f64,
}
