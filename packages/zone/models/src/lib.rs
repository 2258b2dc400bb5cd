#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Scoring zone types.
//!
//! A [`Zone`] is a named polygon in court-image pixels. Zones are produced
//! by scaling a [`ZoneSetDefinition`], whose vertices are stored as ratios
//! of the image width and height so the same definition fits any court
//! image size.

use serde::{Deserialize, Serialize};
use shot_chart_geometry::Polygon;

/// Label for the painted key under the hoop.
pub const PAINT: &str = "PAINT";
/// Label for two-point shots outside the paint.
pub const MIDRANGE: &str = "MIDRANGE";
/// Label shared by both corner three-point zones.
pub const THREE_PT_CORNER: &str = "3PT_CORNER";
/// Label for three-point shots above the break.
pub const THREE_PT_ABOVE_BREAK: &str = "3PT_ABOVE_BREAK";
/// Label returned when no zone contains a point.
///
/// This is a regular group key for aggregation, not an error.
pub const UNKNOWN_ZONE: &str = "UNKNOWN";

/// A named polygonal region of the court.
///
/// Names are logical labels and are not unique: the two corner threes
/// share [`THREE_PT_CORNER`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone label (e.g. `"PAINT"`).
    pub name: String,
    /// Region in absolute pixel coordinates.
    pub polygon: Polygon,
}

impl Zone {
    /// Creates a zone.
    #[must_use]
    pub fn new(name: impl Into<String>, polygon: Polygon) -> Self {
        Self {
            name: name.into(),
            polygon,
        }
    }

    /// Returns the zone label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A zone polygon expressed as `[x_ratio, y_ratio]` pairs of the image
/// width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTemplate {
    /// Zone label applied to the scaled polygon.
    pub name: String,
    /// Vertices in ring order, each `[x_ratio, y_ratio]`.
    pub vertices: Vec<[f64; 2]>,
}

/// An ordered set of zone templates, deserialized from TOML.
///
/// Order is significant: classification returns the first zone that
/// contains a point, so earlier templates win where polygons overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSetDefinition {
    /// Unique identifier (e.g. `"half_court"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Templates in precedence order.
    pub zones: Vec<ZoneTemplate>,
}

impl ZoneSetDefinition {
    /// Returns the distinct zone labels in first-appearance order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for template in &self.zones {
            if !labels.contains(&template.name.as_str()) {
                labels.push(&template.name);
            }
        }
        labels
    }
}
