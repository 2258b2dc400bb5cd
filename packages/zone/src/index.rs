//! R-tree index over a zone list.
//!
//! Gives the same answer as [`crate::classify_point`] but only tests the
//! zones whose bounding box contains the point. Each entry remembers its
//! position in the original list so overlapping zones still resolve to the
//! earliest one.

use rstar::{AABB, RTree, RTreeObject};
use shot_chart_geometry::{Envelope, Point, Polygon};
use shot_chart_zone_models::{UNKNOWN_ZONE, Zone};

/// A zone stored in the R-tree with its list position.
struct ZoneEntry {
    position: usize,
    name: String,
    envelope: AABB<[f64; 2]>,
    polygon: Polygon,
}

impl RTreeObject for ZoneEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Spatial index for repeated classification against one zone list.
pub struct ZoneIndex {
    tree: RTree<ZoneEntry>,
}

impl ZoneIndex {
    /// Builds an index over `zones`, preserving their precedence order.
    #[must_use]
    pub fn new(zones: &[Zone]) -> Self {
        let entries = zones
            .iter()
            .enumerate()
            .map(|(position, zone)| ZoneEntry {
                position,
                name: zone.name.clone(),
                envelope: to_aabb(zone.polygon.envelope()),
                polygon: zone.polygon.clone(),
            })
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Number of indexed zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Returns `true` if no zones are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Returns the name of the earliest-listed zone containing the point,
    /// or `None`.
    #[must_use]
    pub fn lookup(&self, x: f64, y: f64) -> Option<&str> {
        let point = Point::new(x, y);
        let query_env = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&query_env)
            .filter(|entry| entry.polygon.contains(point))
            .min_by_key(|entry| entry.position)
            .map(|entry| entry.name.as_str())
    }

    /// Like [`ZoneIndex::lookup`] but falls back to [`UNKNOWN_ZONE`].
    #[must_use]
    pub fn classify(&self, x: f64, y: f64) -> String {
        self.lookup(x, y).unwrap_or(UNKNOWN_ZONE).to_string()
    }
}

fn to_aabb(envelope: Envelope) -> AABB<[f64; 2]> {
    AABB::from_corners(
        [envelope.min.x, envelope.min.y],
        [envelope.max.x, envelope.max.y],
    )
}
