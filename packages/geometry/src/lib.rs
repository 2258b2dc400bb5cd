#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geometry primitives for classifying shot locations.
//!
//! Coordinates live in the pixel space of the reference court image, so
//! there is no projection or unit handling here: a [`Point`] is just an
//! `(x, y)` pair and a [`Polygon`] an ordered ring of points. The single
//! interesting operation is [`point_in_polygon`], an even-odd ray-casting
//! test that treats the boundary as inside.

use geo::BoundingRect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of vertices a [`Polygon`] must have.
pub const MIN_VERTICES: usize = 3;

/// Errors that can occur while building geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    /// Fewer than [`MIN_VERTICES`] vertices were supplied.
    #[error("A polygon requires at least three vertices (got {count})")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },
}

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal pixel offset from the left edge.
    pub x: f64,
    /// Vertical pixel offset from the top edge.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Top-left corner (minimum x and y).
    pub min: Point,
    /// Bottom-right corner (maximum x and y).
    pub max: Point,
}

/// A closed polygon. The last vertex connects back to the first.
///
/// Vertices are copied on construction and never exposed mutably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    vertices: Box<[Point]>,
}

impl Polygon {
    /// Builds a polygon from its vertices in ring order.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::TooFewVertices`] if fewer than three vertices
    /// are supplied.
    pub fn new(vertices: impl IntoIterator<Item = Point>) -> Result<Self, PolygonError> {
        let vertices: Box<[Point]> = vertices.into_iter().collect();
        if vertices.len() < MIN_VERTICES {
            return Err(PolygonError::TooFewVertices {
                count: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Returns the vertices in ring order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Iterates over the vertices in ring order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.vertices.iter()
    }

    /// Returns `true` when `point` is inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point_in_polygon(point, self)
    }

    /// Computes the axis-aligned bounding box.
    #[must_use]
    pub fn envelope(&self) -> Envelope {
        let ring: geo::LineString<f64> = self
            .vertices
            .iter()
            .map(|p| geo::Coord { x: p.x, y: p.y })
            .collect();

        ring.bounding_rect().map_or_else(
            || Envelope {
                min: self.vertices[0],
                max: self.vertices[0],
            },
            |rect| Envelope {
                min: Point::new(rect.min().x, rect.min().y),
                max: Point::new(rect.max().x, rect.max().y),
            },
        )
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = PolygonError;

    fn try_from(vertices: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices.into_vec()
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// Returns `true` when `point` lies inside `polygon` or exactly on its
/// boundary.
///
/// Uses the even-odd rule with a horizontal ray. A ray crossing whose
/// x-intercept equals the point's x counts as boundary and returns
/// immediately. Horizontal and vertical edges get an explicit collinearity
/// check since the crossing test alone is unreliable on them, and vertices
/// are matched exactly so apexes count as boundary too.
///
/// Self-intersecting polygons are not rejected; the result for them is
/// whatever the even-odd rule yields.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn point_in_polygon(point: Point, polygon: &Polygon) -> bool {
    let Point { x, y } = point;
    let vertices = polygon.vertices();
    let n = vertices.len();
    let mut inside = false;

    for i in 0..n {
        let j = (i + n - 1) % n;
        let Point { x: xi, y: yi } = vertices[i];
        let Point { x: xj, y: yj } = vertices[j];

        if xi == x && yi == y {
            return true;
        }

        if (yi > y) != (yj > y) {
            let intersect_x = (xj - xi) * (y - yi) / (yj - yi) + xi;
            if x == intersect_x {
                return true;
            }
            if x < intersect_x {
                inside = !inside;
            }
        }

        if yi == yj && yi == y && xi.min(xj) <= x && x <= xi.max(xj) {
            return true;
        }
        if xi == xj && xi == x && yi.min(yj) <= y && y <= yi.max(yj) {
            return true;
        }
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::new([
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap()
    }

    fn hexagon() -> Polygon {
        Polygon::new([
            Point::new(4.0, 0.0),
            Point::new(8.0, 2.0),
            Point::new(8.0, 6.0),
            Point::new(4.0, 8.0),
            Point::new(0.0, 6.0),
            Point::new(0.0, 2.0),
        ])
        .unwrap()
    }

    fn triangle() -> Polygon {
        Polygon::new([
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_fewer_than_three_vertices() {
        let err = Polygon::new([Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap_err();
        assert_eq!(err, PolygonError::TooFewVertices { count: 2 });
        assert!(Polygon::new([]).is_err());
    }

    #[test]
    fn copies_vertices_on_construction() {
        let mut source = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        let polygon = Polygon::new(source.clone()).unwrap();
        source[0] = Point::new(99.0, 99.0);
        assert_eq!(polygon.vertices()[0], Point::new(0.0, 0.0));
        assert_eq!(polygon.iter().count(), 3);
    }

    #[test]
    fn interior_points_are_inside() {
        let square = square();
        for point in [(5.0, 5.0), (0.5, 0.5), (9.5, 9.5), (1.0, 8.0)] {
            assert!(point_in_polygon(point.into(), &square), "{point:?}");
        }

        let hexagon = hexagon();
        for point in [(4.0, 4.0), (1.0, 3.0), (7.0, 5.0), (4.0, 1.0)] {
            assert!(point_in_polygon(point.into(), &hexagon), "{point:?}");
        }
    }

    #[test]
    fn points_outside_bounding_box_are_outside() {
        let square = square();
        for point in [(-1.0, 5.0), (11.0, 5.0), (5.0, -0.1), (5.0, 10.1), (20.0, 20.0)] {
            assert!(!point_in_polygon(point.into(), &square), "{point:?}");
        }

        let hexagon = hexagon();
        for point in [(-0.5, 4.0), (9.0, 4.0), (4.0, -1.0), (4.0, 9.0)] {
            assert!(!point_in_polygon(point.into(), &hexagon), "{point:?}");
        }
    }

    #[test]
    fn corner_cut_points_are_outside() {
        // Inside the hexagon's bounding box but beyond a slanted edge.
        assert!(!point_in_polygon(Point::new(0.5, 0.5), &hexagon()));
        assert!(!point_in_polygon(Point::new(7.5, 7.5), &hexagon()));
    }

    #[test]
    fn every_vertex_is_inside() {
        for polygon in [square(), hexagon(), triangle()] {
            for vertex in &polygon {
                assert!(point_in_polygon(*vertex, &polygon), "{vertex:?}");
            }
        }
    }

    #[test]
    fn axis_aligned_edge_midpoints_are_inside() {
        let square = square();
        assert!(point_in_polygon(Point::new(5.0, 0.0), &square));
        assert!(point_in_polygon(Point::new(5.0, 10.0), &square));
        assert!(point_in_polygon(Point::new(0.0, 5.0), &square));
        assert!(point_in_polygon(Point::new(10.0, 5.0), &square));

        let hexagon = hexagon();
        assert!(point_in_polygon(Point::new(8.0, 4.0), &hexagon));
        assert!(point_in_polygon(Point::new(0.0, 4.0), &hexagon));
    }

    #[test]
    fn slanted_edge_point_is_inside() {
        // (6, 1) sits exactly on the hexagon edge from (4, 0) to (8, 2).
        assert!(point_in_polygon(Point::new(6.0, 1.0), &hexagon()));
    }

    #[test]
    fn concave_notch_is_outside() {
        // U shape opening downwards.
        let u_shape = Polygon::new([
            Point::new(0.0, 0.0),
            Point::new(9.0, 0.0),
            Point::new(9.0, 9.0),
            Point::new(6.0, 9.0),
            Point::new(6.0, 3.0),
            Point::new(3.0, 3.0),
            Point::new(3.0, 9.0),
            Point::new(0.0, 9.0),
        ])
        .unwrap();

        assert!(!point_in_polygon(Point::new(4.5, 6.0), &u_shape));
        assert!(point_in_polygon(Point::new(1.5, 6.0), &u_shape));
        assert!(point_in_polygon(Point::new(7.5, 6.0), &u_shape));
        assert!(point_in_polygon(Point::new(4.5, 1.5), &u_shape));
    }

    #[test]
    fn envelope_spans_all_vertices() {
        let envelope = hexagon().envelope();
        assert_eq!(envelope.min, Point::new(0.0, 0.0));
        assert_eq!(envelope.max, Point::new(8.0, 8.0));
    }

    #[test]
    fn deserializes_from_vertex_list() {
        let polygon: Polygon =
            serde_json::from_str(r#"[{"x":0.0,"y":0.0},{"x":2.0,"y":0.0},{"x":0.0,"y":2.0}]"#)
                .unwrap();
        assert_eq!(polygon.vertices().len(), 3);

        let too_small: Result<Polygon, _> = serde_json::from_str(r#"[{"x":0.0,"y":0.0}]"#);
        assert!(too_small.is_err());
    }
}
