#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Court scoring zones and shot location classification.
//!
//! Zone sets are defined as TOML templates whose vertices are ratios of the
//! court image size (see [`registry`]). Loading a zone set reads the pixel
//! dimensions of the reference court image and scales every template into
//! absolute pixel polygons. Classification walks the zones in order and
//! returns the first match, or [`UNKNOWN_ZONE`] when nothing contains the
//! point.

pub mod index;
pub mod registry;

use std::path::{Path, PathBuf};

use shot_chart_geometry::{Point, Polygon, PolygonError, point_in_polygon};
use thiserror::Error;

pub use index::ZoneIndex;
pub use registry::{default_zone_set, load_zone_set_file, parse_zone_set};
pub use shot_chart_zone_models::{
    MIDRANGE, PAINT, THREE_PT_ABOVE_BREAK, THREE_PT_CORNER, UNKNOWN_ZONE, Zone,
    ZoneSetDefinition, ZoneTemplate,
};

/// File name the court image is expected to have by default.
pub const DEFAULT_COURT_IMAGE: &str = "court.png";

/// Errors that can occur while building zones.
#[derive(Debug, Error)]
pub enum ZoneError {
    /// The reference court image does not exist.
    #[error("Court image not found at {}. Place court.png at that path or pass another image.", path.display())]
    MissingAsset {
        /// Path that was expected to hold the image.
        path: PathBuf,
    },

    /// The court image exists but its dimensions could not be read.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Reading a zone set file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A zone set definition is not valid TOML for the expected schema.
    #[error("Zone set parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A template produced an invalid polygon.
    #[error("Zone '{name}' is invalid: {source}")]
    Polygon {
        /// Label of the offending template.
        name: String,
        /// Underlying geometry error.
        source: PolygonError,
    },
}

/// Loads the default half-court zones scaled to the image at `image_path`.
///
/// Zones come back in precedence order: `PAINT`, `MIDRANGE`, left
/// `3PT_CORNER`, right `3PT_CORNER`, `3PT_ABOVE_BREAK`.
///
/// # Errors
///
/// Returns [`ZoneError::MissingAsset`] if the image does not exist, or
/// [`ZoneError::Image`] if its dimensions cannot be read.
pub fn load_default_zones(image_path: impl AsRef<Path>) -> Result<Vec<Zone>, ZoneError> {
    load_zones(image_path, &default_zone_set())
}

/// Loads `definition` scaled to the image at `image_path`.
///
/// # Errors
///
/// Returns [`ZoneError::MissingAsset`] if the image does not exist,
/// [`ZoneError::Image`] if its dimensions cannot be read, or
/// [`ZoneError::Polygon`] if a template has fewer than three vertices.
pub fn load_zones(
    image_path: impl AsRef<Path>,
    definition: &ZoneSetDefinition,
) -> Result<Vec<Zone>, ZoneError> {
    let (width, height) = court_dimensions(image_path.as_ref())?;
    let zones = scale_zone_set(definition, f64::from(width), f64::from(height))?;

    log::info!(
        "Loaded {} zones from '{}' scaled to {width}x{height}",
        zones.len(),
        definition.id
    );

    Ok(zones)
}

/// Reads the pixel width and height of the court image.
///
/// # Errors
///
/// Returns [`ZoneError::MissingAsset`] if the file does not exist, or
/// [`ZoneError::Image`] if it is not a readable image.
pub fn court_dimensions(image_path: &Path) -> Result<(u32, u32), ZoneError> {
    if !image_path.exists() {
        return Err(ZoneError::MissingAsset {
            path: image_path.to_path_buf(),
        });
    }

    let dimensions = image::image_dimensions(image_path)?;
    log::debug!(
        "Court image {} is {}x{}",
        image_path.display(),
        dimensions.0,
        dimensions.1
    );
    Ok(dimensions)
}

/// Scales every template in `definition` to a `width` x `height` image.
///
/// # Errors
///
/// Returns [`ZoneError::Polygon`] if a template has fewer than three
/// vertices.
pub fn scale_zone_set(
    definition: &ZoneSetDefinition,
    width: f64,
    height: f64,
) -> Result<Vec<Zone>, ZoneError> {
    definition
        .zones
        .iter()
        .map(|template| scale_template(template, width, height))
        .collect()
}

fn scale_template(template: &ZoneTemplate, width: f64, height: f64) -> Result<Zone, ZoneError> {
    let polygon = Polygon::new(
        template
            .vertices
            .iter()
            .map(|[x, y]| Point::new(x * width, y * height)),
    )
    .map_err(|source| ZoneError::Polygon {
        name: template.name.clone(),
        source,
    })?;

    Ok(Zone::new(template.name.clone(), polygon))
}

/// Returns the name of the first zone containing `(x, y)`, or
/// [`UNKNOWN_ZONE`] when none does.
#[must_use]
pub fn classify_point<'a>(x: f64, y: f64, zones: impl IntoIterator<Item = &'a Zone>) -> String {
    let point = Point::new(x, y);
    zones
        .into_iter()
        .find(|zone| point_in_polygon(point, &zone.polygon))
        .map_or_else(|| UNKNOWN_ZONE.to_string(), |zone| zone.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 600.0;
    const HEIGHT: f64 = 500.0;

    fn court_zones() -> Vec<Zone> {
        scale_zone_set(&default_zone_set(), WIDTH, HEIGHT).unwrap()
    }

    fn square(name: &str, min: f64, max: f64) -> Zone {
        Zone::new(
            name,
            Polygon::new([
                Point::new(min, min),
                Point::new(max, min),
                Point::new(max, max),
                Point::new(min, max),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn default_zones_come_in_precedence_order() {
        let names: Vec<String> = court_zones().into_iter().map(|z| z.name).collect();
        assert_eq!(
            names,
            [
                PAINT,
                MIDRANGE,
                THREE_PT_CORNER,
                THREE_PT_CORNER,
                THREE_PT_ABOVE_BREAK
            ]
        );
    }

    #[test]
    fn scales_ratios_to_pixels() {
        let zones = court_zones();
        let paint = &zones[0].polygon;
        let expected = [(228.0, 25.0), (372.0, 25.0), (372.0, 190.0), (228.0, 190.0)];
        for (vertex, (x, y)) in paint.iter().zip(expected) {
            assert!((vertex.x - x).abs() < 1e-9, "{vertex:?}");
            assert!((vertex.y - y).abs() < 1e-9, "{vertex:?}");
        }

        let right_corner = &zones[3].polygon;
        assert!((right_corner.vertices()[1].x - 600.0).abs() < 1e-9);
        assert!((right_corner.vertices()[2].y - 470.0).abs() < 1e-9);
    }

    #[test]
    fn classifies_court_locations() {
        let zones = court_zones();
        let cases = [
            ((300.0, 100.0), PAINT),
            ((300.0, 300.0), MIDRANGE),
            ((150.0, 50.0), MIDRANGE),
            ((10.0, 400.0), THREE_PT_CORNER),
            ((560.0, 300.0), THREE_PT_CORNER),
            ((50.0, 50.0), THREE_PT_ABOVE_BREAK),
            ((580.0, 150.0), THREE_PT_ABOVE_BREAK),
            // Below the corners (0.94 * 500 = 470) and beyond midrange
            // (0.75 * 500 = 375).
            ((10.0, 490.0), UNKNOWN_ZONE),
            ((300.0, 490.0), UNKNOWN_ZONE),
        ];

        for ((x, y), expected) in cases {
            assert_eq!(classify_point(x, y, &zones), expected, "({x}, {y})");
        }
    }

    #[test]
    fn paint_wins_over_overlapping_midrange() {
        // (300, 100) is inside both PAINT and MIDRANGE.
        let zones = court_zones();
        assert!(zones[1].polygon.contains(Point::new(300.0, 100.0)));
        assert_eq!(classify_point(300.0, 100.0, &zones), PAINT);
    }

    #[test]
    fn first_listed_zone_wins() {
        let a = square("A", 0.0, 10.0);
        let b = square("B", 5.0, 15.0);

        assert_eq!(classify_point(7.0, 7.0, [&a, &b]), "A");
        assert_eq!(classify_point(7.0, 7.0, [&b, &a]), "B");
        assert_eq!(classify_point(12.0, 12.0, [&a, &b]), "B");
    }

    #[test]
    fn unknown_when_nothing_contains_point() {
        let zones = vec![square("A", 0.0, 10.0), square("B", 20.0, 30.0)];
        assert_eq!(classify_point(15.0, 15.0, &zones), UNKNOWN_ZONE);
        assert_eq!(classify_point(-1.0, 5.0, &zones), UNKNOWN_ZONE);
        assert_eq!(classify_point(0.0, 0.0, &[] as &[Zone]), UNKNOWN_ZONE);
    }

    #[test]
    fn boundary_points_classify_into_zone() {
        let zones = vec![square("A", 0.0, 10.0)];
        assert_eq!(classify_point(10.0, 5.0, &zones), "A");
        assert_eq!(classify_point(0.0, 0.0, &zones), "A");
    }

    #[test]
    fn rejects_degenerate_template() {
        let definition = ZoneSetDefinition {
            id: "bad".to_string(),
            name: "Bad".to_string(),
            zones: vec![ZoneTemplate {
                name: "LINE".to_string(),
                vertices: vec![[0.0, 0.0], [1.0, 1.0]],
            }],
        };

        let err = scale_zone_set(&definition, WIDTH, HEIGHT).unwrap_err();
        assert!(matches!(err, ZoneError::Polygon { ref name, .. } if name == "LINE"));
    }

    #[test]
    fn missing_image_names_expected_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("court.png");

        let err = load_default_zones(&path).unwrap_err();
        assert!(matches!(err, ZoneError::MissingAsset { path: ref p } if *p == path));
        assert!(err.to_string().contains("court.png"));
    }

    #[test]
    fn loads_zones_scaled_to_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("court.png");
        image::RgbImage::new(600, 500).save(&path).unwrap();

        let zones = load_default_zones(&path).unwrap();
        assert_eq!(zones.len(), 5);
        assert_eq!(classify_point(300.0, 100.0, &zones), PAINT);
        assert_eq!(classify_point(10.0, 400.0, &zones), THREE_PT_CORNER);
        assert_eq!(court_dimensions(&path).unwrap(), (600, 500));
    }

    #[test]
    fn unreadable_image_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("court.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(matches!(
            load_default_zones(&path).unwrap_err(),
            ZoneError::Image(_)
        ));
    }
}
