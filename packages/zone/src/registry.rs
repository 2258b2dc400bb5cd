//! Zone set definitions.
//!
//! The default half-court zone set is a TOML file embedded at compile time.
//! Callers can also supply their own definition file with the same schema.

use std::path::Path;

use shot_chart_zone_models::ZoneSetDefinition;

use crate::ZoneError;

/// Embedded TOML for the default half-court zone set.
const HALF_COURT_TOML: &str = include_str!("../zones/half_court.toml");

/// Returns the default half-court zone set.
///
/// # Panics
///
/// Panics if the embedded TOML fails to parse. It is a compile-time
/// constant, so a parse failure is a development error caught by tests.
#[must_use]
pub fn default_zone_set() -> ZoneSetDefinition {
    parse_zone_set(HALF_COURT_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse embedded zone set 'half_court': {e}"))
}

/// Parses a zone set definition from TOML.
///
/// # Errors
///
/// Returns [`ZoneError::Toml`] if the document does not match the zone set
/// schema.
pub fn parse_zone_set(toml_str: &str) -> Result<ZoneSetDefinition, ZoneError> {
    Ok(toml::de::from_str(toml_str)?)
}

/// Reads and parses a zone set definition file.
///
/// # Errors
///
/// Returns [`ZoneError::Io`] if the file cannot be read or
/// [`ZoneError::Toml`] if it is not a valid zone set.
pub fn load_zone_set_file(path: impl AsRef<Path>) -> Result<ZoneSetDefinition, ZoneError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let definition = parse_zone_set(&contents)?;
    log::debug!(
        "Parsed zone set '{}' ({} zones) from {}",
        definition.id,
        definition.zones.len(),
        path.display()
    );
    Ok(definition)
}
