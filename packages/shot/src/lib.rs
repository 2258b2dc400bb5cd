#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shot data import, normalization, classification, and aggregation.
//!
//! Raw CSV tables arrive with arbitrary column names. A [`ColumnMapping`]
//! tells [`normalize_columns`] which source columns hold the coordinates,
//! the outcome and the optional player/period, producing canonical
//! [`ShotRow`]s. [`classify_rows`] then attaches a zone label to every row,
//! and the [`summary`] and [`tally`] modules aggregate make/miss counts.
//!
//! Every fallible operation is all-or-nothing: a single bad cell rejects
//! the whole table and leaves the input untouched.

pub mod classify;
pub mod csv_io;
pub mod normalize;
pub mod progress;
pub mod session;
pub mod summary;
pub mod table;
pub mod tally;

use shot_chart_shot_models::LogicalField;
use thiserror::Error;

pub use classify::{classify_rows, classify_rows_indexed};
pub use csv_io::{read_csv, read_csv_path, read_shot_rows, to_csv_bytes, write_csv};
pub use normalize::{normalize_columns, normalize_result};
pub use session::ShotLog;
pub use shot_chart_shot_models::{
    ColumnMapping, ShotResult, ShotRow, TallySummaryRow, ZoneSummary,
};
pub use summary::{FilterOptions, ShotFilter, summarize_by_zone};
pub use table::{ShotTable, demo_mapping, demo_table};
pub use tally::{ManualTally, TALLY_LABELS};

/// Errors that can occur while importing or normalizing shot data.
#[derive(Debug, Error)]
pub enum ShotError {
    /// Required logical fields have no source column.
    #[error("Missing mappings for: {}.", join_fields(fields))]
    MissingMapping {
        /// The unmapped required fields, in canonical order.
        fields: Vec<LogicalField>,
    },

    /// A mapped source column does not exist in the table.
    #[error("Source column '{column}' not found in the imported data.")]
    ColumnNotFound {
        /// The missing source column name.
        column: String,
    },

    /// A numeric column holds a value that is not a finite number.
    #[error("Column '{column}' contains non-numeric values after conversion.")]
    NonNumeric {
        /// Logical column name (`x`, `y` or `period`).
        column: String,
    },

    /// A result cell matches neither the make nor the miss vocabulary.
    #[error("Result value '{value}' is not recognised as make or miss.")]
    UnrecognizedResult {
        /// The offending value as it appeared in the source.
        value: String,
    },

    /// The CSV has a header but no data rows, or nothing at all.
    #[error("CSV is empty. Add shot records before importing.")]
    EmptyCsv,

    /// CSV parsing or serialization failed.
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A manual tally label is not one of [`TALLY_LABELS`].
    #[error("Unknown zone '{label}'.")]
    UnknownTallyLabel {
        /// The rejected label.
        label: String,
    },
}

fn join_fields(fields: &[LogicalField]) -> String {
    fields
        .iter()
        .map(|field| field.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shot_chart_shot_models::LogicalField;
    use shot_chart_zone::{default_zone_set, scale_zone_set};

    #[test]
    fn csv_import_to_zone_summary() {
        let csv = "sx,sy,res,who\n300,100,Make,Alice\n10,400,0,Bob\n300,490,yes,Alice\n";
        let table = read_csv(csv.as_bytes()).unwrap();
        let mapping = ColumnMapping::from([
            (LogicalField::X, "sx".to_string()),
            (LogicalField::Y, "sy".to_string()),
            (LogicalField::Result, "res".to_string()),
            (LogicalField::Player, "who".to_string()),
        ]);

        let rows = normalize_columns(&table, &mapping).unwrap();
        let zones = scale_zone_set(&default_zone_set(), 600.0, 500.0).unwrap();
        let classified = classify_rows(&rows, &zones);

        let exported = String::from_utf8(to_csv_bytes(&classified).unwrap()).unwrap();
        assert_eq!(
            exported,
            "x,y,result,zone,player,period\n\
             300.0,100.0,MAKE,PAINT,Alice,\n\
             10.0,400.0,MISS,3PT_CORNER,Bob,\n\
             300.0,490.0,MAKE,UNKNOWN,Alice,\n"
        );

        let summary = summarize_by_zone(&classified);
        assert_eq!(summary.len(), 3);
        assert!(summary.iter().all(|s| s.attempts == 1));
    }

    #[test]
    fn demo_data_classifies() {
        let rows = normalize_columns(&demo_table(), &demo_mapping()).unwrap();
        let zones = scale_zone_set(&default_zone_set(), 600.0, 500.0).unwrap();
        let classified = classify_rows(&rows, &zones);

        let zones: Vec<&str> = classified
            .iter()
            .filter_map(|row| row.zone.as_deref())
            .collect();
        assert_eq!(zones, ["MIDRANGE", "MIDRANGE", "PAINT", "UNKNOWN", "UNKNOWN"]);
    }
}
