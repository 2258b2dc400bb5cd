//! Attaches zone labels to normalized shot rows.

use shot_chart_shot_models::ShotRow;
use shot_chart_zone::{Zone, ZoneIndex, classify_point};

use crate::progress::ProgressCallback;

/// Returns a copy of `rows` with every `zone` set to the first matching
/// zone's name, or `UNKNOWN`.
///
/// Any existing zone label is overwritten.
#[must_use]
pub fn classify_rows(rows: &[ShotRow], zones: &[Zone]) -> Vec<ShotRow> {
    rows.iter()
        .map(|row| ShotRow {
            zone: Some(classify_point(row.x, row.y, zones)),
            ..row.clone()
        })
        .collect()
}

/// Same result as [`classify_rows`], looking zones up through a prebuilt
/// [`ZoneIndex`] and reporting one unit of progress per row.
#[must_use]
pub fn classify_rows_indexed(
    rows: &[ShotRow],
    index: &ZoneIndex,
    progress: &dyn ProgressCallback,
) -> Vec<ShotRow> {
    progress.set_total(rows.len() as u64);
    progress.set_message("Classifying shots".to_string());

    let classified: Vec<ShotRow> = rows
        .iter()
        .map(|row| {
            let zone = index.classify(row.x, row.y);
            progress.inc(1);
            ShotRow {
                zone: Some(zone),
                ..row.clone()
            }
        })
        .collect();

    progress.finish(format!("Classified {} shots", classified.len()));
    classified
}
