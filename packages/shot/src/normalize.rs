//! Canonicalizes raw shot tables into [`ShotRow`]s.

use shot_chart_shot_models::{ColumnMapping, LogicalField, ShotResult, ShotRow};

use crate::{ShotError, ShotTable};

/// Tokens accepted as a made shot (after trimming and lower-casing).
const MAKE_TOKENS: &[&str] = &["make", "made", "hit", "true", "t", "1", "yes", "y"];

/// Tokens accepted as a missed shot (after trimming and lower-casing).
const MISS_TOKENS: &[&str] = &["miss", "missed", "false", "f", "0", "no", "n"];

/// Converts a make/miss representation into a [`ShotResult`].
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Errors
///
/// Returns [`ShotError::UnrecognizedResult`] carrying the original value if
/// it is in neither vocabulary.
pub fn normalize_result(raw: &str) -> Result<ShotResult, ShotError> {
    let token = raw.trim().to_lowercase();

    if MAKE_TOKENS.contains(&token.as_str()) {
        Ok(ShotResult::Make)
    } else if MISS_TOKENS.contains(&token.as_str()) {
        Ok(ShotResult::Miss)
    } else {
        Err(ShotError::UnrecognizedResult {
            value: raw.to_string(),
        })
    }
}

/// Renames and validates the columns of `table` according to `mapping`.
///
/// Columns not named by the mapping are dropped. Empty optional cells
/// become `None`. Returned rows are unclassified.
///
/// # Errors
///
/// * [`ShotError::MissingMapping`] if `x`, `y` or `result` is unmapped
/// * [`ShotError::ColumnNotFound`] if a mapped column is not in the table
/// * [`ShotError::NonNumeric`] if a coordinate is not a finite number, or a
///   period is not an integer
/// * [`ShotError::UnrecognizedResult`] for the first bad result cell
pub fn normalize_columns(
    table: &ShotTable,
    mapping: &ColumnMapping,
) -> Result<Vec<ShotRow>, ShotError> {
    let missing: Vec<LogicalField> = LogicalField::REQUIRED
        .iter()
        .filter(|field| !mapping.contains_key(*field))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(ShotError::MissingMapping { fields: missing });
    }

    let mut indices = std::collections::BTreeMap::new();
    for (field, source) in mapping {
        let index = table
            .column_index(source)
            .ok_or_else(|| ShotError::ColumnNotFound {
                column: source.clone(),
            })?;
        indices.insert(*field, index);
    }

    let xs = parse_coordinates(table, indices[&LogicalField::X], LogicalField::X)?;
    let ys = parse_coordinates(table, indices[&LogicalField::Y], LogicalField::Y)?;
    let results = table
        .column(indices[&LogicalField::Result])
        .map(normalize_result)
        .collect::<Result<Vec<_>, _>>()?;
    let players: Vec<Option<String>> = indices.get(&LogicalField::Player).map_or_else(
        || vec![None; table.len()],
        |&index| {
            table
                .column(index)
                .map(|cell| non_empty(cell).map(str::to_string))
                .collect()
        },
    );
    let periods = match indices.get(&LogicalField::Period) {
        Some(&index) => parse_periods(table, index)?,
        None => vec![None; table.len()],
    };

    let rows: Vec<ShotRow> = xs
        .into_iter()
        .zip(ys)
        .zip(results)
        .zip(players)
        .zip(periods)
        .map(|((((x, y), result), player), period)| ShotRow {
            x,
            y,
            result,
            zone: None,
            player,
            period,
        })
        .collect();

    log::debug!(
        "Normalized {} rows from {} mapped columns",
        rows.len(),
        mapping.len()
    );

    Ok(rows)
}

fn parse_coordinates(
    table: &ShotTable,
    index: usize,
    field: LogicalField,
) -> Result<Vec<f64>, ShotError> {
    table
        .column(index)
        .map(|cell| {
            cell.trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ShotError::NonNumeric {
                    column: field.to_string(),
                })
        })
        .collect()
}

fn parse_periods(table: &ShotTable, index: usize) -> Result<Vec<Option<i64>>, ShotError> {
    table
        .column(index)
        .map(|cell| {
            non_empty(cell)
                .map(|value| {
                    value.parse::<i64>().map_err(|_| ShotError::NonNumeric {
                        column: LogicalField::Period.to_string(),
                    })
                })
                .transpose()
        })
        .collect()
}

fn non_empty(cell: &str) -> Option<&str> {
    let trimmed = cell.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
