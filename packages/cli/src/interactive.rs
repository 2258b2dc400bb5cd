//! Prompts for column mappings the command line left out.

use dialoguer::Select;
use shot_chart_shot::{ColumnMapping, ShotTable};
use shot_chart_shot_models::LogicalField;

/// Label for "leave this optional field unmapped".
const NONE_LABEL: &str = "(none)";

/// Asks the user to pick a source column for every unmapped field.
///
/// Required fields must be mapped; optional ones may be skipped. Columns
/// already in `mapping` are kept as-is.
///
/// # Errors
///
/// Returns an error if the terminal prompt fails.
pub fn complete_mapping(
    table: &ShotTable,
    mut mapping: ColumnMapping,
) -> Result<ColumnMapping, dialoguer::Error> {
    let headers: Vec<&str> = table.headers().iter().map(String::as_str).collect();

    for &field in LogicalField::REQUIRED {
        if mapping.contains_key(&field) {
            continue;
        }
        let idx = Select::new()
            .with_prompt(format!("Column for `{field}`"))
            .items(&headers)
            .default(0)
            .interact()?;
        mapping.insert(field, headers[idx].to_string());
    }

    let mut optional_items = vec![NONE_LABEL];
    optional_items.extend(headers.iter().copied());

    for &field in LogicalField::OPTIONAL {
        if mapping.contains_key(&field) {
            continue;
        }
        let idx = Select::new()
            .with_prompt(format!("Column for `{field}` (optional)"))
            .items(&optional_items)
            .default(0)
            .interact()?;
        if idx > 0 {
            mapping.insert(field, optional_items[idx].to_string());
        }
    }

    log::debug!("Completed column mapping: {mapping:?}");
    Ok(mapping)
}
