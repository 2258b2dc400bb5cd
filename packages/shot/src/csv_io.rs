//! CSV import and export.
//!
//! Imports produce an untyped [`ShotTable`] that still needs a column
//! mapping. Exports always use the canonical header
//! `x,y,result,zone,player,period`, which [`read_shot_rows`] reads back
//! directly.

use std::io::{Read, Write};
use std::path::Path;

use shot_chart_shot_models::ShotRow;

use crate::{ShotError, ShotTable};

/// Header of every exported CSV.
pub const CSV_HEADER: [&str; 6] = ["x", "y", "result", "zone", "player", "period"];

/// Parses a CSV with a header row into a [`ShotTable`].
///
/// Header names are trimmed; cells are kept verbatim.
///
/// # Errors
///
/// Returns [`ShotError::EmptyCsv`] if there are no data rows, or
/// [`ShotError::Csv`] if the input is not valid CSV.
pub fn read_csv(reader: impl Read) -> Result<ShotTable, ShotError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    let records = reader
        .records()
        .map(|record| Ok(record?.iter().map(str::to_owned).collect::<Vec<_>>()))
        .collect::<Result<Vec<_>, csv::Error>>()?;

    if headers.is_empty() || records.is_empty() {
        return Err(ShotError::EmptyCsv);
    }

    log::info!(
        "Parsed {} records with {} columns from CSV",
        records.len(),
        headers.len()
    );

    Ok(ShotTable::new(headers, records))
}

/// Reads a CSV file into a [`ShotTable`].
///
/// # Errors
///
/// Returns [`ShotError::Io`] if the file cannot be opened, plus everything
/// [`read_csv`] can return.
pub fn read_csv_path(path: impl AsRef<Path>) -> Result<ShotTable, ShotError> {
    let file = std::fs::File::open(path.as_ref())?;
    read_csv(std::io::BufReader::new(file))
}

/// Reads rows previously written by [`write_csv`].
///
/// # Errors
///
/// Returns [`ShotError::Csv`] if a row does not match the canonical schema.
pub fn read_shot_rows(reader: impl Read) -> Result<Vec<ShotRow>, ShotError> {
    let mut reader = csv::Reader::from_reader(reader);
    let rows = reader
        .deserialize::<ShotRow>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Writes `rows` as UTF-8 CSV with the canonical header.
///
/// # Errors
///
/// Returns [`ShotError::Csv`] if serialization fails or
/// [`ShotError::Io`] if flushing the writer fails.
pub fn write_csv(rows: &[ShotRow], writer: impl Write) -> Result<(), ShotError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Serializes `rows` into CSV bytes.
///
/// # Errors
///
/// Returns [`ShotError::Csv`] if serialization fails.
pub fn to_csv_bytes(rows: &[ShotRow]) -> Result<Vec<u8>, ShotError> {
    let mut bytes = Vec::new();
    write_csv(rows, &mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shot_chart_shot_models::ShotResult;

    #[test]
    fn reads_headers_and_records() {
        let table = read_csv(" sx ,sy,res\n1,2,make\n3,4,miss\n".as_bytes()).unwrap();
        assert_eq!(table.headers(), ["sx", "sy", "res"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1], ["3", "4", "miss"]);
    }

    #[test]
    fn rejects_header_only_csv() {
        assert!(matches!(
            read_csv("x,y,result\n".as_bytes()).unwrap_err(),
            ShotError::EmptyCsv
        ));
        assert!(matches!(
            read_csv("".as_bytes()).unwrap_err(),
            ShotError::EmptyCsv
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_csv_path(dir.path().join("nope.csv")).unwrap_err(),
            ShotError::Io(_)
        ));
    }

    #[test]
    fn writes_canonical_header_and_upper_case_results() {
        let mut row = ShotRow::new(300.0, 100.0, ShotResult::Make);
        row.zone = Some("PAINT".to_string());
        row.player = Some("Alice".to_string());
        row.period = Some(2);
        let miss = ShotRow::new(10.5, 490.0, ShotResult::Miss);

        let text = String::from_utf8(to_csv_bytes(&[row, miss]).unwrap()).unwrap();
        assert_eq!(
            text,
            "x,y,result,zone,player,period\n300.0,100.0,MAKE,PAINT,Alice,2\n10.5,490.0,MISS,,,\n"
        );
    }

    #[test]
    fn empty_export_still_has_header() {
        let text = String::from_utf8(to_csv_bytes(&[]).unwrap()).unwrap();
        assert_eq!(text, "x,y,result,zone,player,period\n");
    }

    #[test]
    fn exported_rows_read_back() {
        let mut row = ShotRow::new(1.0, 2.0, ShotResult::Miss);
        row.zone = Some("3PT_CORNER".to_string());
        let rows = vec![row, ShotRow::new(3.0, 4.0, ShotResult::Make)];

        let bytes = to_csv_bytes(&rows).unwrap();
        assert_eq!(read_shot_rows(bytes.as_slice()).unwrap(), rows);
    }

    #[test]
    fn file_round_trip_through_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shots.csv");
        std::fs::write(&path, "shot_x,shot_y,flag\n5,6,hit\n").unwrap();

        let table = read_csv_path(&path).unwrap();
        assert_eq!(table.column_index("flag"), Some(2));
    }
}
