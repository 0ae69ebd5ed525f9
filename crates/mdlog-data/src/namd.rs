//! Parser for NAMD log files.
//!
//! Reads the `ETITLE:` header once to learn the column titles, then turns
//! every `ENERGY:` record into one value per column, transposed into
//! per-column time series.

use std::io::BufRead;
use std::path::Path;

use mdlog_core::error::{MdlogError, Result};
use mdlog_core::series::{SeriesTable, Value};

/// Human-readable dialect name used in errors and diagnostics.
pub const FILETYPE: &str = "NAMD log";

/// Line prefix introducing the column titles.
const TITLE_TAG: &str = "ETITLE:";
/// Line prefix introducing one per-frame record.
const RECORD_TAG: &str = "ENERGY:";

/// Parse one NAMD log stream into per-column series.
///
/// Every record line must carry exactly one value per column title; a
/// mismatched or unparseable record is fatal and reports its 1-based line
/// number in the file.
pub fn parse<R: BufRead>(reader: R, path: &Path) -> Result<SeriesTable> {
    let mut lines = reader.lines().enumerate();

    // The first ETITLE: line names the columns, read exactly once.
    let mut titles: Vec<String> = Vec::new();
    for (_, line) in &mut lines {
        let line = line.map_err(|source| file_read(path, source))?;
        if line.starts_with(TITLE_TAG) {
            titles = line
                .split_whitespace()
                .skip(1)
                .map(str::to_string)
                .collect();
            break;
        }
    }
    if titles.is_empty() {
        return Err(malformed(path, "no energy items found".to_string()));
    }

    let mut records: Vec<Vec<Value>> = Vec::new();
    for (index, line) in lines {
        let line = line.map_err(|source| file_read(path, source))?;
        if !line.starts_with(RECORD_TAG) {
            continue;
        }
        let lineno = index + 1;

        let mut values = Vec::with_capacity(titles.len());
        for token in line.split_whitespace().skip(1) {
            match Value::parse(token) {
                Some(value) => values.push(value),
                None => {
                    return Err(malformed(
                        path,
                        format!("unparseable value '{}' at line {}", token, lineno),
                    ));
                }
            }
        }
        if values.len() != titles.len() {
            return Err(malformed(
                path,
                format!(
                    "record at line {} has {} values, expected {}",
                    lineno,
                    values.len(),
                    titles.len()
                ),
            ));
        }
        records.push(values);
    }

    // Transpose row-major records into column-major series.
    let mut table = SeriesTable::new();
    for (column, title) in titles.iter().enumerate() {
        for record in &records {
            table.push(title, record[column]);
        }
    }
    Ok(table)
}

fn file_read(path: &Path, source: std::io::Error) -> MdlogError {
    MdlogError::FileRead {
        path: path.to_path_buf(),
        source,
    }
}

fn malformed(path: &Path, reason: String) -> MdlogError {
    MdlogError::MalformedInput {
        dialect: FILETYPE,
        path: path.to_path_buf(),
        reason,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(text: &str) -> Result<SeriesTable> {
        parse(text.as_bytes(), Path::new("test.log"))
    }

    #[test]
    fn test_parses_header_and_records() {
        let text = "ETITLE: TS BOND ANGLE\nENERGY: 0 1.0 2.0\nENERGY: 1 1.5 2.5\n";
        let table = parse_str(text).unwrap();
        assert_eq!(table.get("TS"), Some(&[Value::Int(0), Value::Int(1)][..]));
        assert_eq!(
            table.get("BOND"),
            Some(&[Value::Real(1.0), Value::Real(1.5)][..])
        );
        assert_eq!(
            table.get("ANGLE"),
            Some(&[Value::Real(2.0), Value::Real(2.5)][..])
        );
    }

    #[test]
    fn test_key_order_matches_title_order() {
        let text = "ETITLE: TS BOND ANGLE DIHED\nENERGY: 0 1.0 2.0 3.0\n";
        let table = parse_str(text).unwrap();
        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["TS", "BOND", "ANGLE", "DIHED"]);
    }

    #[test]
    fn test_every_column_has_one_value_per_record() {
        let text = "\
ETITLE: TS BOND ANGLE
ENERGY: 0 1.0 2.0
ENERGY: 100 1.1 2.1
ENERGY: 200 1.2 2.2
";
        let table = parse_str(text).unwrap();
        for (_, series) in table.iter() {
            assert_eq!(series.len(), 3);
        }
        // table[col][i] is the i-th record's value at that column.
        assert_eq!(table.get("ANGLE").unwrap()[2], Value::Real(2.2));
    }

    #[test]
    fn test_noise_lines_are_ignored() {
        let text = "\
Info: NAMD 2.14 for Linux-x86_64
Info: TIMESTEP 2
ETITLE: TS BOND
Info: Benchmark time: 1 CPUs
ENERGY: 0 1.0
TCL: Running for 500 steps
ENERGY: 1 1.5
";
        let table = parse_str(text).unwrap();
        assert_eq!(table.get("TS").unwrap().len(), 2);
    }

    #[test]
    fn test_missing_header_is_fatal() {
        let text = "Info: NAMD 2.14\nENERGY: 0 1.0\n";
        let err = parse_str(text).unwrap_err();
        assert!(matches!(err, MdlogError::MalformedInput { .. }));
        assert!(err.to_string().contains("no energy items found"));
    }

    #[test]
    fn test_short_record_reports_file_line_number() {
        let text = "\
Info: preamble
ETITLE: TS BOND ANGLE
ENERGY: 0 1.0 2.0
ENERGY: 1 1.5
";
        let err = parse_str(text).unwrap_err();
        assert!(matches!(err, MdlogError::MalformedInput { .. }));
        let msg = err.to_string();
        assert!(msg.contains("line 4"), "unexpected message: {}", msg);
        assert!(msg.contains("has 2 values, expected 3"));
    }

    #[test]
    fn test_long_record_is_fatal() {
        let text = "ETITLE: TS BOND\nENERGY: 0 1.0 9.9\n";
        assert!(parse_str(text).is_err());
    }

    #[test]
    fn test_unparseable_token_is_fatal() {
        let text = "ETITLE: TS BOND\nENERGY: 0 abc\n";
        let err = parse_str(text).unwrap_err();
        assert!(err.to_string().contains("unparseable value 'abc' at line 2"));
    }

    #[test]
    fn test_header_without_records_yields_empty_table() {
        let text = "ETITLE: TS BOND ANGLE\nInfo: no frames written\n";
        let table = parse_str(text).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_second_header_line_is_ignored() {
        let text = "\
ETITLE: TS BOND
ENERGY: 0 1.0
ETITLE: TS BOND ANGLE
ENERGY: 1 1.5
";
        let table = parse_str(text).unwrap();
        assert_eq!(table.get("TS").unwrap().len(), 2);
        assert_eq!(table.get("ANGLE"), None);
    }

    #[test]
    fn test_per_value_type_inference_in_records() {
        let text = "ETITLE: TS BOND ANGLE\nENERGY: 5 2 3.5\n";
        let table = parse_str(text).unwrap();
        assert_eq!(table.get("BOND"), Some(&[Value::Int(2)][..]));
        assert_eq!(table.get("ANGLE"), Some(&[Value::Real(3.5)][..]));
    }
}
