use crate::geojson::parse_shape;
use crate::MyError;

use serde::Serialize;
use serde_json::Value;

use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 3] = ["uuid", "old_geojson", "new_geojson"];

#[derive(Debug, Serialize, PartialEq)]
pub struct Record {
    pub uuid: String,
    #[serde(rename = "oldGeojson")]
    pub old_geojson: Option<Value>,
    #[serde(rename = "newGeojson")]
    pub new_geojson: Option<Value>,
}

// Substring containment, not exact column identity. Reordered or
// additional columns pass as well.
pub fn header_is_valid(header: &str) -> bool {
    REQUIRED_COLUMNS.iter().all(|name| header.contains(name))
}

pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}

// The file is re-read on every call. First matching row wins.
pub fn lookup_record<P: AsRef<Path>>(csv_path: P, uuid: &str) -> Result<Record, MyError> {
    let csv_path = csv_path.as_ref();
    if !csv_path.is_file() {
        return Err(MyError::DataSourceMissing);
    }

    let content = std::fs::read_to_string(csv_path)?;
    let mut lines = content.lines();

    let header = lines.next().unwrap_or("");
    if !header_is_valid(header) {
        return Err(MyError::MalformedHeader);
    }

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let columns = parse_csv_line(line);
        if columns.len() >= 3 && columns[0] == uuid {
            return Ok(Record {
                uuid: uuid.to_owned(),
                old_geojson: parse_shape("old_geojson", &columns[1])?,
                new_geojson: parse_shape("new_geojson", &columns[2])?,
            });
        }
    }

    Err(MyError::UuidNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SHAPES_CSV: &str = "./src/test_data/shapes.csv";

    #[test]
    fn test_plain_line_splits_on_commas() {
        assert_eq!(vec!["a", "b", "c"], parse_csv_line("a,b,c"));
    }

    #[test]
    fn test_quoted_separator_is_preserved() {
        assert_eq!(vec!["a,b", "c"], parse_csv_line("\"a,b\",c"));
    }

    #[test]
    fn test_doubled_quote_becomes_literal_quote() {
        assert_eq!(vec!["a\"b", "c"], parse_csv_line("\"a\"\"b\",c"));
    }

    #[test]
    fn test_trailing_empty_field_is_emitted() {
        assert_eq!(vec!["a", "b", ""], parse_csv_line("a,b,"));
    }

    #[test]
    fn test_empty_line_is_one_empty_field() {
        assert_eq!(vec![""], parse_csv_line(""));
    }

    #[test]
    fn test_lookup_with_one_empty_column() {
        let record = lookup_record(SHAPES_CSV, "id1").unwrap();

        assert_eq!("id1", record.uuid);
        assert_eq!(
            Some(json!({"type": "Point", "coordinates": [77.2, 28.6]})),
            record.old_geojson
        );
        assert_eq!(None, record.new_geojson);
    }

    #[test]
    fn test_lookup_with_both_columns() {
        let record = lookup_record(SHAPES_CSV, "id3").unwrap();

        assert!(record.old_geojson.is_none());
        assert_eq!(
            Some(json!({"type": "Point", "coordinates": [88.3, 22.5]})),
            record.new_geojson
        );
    }

    #[test]
    fn test_first_matching_row_wins() {
        // shapes.csv contains a second id2 row with different coordinates
        let record = lookup_record(SHAPES_CSV, "id2").unwrap();

        assert_eq!(
            Some(json!({"type": "Point", "coordinates": [72.8, 19.0]})),
            record.old_geojson
        );
    }

    #[test]
    fn test_embedded_comma_in_payload() {
        let record = lookup_record(SHAPES_CSV, "quoted").unwrap();

        assert_eq!(
            Some(json!({"type": "Point", "coordinates": [10.0, 10.0]})),
            record.old_geojson
        );
    }

    #[test]
    fn test_unknown_uuid_is_not_found() {
        match lookup_record(SHAPES_CSV, "missing-id") {
            Err(MyError::UuidNotFound) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_short_row_is_ignored() {
        match lookup_record(SHAPES_CSV, "short-row") {
            Err(MyError::UuidNotFound) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        match lookup_record("./src/test_data/does_not_exist.csv", "id1") {
            Err(MyError::DataSourceMissing) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_header_column() {
        match lookup_record("./src/test_data/missing_column.csv", "id1") {
            Err(MyError::MalformedHeader) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_broken_payload_names_its_column() {
        match lookup_record("./src/test_data/bad_payload.csv", "broken-old") {
            Err(MyError::MalformedPayload { column, .. }) => assert_eq!("old_geojson", column),
            other => panic!("unexpected result: {:?}", other),
        }

        match lookup_record("./src/test_data/bad_payload.csv", "broken-new") {
            Err(MyError::MalformedPayload { column, .. }) => assert_eq!("new_geojson", column),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let first = lookup_record(SHAPES_CSV, "id2").unwrap();
        let second = lookup_record(SHAPES_CSV, "id2").unwrap();

        assert_eq!(first, second);
    }
}
