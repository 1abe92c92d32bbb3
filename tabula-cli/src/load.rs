//! Loading records from JSON.

use std::collections::BTreeSet;
use std::path::Path;

use tabula_lib::model::{Record, Value};
use tabula_lib::table::{Alignment, Column};

use crate::error::CliError;

/// Reads a JSON array of objects into records.
pub fn load_records(path: &Path) -> Result<Vec<Record>, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&text)
}

/// Parses a JSON array of objects into records.
pub fn parse_records(text: &str) -> Result<Vec<Record>, CliError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Array(items) = json else {
        return Err(CliError::NotAnArray);
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Record::from_json(item).ok_or(CliError::BadRecord { index }))
        .collect()
}

/// Builds sortable columns for `keys`, or for every field when empty.
///
/// Columns whose first non-null value is numeric are right-aligned.
pub fn build_columns(records: &[Record], keys: &[String]) -> Vec<Column<Record>> {
    let keys: Vec<String> = if keys.is_empty() {
        records
            .iter()
            .flat_map(|record| record.fields().keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    } else {
        keys.to_vec()
    };

    keys.into_iter()
        .map(|key| {
            let numeric = records
                .iter()
                .filter_map(|record| record.get(&key))
                .find(|value| !value.is_null())
                .is_some_and(Value::is_numeric);
            let align = if numeric { Alignment::Right } else { Alignment::Left };
            Column::field(key.clone(), key).sortable().align(align)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let records = parse_records(r#"[{"name": "Alice"}, {"name": "Bob", "units": 2}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("units"), Some(&Value::Long(2)));
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(matches!(parse_records(r#"{"name": "x"}"#), Err(CliError::NotAnArray)));
        assert!(matches!(
            parse_records(r#"[{"name": "x"}, 3]"#),
            Err(CliError::BadRecord { index: 1 })
        ));
        assert!(matches!(parse_records("[1,"), Err(CliError::Json(_))));
    }

    #[test]
    fn test_build_columns_from_all_fields() {
        let records =
            parse_records(r#"[{"name": "A"}, {"price": null}, {"price": 10, "city": "Doha"}]"#)
                .unwrap();
        let columns = build_columns(&records, &[]);
        let keys: Vec<&str> = columns.iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["city", "name", "price"]);
        assert_eq!(columns[2].alignment(), Alignment::Right);
        assert_eq!(columns[0].alignment(), Alignment::Left);
    }
}
