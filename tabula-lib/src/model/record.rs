//! Dynamic record

use std::collections::HashMap;

use serde::Deserialize;
use serde::Deserializer;

use super::Value;

/// A schema-less record holding field values by name.
///
/// Typed record structs are the normal input to a table; `Record` covers
/// data whose shape is only known at runtime, such as a JSON export handed
/// to the CLI. Pair it with [`Column::field`](crate::table::Column::field).
///
/// # Example
///
/// ```
/// use tabula_lib::model::{Record, Value};
///
/// let record = Record::new()
///     .set("name", "Alice")
///     .set("city", "Doha");
///
/// assert_eq!(record.get("name"), Some(&Value::from("Alice")));
/// assert!(record.get("phone").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a JSON object.
    ///
    /// Returns `None` if `json` is not an object.
    pub fn from_json(json: serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::Object(map) => Some(Self {
                fields: map
                    .into_iter()
                    .map(|(key, value)| (key, Value::from_json(value)))
                    .collect(),
            }),
            _ => None,
        }
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Sets a field value (builder style).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Sets a field value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(Self {
            fields: raw
                .into_iter()
                .map(|(key, value)| (key, Value::from_json(value)))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_object() {
        let record = Record::from_json(serde_json::json!({
            "name": "Alice",
            "units": 3,
            "featured": true,
        }))
        .unwrap();
        assert_eq!(record.get("name"), Some(&Value::from("Alice")));
        assert_eq!(record.get("units"), Some(&Value::Long(3)));
        assert_eq!(record.get("featured"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(Record::from_json(serde_json::json!([1, 2, 3])).is_none());
        assert!(Record::from_json(serde_json::json!("x")).is_none());
    }

    #[test]
    fn test_deserialize_list() {
        let records: Vec<Record> =
            serde_json::from_str(r#"[{"status": "paid"}, {"status": null}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("status"), Some(&Value::Null));
    }
}
