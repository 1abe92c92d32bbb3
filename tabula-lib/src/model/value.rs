//! Value enum for dynamic cell values

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

/// A dynamic value read out of a record by a column accessor.
///
/// Filtering, sorting and search all operate on `Value`, so any record type
/// can take part in the pipeline as long as its columns map fields onto one
/// of these variants.
///
/// # Comparison
///
/// | Left / Right | Rule |
/// |--------------|------|
/// | numeric / numeric | by magnitude (`Int`, `Long`, `Float`, `Decimal` mix freely) |
/// | `DateTime` / `DateTime` | by timestamp |
/// | `String` / `String` | lexicographic, case-sensitive |
/// | `Bool` / `Bool` | `false < true` |
/// | `Null` / `Null` | equal |
/// | anything else | not comparable |
///
/// # Example
///
/// ```
/// use tabula_lib::model::Value;
///
/// let price = Value::from(1_250_000i64);
/// let listed = Value::from("Villa");
/// let missing = Value::Null;
/// assert!(missing.is_null());
/// assert_eq!(price.to_string(), "1250000");
/// assert_eq!(listed.to_string(), "Villa");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// Fallback for nested JSON (arrays, objects).
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Guid(_) => "guid",
            Value::DateTime(_) => "datetime",
            Value::Json(_) => "json",
        }
    }

    /// Returns `true` for `Int`, `Long`, `Float` and `Decimal`.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Decimal(_)
        )
    }

    /// Returns the value as a string slice if it is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a bool if it is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric value widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(f64::from(*v)),
            Value::Long(v) => v.to_f64(),
            Value::Float(v) => Some(*v),
            Value::Decimal(v) => v.to_f64(),
            _ => None,
        }
    }

    /// Compares two values of compatible kinds.
    ///
    /// Returns `None` when the kinds are not comparable (see the table on
    /// [`Value`]) or when a float comparison involves NaN.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Long(a), Value::Long(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Long(b)) => Some(i64::from(*a).cmp(b)),
            (Value::Long(a), Value::Int(b)) => Some(a.cmp(&i64::from(*b))),
            (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
            (a, b) if a.is_numeric() && b.is_numeric() => {
                a.as_f64()?.partial_cmp(&b.as_f64()?)
            }
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Guid(a), Value::Guid(b)) => Some(a.cmp(b)),
            (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Total ordering used by the sort engine.
    ///
    /// Comparable values use [`Value::compare`]. NaN sorts after every other
    /// number. Otherwise values order by kind, with `Null` first.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        if let Some(ordering) = self.compare(other) {
            return ordering;
        }
        match (self.is_nan(), other.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) if other.is_numeric() => Ordering::Greater,
            (false, true) if self.is_numeric() => Ordering::Less,
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn is_nan(&self) -> bool {
        matches!(self, Value::Float(v) if v.is_nan())
    }

    /// Equality across numeric widths (`Int(3)` equals `Float(3.0)`).
    pub fn loose_eq(&self, other: &Value) -> bool {
        match self.compare(other) {
            Some(ordering) => ordering == Ordering::Equal,
            None => self == other,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Decimal(_) => 2,
            Value::DateTime(_) => 3,
            Value::String(_) => 4,
            Value::Guid(_) => 5,
            Value::Json(_) => 6,
        }
    }

    /// Converts a JSON value into a cell value.
    ///
    /// Integers become `Long`, other numbers `Float`. Strings in RFC 3339
    /// form become `DateTime` so date columns sort by timestamp. Arrays and
    /// objects are kept as `Json`.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Long(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Json(n.into())),
            },
            serde_json::Value::String(s) => match DateTime::parse_from_rfc3339(&s) {
                Ok(dt) => Value::DateTime(dt.with_timezone(&Utc)),
                Err(_) => Value::String(s),
            },
            other => Value::Json(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
            Value::Guid(v) => write!(f, "{}", v),
            Value::DateTime(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Long(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_numeric_widths_compare_by_magnitude() {
        assert_eq!(Value::Int(3).compare(&Value::Long(3)), Some(Ordering::Equal));
        assert_eq!(Value::Int(2).compare(&Value::Float(2.5)), Some(Ordering::Less));
        assert_eq!(
            Value::Decimal(Decimal::new(1050, 2)).compare(&Value::Long(10)),
            Some(Ordering::Greater)
        );
        assert!(Value::Int(3).loose_eq(&Value::Float(3.0)));
    }

    #[test]
    fn test_incomparable_kinds() {
        assert_eq!(Value::from("10").compare(&Value::Long(10)), None);
        assert_eq!(Value::Float(f64::NAN).compare(&Value::Float(1.0)), None);
        assert!(!Value::from("10").loose_eq(&Value::Long(10)));
    }

    #[test]
    fn test_sort_cmp_puts_null_first() {
        assert_eq!(Value::Null.sort_cmp(&Value::Long(0)), Ordering::Less);
        assert_eq!(Value::from("a").sort_cmp(&Value::Null), Ordering::Greater);
        assert_eq!(Value::from("B").sort_cmp(&Value::from("a")), Ordering::Less);
    }

    #[test]
    fn test_sort_cmp_puts_nan_after_numbers() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(nan.sort_cmp(&Value::Float(1.0)), Ordering::Greater);
        assert_eq!(Value::Long(i64::MAX).sort_cmp(&nan), Ordering::Less);
        assert_eq!(nan.sort_cmp(&Value::Float(f64::NAN)), Ordering::Equal);
        assert_eq!(Value::Null.sort_cmp(&nan), Ordering::Less);
        assert_eq!(nan.sort_cmp(&Value::from("a")), Ordering::Less);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from_json(serde_json::json!(null)), Value::Null);
        assert_eq!(Value::from_json(serde_json::json!(42)), Value::Long(42));
        assert_eq!(Value::from_json(serde_json::json!(1.5)), Value::Float(1.5));
        assert_eq!(
            Value::from_json(serde_json::json!("Doha")),
            Value::String("Doha".into())
        );
        assert_eq!(
            Value::from_json(serde_json::json!("2024-03-01T10:00:00Z")),
            Value::DateTime(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
        );
        assert!(matches!(
            Value::from_json(serde_json::json!([1, 2])),
            Value::Json(_)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(
            Value::from_json(serde_json::json!("2024-03-01T10:00:00Z")).to_string(),
            "2024-03-01T10:00:00Z"
        );
    }
}
