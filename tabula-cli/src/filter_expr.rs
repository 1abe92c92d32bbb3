//! Parsing of `--filter` expressions into criteria.

use tabula_lib::model::Value;
use tabula_lib::query::Criterion;

use crate::error::CliError;

/// Parses `field<op>value` into a field key and criterion.
///
/// | Expression | Criterion |
/// |------------|-----------|
/// | `status=paid` | `Equals("paid")` |
/// | `status=paid\|pending` | `OneOf(["paid", "pending"])` |
/// | `title~villa` | `Contains("villa")` |
/// | `price>=100000` | `Range { min: 100000 }` |
/// | `price<=500000` | `Range { max: 500000 }` |
///
/// Values that parse as JSON scalars (`42`, `1.5`, `true`, `null`) are typed;
/// anything else is a string, with RFC 3339 timestamps read as dates.
pub fn parse_filter(expr: &str) -> Result<(String, Criterion), CliError> {
    let (field, op, raw) = split_operator(expr)
        .ok_or_else(|| CliError::bad_filter(expr, "expected one of =, ~, >=, <="))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(CliError::bad_filter(expr, "missing field name"));
    }

    let criterion = match op {
        "~" => Criterion::contains(raw),
        ">=" => Criterion::at_least(parse_value(raw)),
        "<=" => Criterion::at_most(parse_value(raw)),
        _ if raw.contains('|') => Criterion::OneOf(raw.split('|').map(parse_value).collect()),
        _ => Criterion::Equals(parse_value(raw)),
    };
    Ok((field.to_string(), criterion))
}

/// Splits at the first operator, preferring the two-character ones.
fn split_operator(expr: &str) -> Option<(&str, &'static str, &str)> {
    for (index, _) in expr.char_indices() {
        let rest = &expr[index..];
        for op in [">=", "<=", "~", "="] {
            if rest.starts_with(op) {
                return Some((&expr[..index], op, &rest[op.len()..]));
            }
        }
    }
    None
}

fn parse_value(raw: &str) -> Value {
    let raw = raw.trim();
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json @ (serde_json::Value::Null
        | serde_json::Value::Bool(_)
        | serde_json::Value::Number(_))) => Value::from_json(json),
        _ => Value::from_json(serde_json::Value::String(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_and_one_of() {
        assert_eq!(
            parse_filter("status=paid").unwrap(),
            ("status".to_string(), Criterion::equals("paid"))
        );
        assert_eq!(
            parse_filter("status=paid|pending").unwrap().1,
            Criterion::one_of(["paid", "pending"])
        );
        assert_eq!(
            parse_filter("featured=true").unwrap().1,
            Criterion::Equals(Value::Bool(true))
        );
    }

    #[test]
    fn test_ranges_are_typed() {
        assert_eq!(
            parse_filter("price>=100000").unwrap().1,
            Criterion::at_least(100000i64)
        );
        assert_eq!(parse_filter("rating<=4.5").unwrap().1, Criterion::at_most(4.5));
    }

    #[test]
    fn test_contains_keeps_raw_text() {
        assert_eq!(
            parse_filter("title~West Bay").unwrap().1,
            Criterion::contains("West Bay")
        );
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            parse_filter("status"),
            Err(CliError::BadFilter { .. })
        ));
        assert!(matches!(parse_filter("=paid"), Err(CliError::BadFilter { .. })));
    }
}
