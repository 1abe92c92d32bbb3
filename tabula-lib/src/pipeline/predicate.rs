//! Row predicate evaluation for structured filters.

use std::cmp::Ordering;

use crate::model::Value;
use crate::query::Criterion;
use crate::query::FilterCriteria;
use crate::table::Column;
use crate::table::column::find_column;

/// Returns `true` if `record` passes every active criterion.
///
/// Each criterion reads its field through the first column with that key.
/// Criteria naming no column, or a display-only column, impose nothing.
///
/// # Example
///
/// ```
/// use tabula_lib::model::Record;
/// use tabula_lib::pipeline::matches;
/// use tabula_lib::query::{Criterion, FilterCriteria};
/// use tabula_lib::table::Column;
///
/// let columns = vec![Column::field("status", "Status")];
/// let criteria = FilterCriteria::new().with("status", Criterion::equals("paid"));
///
/// assert!(matches(&Record::new().set("status", "paid"), &criteria, &columns));
/// assert!(!matches(&Record::new().set("status", "pending"), &criteria, &columns));
/// ```
pub fn matches<T>(record: &T, criteria: &FilterCriteria, columns: &[Column<T>]) -> bool {
    criteria.iter().all(|(field, criterion)| {
        match find_column(columns, field).and_then(|column| column.value(record)) {
            Some(value) => criterion_matches(criterion, &value),
            None => true,
        }
    })
}

/// Evaluates one criterion against one value.
///
/// `Null` fails every active criterion.
pub fn criterion_matches(criterion: &Criterion, value: &Value) -> bool {
    if !criterion.is_active() {
        return true;
    }
    if value.is_null() {
        return false;
    }

    match criterion {
        Criterion::Any => true,
        Criterion::Contains(needle) => contains_ignore_case(&value.to_string(), needle.trim()),
        Criterion::Equals(expected) => value.loose_eq(expected),
        Criterion::OneOf(options) => options.iter().any(|option| value.loose_eq(option)),
        Criterion::Range { min, max } => {
            let above_min = min.as_ref().is_none_or(|min| {
                matches!(value.compare(min), Some(Ordering::Greater | Ordering::Equal))
            });
            let below_max = max.as_ref().is_none_or(|max| {
                matches!(value.compare(max), Some(Ordering::Less | Ordering::Equal))
            });
            above_min && below_max
        }
        Criterion::Flag(flag) => value.as_bool() == Some(*flag),
    }
}

/// Keeps the rows that pass every active criterion, in input order.
pub fn filter_rows<'a, T>(
    rows: &[&'a T],
    criteria: &FilterCriteria,
    columns: &[Column<T>],
) -> Vec<&'a T> {
    rows.iter()
        .copied()
        .filter(|record| matches(*record, criteria, columns))
        .collect()
}

/// Case-insensitive substring test.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::model::Record;

    fn columns() -> Vec<Column<Record>> {
        vec![
            Column::field("name", "Name"),
            Column::field("status", "Status"),
            Column::field("price", "Price"),
            Column::field("featured", "Featured"),
            Column::field("listed", "Listed"),
        ]
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let record = Record::new().set("name", "Pearl Tower");
        let criteria = FilterCriteria::new().with("name", Criterion::contains("PEARL"));
        assert!(matches(&record, &criteria, &columns()));
    }

    #[test]
    fn test_null_fails_active_criterion() {
        let record = Record::new().set("name", Value::Null);
        let criteria = FilterCriteria::new().with("name", Criterion::contains("a"));
        assert!(!matches(&record, &criteria, &columns()));
        assert!(criterion_matches(&Criterion::Any, &Value::Null));
    }

    #[test]
    fn test_range_is_inclusive() {
        let criterion = Criterion::between(100i64, 200i64);
        assert!(criterion_matches(&criterion, &Value::Long(100)));
        assert!(criterion_matches(&criterion, &Value::Float(150.5)));
        assert!(criterion_matches(&criterion, &Value::Long(200)));
        assert!(!criterion_matches(&criterion, &Value::Long(201)));
        assert!(!criterion_matches(&criterion, &Value::from("150")));
    }

    #[test]
    fn test_open_ended_date_range() {
        let cutoff = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let criterion = Criterion::at_least(cutoff);
        let later = Value::from(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        let earlier = Value::from(Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap());
        assert!(criterion_matches(&criterion, &later));
        assert!(!criterion_matches(&criterion, &earlier));
    }

    #[test]
    fn test_flag_and_one_of() {
        assert!(criterion_matches(&Criterion::Flag(true), &Value::Bool(true)));
        assert!(!criterion_matches(&Criterion::Flag(true), &Value::Bool(false)));
        assert!(!criterion_matches(&Criterion::Flag(false), &Value::from("false")));

        let statuses = Criterion::one_of(["paid", "refunded"]);
        assert!(criterion_matches(&statuses, &Value::from("refunded")));
        assert!(!criterion_matches(&statuses, &Value::from("pending")));
    }

    #[test]
    fn test_and_across_fields() {
        let record = Record::new()
            .set("status", "paid")
            .set("featured", false);
        let both = FilterCriteria::new()
            .with("status", Criterion::equals("paid"))
            .with("featured", Criterion::Flag(true));
        assert!(!matches(&record, &both, &columns()));
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let record = Record::new().set("status", "paid");
        let criteria = FilterCriteria::new().with("owner", Criterion::equals("x"));
        assert!(matches(&record, &criteria, &columns()));
    }
}
