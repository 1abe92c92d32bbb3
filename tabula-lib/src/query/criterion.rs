//! Filter criteria for structured, per-field filtering.

use std::collections::BTreeMap;

use crate::model::Value;

/// A single field-level filter condition.
///
/// The operator is implied by the variant: text inputs produce `Contains`,
/// dropdowns produce `Equals` or `OneOf`, range pickers produce `Range` and
/// tri-state toggles produce `Flag`. An unselected control maps to `Any`
/// rather than to its placeholder label.
///
/// # Example
///
/// ```
/// use tabula_lib::query::Criterion;
///
/// let by_name = Criterion::contains("villa");
/// let by_status = Criterion::equals("paid");
/// let by_price = Criterion::between(100_000i64, 500_000i64);
/// let featured = Criterion::tristate(Some(true));
/// let unset = Criterion::tristate(None);
///
/// assert!(by_name.is_active());
/// assert!(!unset.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Criterion {
    /// No constraint.
    #[default]
    Any,
    /// Case-insensitive substring of the value's string form.
    Contains(String),
    /// Value equality.
    Equals(Value),
    /// Equality against any of the listed values.
    OneOf(Vec<Value>),
    /// Inclusive range; a missing bound is open.
    Range {
        /// Lower bound (inclusive).
        min: Option<Value>,
        /// Upper bound (inclusive).
        max: Option<Value>,
    },
    /// The field must be a boolean with this value.
    Flag(bool),
}

impl Criterion {
    /// Creates a substring criterion.
    pub fn contains(needle: impl Into<String>) -> Self {
        Criterion::Contains(needle.into())
    }

    /// Creates an equality criterion.
    pub fn equals(value: impl Into<Value>) -> Self {
        Criterion::Equals(value.into())
    }

    /// Creates an any-of criterion.
    pub fn one_of<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Criterion::OneOf(values.into_iter().map(Into::into).collect())
    }

    /// Creates an inclusive range criterion with both bounds.
    pub fn between(min: impl Into<Value>, max: impl Into<Value>) -> Self {
        Criterion::Range {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }

    /// Creates a range criterion with only a lower bound.
    pub fn at_least(min: impl Into<Value>) -> Self {
        Criterion::Range {
            min: Some(min.into()),
            max: None,
        }
    }

    /// Creates a range criterion with only an upper bound.
    pub fn at_most(max: impl Into<Value>) -> Self {
        Criterion::Range {
            min: None,
            max: Some(max.into()),
        }
    }

    /// Maps a tri-state choice (all / yes / no) onto a criterion.
    pub fn tristate(choice: Option<bool>) -> Self {
        match choice {
            Some(flag) => Criterion::Flag(flag),
            None => Criterion::Any,
        }
    }

    /// Returns `true` if this criterion constrains anything.
    ///
    /// Blank substrings, empty any-of lists and unbounded ranges are
    /// inactive, the same as `Any`.
    pub fn is_active(&self) -> bool {
        match self {
            Criterion::Any => false,
            Criterion::Contains(needle) => !needle.trim().is_empty(),
            Criterion::OneOf(values) => !values.is_empty(),
            Criterion::Range { min, max } => min.is_some() || max.is_some(),
            Criterion::Equals(_) | Criterion::Flag(_) => true,
        }
    }
}

/// Active filter criteria keyed by column key.
///
/// Only active criteria are stored; setting an inactive one removes the
/// field. Iteration order is by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    criteria: BTreeMap<String, Criterion>,
}

impl FilterCriteria {
    /// Creates an empty criteria set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or clears, if inactive) the criterion for a field.
    pub fn set(&mut self, field: impl Into<String>, criterion: Criterion) {
        let field = field.into();
        if criterion.is_active() {
            self.criteria.insert(field, criterion);
        } else {
            self.criteria.remove(&field);
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: impl Into<String>, criterion: Criterion) -> Self {
        self.set(field, criterion);
        self
    }

    /// Returns the criterion for a field, if one is active.
    pub fn get(&self, field: &str) -> Option<&Criterion> {
        self.criteria.get(field)
    }

    /// Removes the criterion for a field.
    pub fn remove(&mut self, field: &str) -> Option<Criterion> {
        self.criteria.remove(field)
    }

    /// Removes every criterion.
    pub fn clear(&mut self) {
        self.criteria.clear();
    }

    /// Returns `true` if no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Returns the number of active criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Iterates over `(field, criterion)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Criterion)> {
        self.criteria.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_criteria_are_not_stored() {
        let mut criteria = FilterCriteria::new();
        criteria.set("name", Criterion::contains("   "));
        criteria.set("tags", Criterion::OneOf(Vec::new()));
        criteria.set("price", Criterion::Range { min: None, max: None });
        criteria.set("featured", Criterion::tristate(None));
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_setting_any_clears_field() {
        let mut criteria = FilterCriteria::new().with("status", Criterion::equals("paid"));
        assert_eq!(criteria.len(), 1);
        criteria.set("status", Criterion::Any);
        assert!(criteria.get("status").is_none());
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let mut criteria = FilterCriteria::new();
        criteria.set("status", Criterion::equals("paid"));
        criteria.set("status", Criterion::equals("pending"));
        assert_eq!(criteria.get("status"), Some(&Criterion::equals("pending")));
    }
}
