//! Global free-text search across columns.

use super::predicate::contains_ignore_case;
use crate::table::Column;
use crate::table::column::find_column;

/// A prepared global search query.
///
/// A record matches when **any** searched column's value contains the query,
/// case-insensitively. A blank query matches everything.
#[derive(Debug)]
pub struct GlobalSearch<'c, T> {
    needle: String,
    columns: Vec<&'c Column<T>>,
}

impl<'c, T> GlobalSearch<'c, T> {
    /// Prepares `query` against `searchable_fields`.
    ///
    /// With no fields listed, every searchable column with an accessor is
    /// used. Listed fields that name no column are skipped.
    pub fn new(query: &str, searchable_fields: &[String], columns: &'c [Column<T>]) -> Self {
        let columns = if searchable_fields.is_empty() {
            columns.iter().filter(|column| column.is_searchable()).collect()
        } else {
            searchable_fields
                .iter()
                .filter_map(|field| find_column(columns, field))
                .filter(|column| column.has_accessor())
                .collect()
        };

        Self {
            needle: query.trim().to_lowercase(),
            columns,
        }
    }

    /// Returns `true` if the query is non-blank.
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    /// Returns `true` if `record` matches the query.
    pub fn matches(&self, record: &T) -> bool {
        if !self.is_active() {
            return true;
        }
        self.columns.iter().any(|column| {
            column
                .value(record)
                .filter(|value| !value.is_null())
                .is_some_and(|value| contains_ignore_case(&value.to_string(), &self.needle))
        })
    }
}

/// Keeps the rows matching `query` in any of `searchable_fields`.
///
/// # Example
///
/// ```
/// use tabula_lib::model::Record;
/// use tabula_lib::pipeline::apply_global_filter;
/// use tabula_lib::table::Column;
///
/// let columns = vec![Column::field("name", "Name"), Column::field("city", "City")];
/// let records = vec![
///     Record::new().set("name", "Alice").set("city", "Doha"),
///     Record::new().set("name", "Bob").set("city", "Alice Town"),
///     Record::new().set("name", "Carol").set("city", "Lusail"),
/// ];
/// let rows: Vec<&Record> = records.iter().collect();
///
/// let found = apply_global_filter(&rows, "alice", &[], &columns);
/// assert_eq!(found.len(), 2);
/// ```
pub fn apply_global_filter<'a, T>(
    rows: &[&'a T],
    query: &str,
    searchable_fields: &[String],
    columns: &[Column<T>],
) -> Vec<&'a T> {
    let search = GlobalSearch::new(query, searchable_fields, columns);
    if !search.is_active() {
        return rows.to_vec();
    }
    rows.iter()
        .copied()
        .filter(|record| search.matches(*record))
        .collect()
}
