//! Column definitions.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::model::Record;
use crate::model::Value;

/// Reads a cell value out of a record.
pub type Accessor<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// Renders a record's cell for display.
pub type Formatter<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Orders two records for a column, replacing the value comparison.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// A column reads one field of the record through its accessor and renders
/// it through its formatter (or the value's `Display` when there is none).
/// Several columns may share a key, for example a price shown both raw and
/// formatted; filter and sort requests resolve to the first match.
///
/// # Examples
///
/// ```
/// use tabula_lib::table::{Alignment, Column};
///
/// struct Listing {
///     title: String,
///     price: i64,
/// }
///
/// let columns: Vec<Column<Listing>> = vec![
///     Column::new("title", "Title", |l: &Listing| l.title.clone().into()).sortable(),
///     Column::new("price", "Price", |l: &Listing| l.price.into())
///         .sortable()
///         .align(Alignment::Right)
///         .format(|l: &Listing| format!("{} QAR", l.price)),
///     Column::display("actions", "").format(|_: &Listing| "Edit".to_string()),
/// ];
/// assert!(columns[0].is_sortable());
/// assert!(!columns[2].has_accessor());
/// ```
pub struct Column<T> {
    key: String,
    header: String,
    sortable: bool,
    searchable: bool,
    align: Alignment,
    accessor: Option<Accessor<T>>,
    formatter: Option<Formatter<T>>,
    comparator: Option<Comparator<T>>,
}

impl<T> Column<T> {
    /// Create a column that reads its value through `accessor`.
    pub fn new<F>(key: impl Into<String>, header: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        Self {
            accessor: Some(Arc::new(accessor)),
            ..Self::display(key, header)
        }
    }

    /// Create a display-only column with no underlying value.
    ///
    /// Display-only columns cannot be filtered, sorted or searched.
    pub fn display(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            searchable: true,
            align: Alignment::Left,
            accessor: None,
            formatter: None,
            comparator: None,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Include or exclude the column from the global search fallback.
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the cell formatter.
    pub fn format<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Order rows with a custom comparator instead of by value.
    ///
    /// The comparator describes ascending order; descending reverses it.
    pub fn compare_by<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Some(Arc::new(comparator));
        self
    }

    /// Returns the field key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns the alignment.
    pub fn alignment(&self) -> Alignment {
        self.align
    }

    /// Returns `true` if header clicks sort by this column.
    pub fn is_sortable(&self) -> bool {
        self.sortable && (self.accessor.is_some() || self.comparator.is_some())
    }

    /// Returns `true` if the global search fallback covers this column.
    pub fn is_searchable(&self) -> bool {
        self.searchable && self.accessor.is_some()
    }

    /// Returns `true` if the column reads a value.
    pub fn has_accessor(&self) -> bool {
        self.accessor.is_some()
    }

    /// Reads the cell value, or `None` for a display-only column.
    pub fn value(&self, record: &T) -> Option<Value> {
        self.accessor.as_ref().map(|accessor| accessor(record))
    }

    /// Renders the cell for display.
    pub fn render(&self, record: &T) -> String {
        match (&self.formatter, &self.accessor) {
            (Some(formatter), _) => formatter(record),
            (None, Some(accessor)) => accessor(record).to_string(),
            (None, None) => String::new(),
        }
    }

    /// Compares two records in ascending order for this column.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match (&self.comparator, &self.accessor) {
            (Some(comparator), _) => comparator(a, b),
            (None, Some(accessor)) => accessor(a).sort_cmp(&accessor(b)),
            (None, None) => Ordering::Equal,
        }
    }

    pub(crate) fn comparator(&self) -> Option<&Comparator<T>> {
        self.comparator.as_ref()
    }
}

impl Column<Record> {
    /// Create a column reading `key` from a dynamic [`Record`].
    ///
    /// Missing fields read as [`Value::Null`].
    pub fn field(key: impl Into<String>, header: impl Into<String>) -> Self {
        let key = key.into();
        let field = key.clone();
        Self::new(key, header, move |record: &Record| {
            record.get(&field).cloned().unwrap_or_default()
        })
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            searchable: self.searchable,
            align: self.align,
            accessor: self.accessor.clone(),
            formatter: self.formatter.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("searchable", &self.searchable)
            .field("align", &self.align)
            .field("accessor", &self.accessor.is_some())
            .finish_non_exhaustive()
    }
}

/// Finds the first column with the given key.
pub(crate) fn find_column<'a, T>(columns: &'a [Column<T>], key: &str) -> Option<&'a Column<T>> {
    columns.iter().find(|column| column.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prefers_formatter() {
        let plain = Column::field("price", "Price");
        let formatted = Column::field("price", "Price").format(|r: &Record| {
            format!("{} QAR", r.get("price").cloned().unwrap_or_default())
        });
        let record = Record::new().set("price", 900i64);
        assert_eq!(plain.render(&record), "900");
        assert_eq!(formatted.render(&record), "900 QAR");
    }

    #[test]
    fn test_missing_field_reads_null() {
        let column = Column::field("phone", "Phone");
        assert_eq!(column.value(&Record::new()), Some(Value::Null));
    }

    #[test]
    fn test_display_column_is_inert() {
        let column: Column<Record> = Column::display("actions", "").sortable();
        assert!(!column.is_sortable());
        assert!(!column.is_searchable());
        assert_eq!(column.value(&Record::new()), None);
        assert_eq!(column.render(&Record::new()), "");
    }

    #[test]
    fn test_find_column_returns_first_match() {
        let columns = vec![
            Column::field("price", "Raw"),
            Column::field("price", "Formatted"),
        ];
        assert_eq!(find_column(&columns, "price").map(|c| c.header()), Some("Raw"));
        assert!(find_column(&columns, "missing").is_none());
    }
}
