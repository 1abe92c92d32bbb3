//! Table error types

/// Errors raised by table state operations.
///
/// These indicate a caller defect (a key that no column declares), not a
/// user-facing condition. The plain `Table` setters log and ignore them;
/// the `try_*` setters return them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The field is not a key of any column.
    #[error("Field '{field}' does not match any column")]
    InvalidFieldReference { field: String },

    /// The column exists but cannot be sorted.
    #[error("Column '{field}' is not sortable")]
    NotSortable { field: String },
}

impl TableError {
    /// Creates a new invalid field reference error.
    pub fn invalid_field(field: impl Into<String>) -> Self {
        Self::InvalidFieldReference {
            field: field.into(),
        }
    }

    /// Creates a new not-sortable error.
    pub fn not_sortable(field: impl Into<String>) -> Self {
        Self::NotSortable {
            field: field.into(),
        }
    }

    /// Returns the field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidFieldReference { field } | Self::NotSortable { field } => field,
        }
    }
}
