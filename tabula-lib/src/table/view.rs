//! Render-ready output of a table.

use super::column::Alignment;
use crate::model::Value;
use crate::query::Direction;

/// Everything a rendering layer needs to draw one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// One header cell per column, in column order.
    pub header: Vec<HeaderCell>,
    /// The rows on the current page; each row has one cell per column.
    pub rows: Vec<Vec<Cell>>,
    /// Pagination state for the controls below the table.
    pub pagination: PaginationControls,
    /// Set when there are no rows to show.
    pub empty: Option<EmptyState>,
}

/// A column header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    /// Column key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Whether clicking the header sorts.
    pub sortable: bool,
    /// Current sort direction, if this column is the active sort.
    pub sorted: Option<Direction>,
    /// Horizontal alignment.
    pub align: Alignment,
}

impl HeaderCell {
    /// Sort indicator for the header: unsorted, ascending or descending.
    ///
    /// Returns an empty string for columns that cannot be sorted.
    pub fn indicator(&self) -> &'static str {
        match (self.sortable, self.sorted) {
            (false, _) => "",
            (true, None) => "↕",
            (true, Some(Direction::Asc)) => "↑",
            (true, Some(Direction::Desc)) => "↓",
        }
    }
}

/// One body cell: the raw value and its formatted display.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Value read by the column accessor (`Null` for display-only columns).
    pub value: Value,
    /// Formatted text.
    pub display: String,
}

/// Pagination controls state.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationControls {
    /// 0-based current page.
    pub current_page: usize,
    /// Total pages (at least 1).
    pub page_count: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Choices for the page-size selector.
    pub page_size_options: Vec<usize>,
    /// Rows after filtering and search.
    pub filtered: usize,
    /// 1-based position of the first row on the page (0 when empty).
    pub first_row: usize,
    /// 1-based position of the last row on the page (0 when empty).
    pub last_row: usize,
    /// A previous page exists.
    pub has_prev: bool,
    /// A next page exists.
    pub has_next: bool,
    /// Whether the controls are shown at all.
    pub visible: bool,
}

/// Why a table has no rows to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The source data is empty.
    NoRecords,
    /// There is data, but the active search or filters exclude all of it.
    NoMatches,
}

impl EmptyState {
    /// Message key for the rendering layer's translation lookup.
    pub fn message_key(&self) -> &'static str {
        match self {
            EmptyState::NoRecords => "table.no_records",
            EmptyState::NoMatches => "table.no_matches",
        }
    }
}
