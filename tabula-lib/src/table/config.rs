//! Table configuration

use std::time::Duration;

use crate::query::SortCycle;

/// Configuration for a table instance.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tabula_lib::query::SortCycle;
/// use tabula_lib::table::TableConfig;
///
/// let config = TableConfig::default()
///     .with_page_size(25)
///     .with_search_debounce(Duration::from_millis(300))
///     .with_sort_cycle(SortCycle::TriState);
/// assert_eq!(config.page_size, 25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Rows per page.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Choices offered by the page-size selector.
    ///
    /// Default: 10, 20, 50
    pub page_size_options: Vec<usize>,

    /// Quiet period before a search input is committed.
    ///
    /// Default: 500 ms
    pub search_debounce: Duration,

    /// How repeated header clicks cycle the sort.
    ///
    /// Default: [`SortCycle::Toggle`]
    pub sort_cycle: SortCycle,

    /// Pagination controls are hidden while the filtered row count is at or
    /// below this value.
    ///
    /// Default: 1
    pub pagination_threshold: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![10, 20, 50],
            search_debounce: Duration::from_millis(500),
            sort_cycle: SortCycle::Toggle,
            pagination_threshold: 1,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size. A size of 0 is raised to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the page-size selector choices.
    pub fn with_page_size_options(mut self, options: impl IntoIterator<Item = usize>) -> Self {
        self.page_size_options = options.into_iter().filter(|size| *size > 0).collect();
        self
    }

    /// Sets the search debounce window.
    pub fn with_search_debounce(mut self, delay: Duration) -> Self {
        self.search_debounce = delay;
        self
    }

    /// Sets the sort cycle.
    pub fn with_sort_cycle(mut self, cycle: SortCycle) -> Self {
        self.sort_cycle = cycle;
        self
    }

    /// Sets the pagination visibility threshold.
    pub fn with_pagination_threshold(mut self, threshold: usize) -> Self {
        self.pagination_threshold = threshold;
        self
    }
}
