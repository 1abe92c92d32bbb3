//! Table state: the orchestrator over the filter → sort → paginate pipeline.

use log::{debug, trace, warn};

use super::column::{Column, find_column};
use super::config::TableConfig;
use super::view::{Cell, EmptyState, HeaderCell, PaginationControls, TableView};
use crate::error::TableError;
use crate::pipeline::{GlobalSearch, matches, paginate, sort_by_descriptor};
use crate::query::{Criterion, FilterCriteria, PageState, SortDescriptor};

/// The visible page after filtering, searching, sorting and paging.
#[derive(Debug, Clone)]
pub struct VisibleRows<'a, T> {
    /// Rows on the current page, in display order.
    pub rows: Vec<&'a T>,
    /// 0-based current page.
    pub current_page: usize,
    /// Total pages (at least 1).
    pub page_count: usize,
    /// Rows after filtering and search.
    pub filtered: usize,
    /// Rows in the source data.
    pub total: usize,
}

/// An interactive table over records of type `T`.
///
/// `Table<T>` owns the source rows and three pieces of state:
/// - structured filter criteria plus a committed global search query
/// - the active sort (zero or one column)
/// - the page window
///
/// Every state change re-runs filter → search → sort eagerly and caches the
/// resulting row order, so reading the current page is a slice.
///
/// # Example
///
/// ```
/// use tabula_lib::model::Record;
/// use tabula_lib::query::Criterion;
/// use tabula_lib::table::{Column, Table, TableConfig};
///
/// let mut table = Table::with_config(
///     vec![Column::field("status", "Status").sortable()],
///     TableConfig::default().with_page_size(2),
/// )
/// .with_rows(vec![
///     Record::new().set("status", "paid"),
///     Record::new().set("status", "pending"),
///     Record::new().set("status", "paid"),
/// ]);
///
/// table.set_filter("status", Criterion::equals("paid"));
/// let visible = table.visible_rows();
/// assert_eq!(visible.rows.len(), 2);
/// assert_eq!(visible.page_count, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Table<T> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    config: TableConfig,
    criteria: FilterCriteria,
    searchable_fields: Vec<String>,
    search_draft: String,
    search_query: String,
    sort: Option<SortDescriptor>,
    page: PageState,
    /// Indices into `rows` that survive filtering, in sorted order.
    processed: Vec<usize>,
}

impl<T> Table<T> {
    /// Create an empty table with default configuration.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self::with_config(columns, TableConfig::default())
    }

    /// Create an empty table with the given configuration.
    pub fn with_config(columns: Vec<Column<T>>, config: TableConfig) -> Self {
        let page = PageState::new(0, config.page_size);
        Self {
            columns,
            rows: Vec::new(),
            config,
            criteria: FilterCriteria::new(),
            searchable_fields: Vec::new(),
            search_draft: String::new(),
            search_query: String::new(),
            sort: None,
            page,
            processed: Vec::new(),
        }
    }

    /// Set the initial rows (builder style).
    pub fn with_rows(mut self, rows: Vec<T>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Restrict global search to these column keys.
    ///
    /// An empty list searches every searchable column.
    pub fn with_searchable_fields<S: Into<String>>(
        mut self,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        self.set_searchable_fields(fields);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Get the source rows.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Get the configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Get the active structured filter criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Get the active sort.
    pub fn sort(&self) -> Option<&SortDescriptor> {
        self.sort.as_ref()
    }

    /// Get the page window (index already clamped).
    pub fn page(&self) -> PageState {
        self.page
    }

    /// Get the committed search query.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Get the visible search input text.
    pub fn search_draft(&self) -> &str {
        &self.search_draft
    }

    /// Number of source rows.
    pub fn total_len(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows after filtering and search.
    pub fn filtered_len(&self) -> usize {
        self.processed.len()
    }

    /// Total pages for the filtered rows (at least 1).
    pub fn page_count(&self) -> usize {
        self.page.page_count(self.processed.len())
    }

    /// 0-based current page.
    pub fn current_page(&self) -> usize {
        self.page.index()
    }

    /// Returns `true` if any filter or search query is active.
    pub fn is_filtered(&self) -> bool {
        !self.criteria.is_empty() || !self.search_query.trim().is_empty()
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Replace the source rows.
    ///
    /// Filter, search and sort state carry over; the page index is clamped
    /// to the new page count.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.recompute();
        self.page = self.page.clamped(self.processed.len());
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Set the criterion for one field and return to the first page.
    ///
    /// Other fields are left untouched; `Criterion::Any` clears the field.
    /// A field that names no column is ignored.
    pub fn set_filter(&mut self, field: &str, criterion: Criterion) {
        if let Err(err) = self.try_set_filter(field, criterion) {
            warn!("[table] Ignoring filter: {}", err);
        }
    }

    /// Like [`set_filter`](Self::set_filter), but reports unknown fields.
    pub fn try_set_filter(&mut self, field: &str, criterion: Criterion) -> Result<(), TableError> {
        let column = find_column(&self.columns, field)
            .filter(|column| column.has_accessor())
            .ok_or_else(|| TableError::invalid_field(field))?;
        let key = column.key().to_string();
        self.criteria.set(key, criterion);
        self.refilter();
        Ok(())
    }

    /// Clear the criterion for one field.
    pub fn clear_filter(&mut self, field: &str) {
        if self.criteria.remove(field).is_some() {
            self.refilter();
        }
    }

    /// Clear every filter criterion and the search query.
    ///
    /// The sort is kept.
    pub fn reset_filters(&mut self) {
        self.criteria.clear();
        self.search_draft.clear();
        self.search_query.clear();
        self.refilter();
    }

    // -------------------------------------------------------------------------
    // Global search
    // -------------------------------------------------------------------------

    /// Restrict global search to these column keys.
    pub fn set_searchable_fields<S: Into<String>>(&mut self, fields: impl IntoIterator<Item = S>) {
        self.searchable_fields = fields.into_iter().map(Into::into).collect();
        if !self.search_query.trim().is_empty() {
            self.refilter();
        }
    }

    /// Update the visible search text without filtering.
    ///
    /// Typing updates the draft on every keystroke; the debounced value is
    /// committed with [`apply_global_filter`](Self::apply_global_filter).
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_draft = text.into();
    }

    /// Commit a global search query.
    ///
    /// Rows must match the query in at least one searched column and also
    /// pass every structured filter. Changing the query returns to the
    /// first page; committing the same query again does nothing.
    pub fn apply_global_filter(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query.trim() == self.search_query.trim() {
            self.search_query = query;
            return;
        }
        self.search_query = query;
        self.refilter();
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Handle a header click on `field`.
    ///
    /// The same field cycles its direction per [`TableConfig::sort_cycle`];
    /// a different field starts ascending. Unknown or unsortable fields are
    /// ignored.
    pub fn set_sort(&mut self, field: &str) {
        if let Err(err) = self.try_set_sort(field) {
            warn!("[table] Ignoring sort: {}", err);
        }
    }

    /// Like [`set_sort`](Self::set_sort), but reports unknown fields.
    pub fn try_set_sort(&mut self, field: &str) -> Result<(), TableError> {
        let column =
            find_column(&self.columns, field).ok_or_else(|| TableError::invalid_field(field))?;
        if !column.is_sortable() {
            return Err(TableError::not_sortable(field));
        }
        self.sort = self.config.sort_cycle.next(self.sort.as_ref(), field);
        debug!("[table] Sort is now {:?}", self.sort);
        self.recompute();
        Ok(())
    }

    /// Remove the active sort, restoring source order.
    pub fn clear_sort(&mut self) {
        if self.sort.take().is_some() {
            self.recompute();
        }
    }

    // -------------------------------------------------------------------------
    // Paging
    // -------------------------------------------------------------------------

    /// Go to a page, clamped to `[0, page_count - 1]`.
    pub fn set_page(&mut self, index: usize) {
        let page = self.page.with_index(index).clamped(self.processed.len());
        if page != self.page {
            trace!("[table] Page {} -> {}", self.page.index(), page.index());
            self.page = page;
        }
    }

    /// Go to the first page.
    pub fn first_page(&mut self) {
        self.set_page(0);
    }

    /// Go to the previous page, if any.
    pub fn prev_page(&mut self) {
        self.set_page(self.page.index().saturating_sub(1));
    }

    /// Go to the next page, if any.
    pub fn next_page(&mut self) {
        self.set_page(self.page.index().saturating_add(1));
    }

    /// Go to the last page.
    pub fn last_page(&mut self) {
        self.set_page(self.page_count() - 1);
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.page = PageState::new(0, size);
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// The rows on the current page plus page metadata.
    pub fn visible_rows(&self) -> VisibleRows<'_, T> {
        let slice = paginate(&self.processed, self.page);
        VisibleRows {
            rows: slice.items().iter().map(|&index| &self.rows[index]).collect(),
            current_page: self.page.index(),
            page_count: slice.page_count(),
            filtered: self.processed.len(),
            total: self.rows.len(),
        }
    }

    /// Build the render-ready view of the current page.
    pub fn view(&self) -> TableView {
        let visible = self.visible_rows();

        let header = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key().to_string(),
                label: column.header().to_string(),
                sortable: column.is_sortable(),
                sorted: self
                    .sort
                    .as_ref()
                    .filter(|sort| sort.field() == column.key())
                    .map(|sort| sort.direction()),
                align: column.alignment(),
            })
            .collect();

        let rows = visible
            .rows
            .iter()
            .map(|record| {
                self.columns
                    .iter()
                    .map(|column| Cell {
                        value: column.value(record).unwrap_or_default(),
                        display: column.render(record),
                    })
                    .collect()
            })
            .collect();

        let offset = self.page.offset();
        let shown = visible.rows.len();
        let pagination = PaginationControls {
            current_page: visible.current_page,
            page_count: visible.page_count,
            page_size: self.page.size(),
            page_size_options: self.config.page_size_options.clone(),
            filtered: visible.filtered,
            first_row: if shown == 0 { 0 } else { offset + 1 },
            last_row: if shown == 0 { 0 } else { offset + shown },
            has_prev: visible.current_page > 0,
            has_next: visible.current_page + 1 < visible.page_count,
            visible: visible.filtered > self.config.pagination_threshold,
        };

        let empty = if visible.filtered > 0 {
            None
        } else if self.rows.is_empty() {
            Some(EmptyState::NoRecords)
        } else {
            Some(EmptyState::NoMatches)
        };

        TableView {
            header,
            rows,
            pagination,
            empty,
        }
    }

    // -------------------------------------------------------------------------
    // Recomputation
    // -------------------------------------------------------------------------

    /// Recompute after a filter change and return to the first page.
    fn refilter(&mut self) {
        self.recompute();
        self.page = self.page.with_index(0);
    }

    /// Re-run filter → search → sort over the source rows.
    fn recompute(&mut self) {
        let search = GlobalSearch::new(&self.search_query, &self.searchable_fields, &self.columns);
        let rows = &self.rows;

        let mut processed: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, record)| matches(*record, &self.criteria, &self.columns))
            .filter(|(_, record)| search.matches(record))
            .map(|(index, _)| index)
            .collect();
        sort_by_descriptor(
            &mut processed,
            |&index| &rows[index],
            self.sort.as_ref(),
            &self.columns,
        );

        debug!(
            "[table] Recomputed: {} of {} rows ({} criteria, search {:?})",
            processed.len(),
            rows.len(),
            self.criteria.len(),
            self.search_query.trim()
        );
        self.processed = processed;
    }
}
