//! Page state and page slices.

/// The current page window: a 0-based index and a page size.
///
/// The size is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    index: usize,
    size: usize,
}

impl PageState {
    /// Creates a page state. A size of 0 is raised to 1.
    pub fn new(index: usize, size: usize) -> Self {
        Self {
            index,
            size: size.max(1),
        }
    }

    /// Returns the 0-based page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the page size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the offset of the first row on this page.
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }

    /// Returns the number of pages needed for `len` rows (at least 1).
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.size).max(1)
    }

    /// Returns a copy with a different index.
    pub fn with_index(self, index: usize) -> Self {
        Self { index, ..self }
    }

    /// Returns a copy with the index clamped to `[0, page_count(len) - 1]`.
    pub fn clamped(self, len: usize) -> Self {
        let last = self.page_count(len) - 1;
        self.with_index(self.index.min(last))
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(0, 10)
    }
}

/// One page of rows with pagination information.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<'a, R> {
    items: &'a [R],
    page_count: usize,
}

impl<'a, R> PageSlice<'a, R> {
    pub(crate) fn new(items: &'a [R], page_count: usize) -> Self {
        Self { items, page_count }
    }

    /// Returns the rows on this page.
    pub fn items(&self) -> &'a [R] {
        self.items
    }

    /// Returns the total number of pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of rows on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_raised() {
        assert_eq!(PageState::new(0, 0).size(), 1);
    }

    #[test]
    fn test_page_count() {
        let page = PageState::new(0, 10);
        assert_eq!(page.page_count(0), 1);
        assert_eq!(page.page_count(10), 1);
        assert_eq!(page.page_count(11), 2);
    }

    #[test]
    fn test_clamped() {
        let page = PageState::new(5, 2);
        assert_eq!(page.clamped(5).index(), 2);
        assert_eq!(page.clamped(0).index(), 0);
        assert_eq!(page.clamped(100).index(), 5);
    }
}
