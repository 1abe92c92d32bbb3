//! Page slicing.

use crate::query::PageSlice;
use crate::query::PageState;

/// Returns the window of `rows` for `page`.
///
/// The slice is clipped to the row count; an index past the last page
/// yields an empty slice. Clamping the index is the caller's job.
///
/// # Example
///
/// ```
/// use tabula_lib::pipeline::paginate;
/// use tabula_lib::query::PageState;
///
/// let rows = [1, 2, 3, 4, 5];
/// let page = paginate(&rows, PageState::new(2, 2));
/// assert_eq!(page.items(), &[5]);
/// assert_eq!(page.page_count(), 3);
/// ```
pub fn paginate<R>(rows: &[R], page: PageState) -> PageSlice<'_, R> {
    let start = page.offset().min(rows.len());
    let end = start.saturating_add(page.size()).min(rows.len());
    PageSlice::new(&rows[start..end], page.page_count(rows.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_concatenate_to_input() {
        let rows: Vec<u32> = (0..23).collect();
        for size in 1..=25 {
            let first = paginate(&rows, PageState::new(0, size));
            let mut joined = Vec::new();
            for index in 0..first.page_count() {
                joined.extend_from_slice(paginate(&rows, PageState::new(index, size)).items());
            }
            assert_eq!(joined, rows, "page size {}", size);
        }
    }

    #[test]
    fn test_out_of_range_index_is_empty() {
        let rows = [1, 2, 3];
        let page = paginate(&rows, PageState::new(9, 2));
        assert!(page.is_empty());
        assert_eq!(page.page_count(), 2);
    }

    #[test]
    fn test_empty_input_has_one_page() {
        let rows: [u8; 0] = [];
        let page = paginate(&rows, PageState::new(0, 5));
        assert_eq!(page.page_count(), 1);
        assert_eq!(page.len(), 0);
    }
}
