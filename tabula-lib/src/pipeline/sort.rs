//! Stable single-column sorting.

use std::cmp::Ordering;

use crate::model::Value;
use crate::query::Direction;
use crate::query::SortDescriptor;
use crate::table::Column;
use crate::table::column::find_column;

/// Returns the rows ordered by `descriptor`, leaving `rows` untouched.
///
/// Ties keep their input order. `Desc` reverses the comparison, not the
/// output, so ties stay stable in both directions. A missing descriptor, or
/// one naming no column, returns the input order.
///
/// # Example
///
/// ```
/// use tabula_lib::model::Record;
/// use tabula_lib::pipeline::sort_rows;
/// use tabula_lib::query::SortDescriptor;
/// use tabula_lib::table::Column;
///
/// let columns = vec![Column::field("v", "V")];
/// let records = vec![
///     Record::new().set("id", 1i64).set("v", 5i64),
///     Record::new().set("id", 2i64).set("v", 5i64),
///     Record::new().set("id", 3i64).set("v", 3i64),
/// ];
/// let rows: Vec<&Record> = records.iter().collect();
///
/// let sorted = sort_rows(&rows, Some(&SortDescriptor::asc("v")), &columns);
/// let ids: Vec<String> = sorted.iter().map(|r| r.get("id").unwrap().to_string()).collect();
/// assert_eq!(ids, ["3", "1", "2"]);
/// ```
pub fn sort_rows<'a, T>(
    rows: &[&'a T],
    descriptor: Option<&SortDescriptor>,
    columns: &[Column<T>],
) -> Vec<&'a T> {
    let mut sorted = rows.to_vec();
    sort_by_descriptor(&mut sorted, |row| *row, descriptor, columns);
    sorted
}

/// Sorts row handles in place, resolving each handle to its record.
///
/// Handles may be references or indices into a backing slice.
pub(crate) fn sort_by_descriptor<'a, T: 'a, H>(
    handles: &mut Vec<H>,
    resolve: impl Fn(&H) -> &'a T,
    descriptor: Option<&SortDescriptor>,
    columns: &[Column<T>],
) {
    let Some(descriptor) = descriptor else {
        return;
    };
    let Some(column) = find_column(columns, descriptor.field()) else {
        return;
    };
    let direction = descriptor.direction();

    if column.comparator().is_some() {
        handles.sort_by(|a, b| directed(column.compare(resolve(a), resolve(b)), direction));
        return;
    }

    // Read each key once, then sort the decorated pairs.
    let mut keyed: Vec<(Value, H)> = std::mem::take(handles)
        .into_iter()
        .map(|handle| {
            let key = column.value(resolve(&handle)).unwrap_or_default();
            (key, handle)
        })
        .collect();
    keyed.sort_by(|(a, _), (b, _)| directed(a.sort_cmp(b), direction));
    handles.extend(keyed.into_iter().map(|(_, handle)| handle));
}

fn directed(ordering: Ordering, direction: Direction) -> Ordering {
    match direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}
