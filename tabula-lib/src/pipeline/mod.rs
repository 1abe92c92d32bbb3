//! The filter → sort → paginate pipeline as pure functions.
//!
//! [`Table`](crate::table::Table) composes these stages and owns the
//! interactive state; they are exposed for callers that only need one step.

mod paginate;
mod predicate;
mod search;
mod sort;

pub use paginate::paginate;
pub use predicate::criterion_matches;
pub use predicate::filter_rows;
pub use predicate::matches;
pub use search::GlobalSearch;
pub use search::apply_global_filter;
pub(crate) use sort::sort_by_descriptor;
pub use sort::sort_rows;
