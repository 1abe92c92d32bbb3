//! Table query state: filter criteria, sort descriptor and page window.
//!
//! - [`Criterion`] / [`FilterCriteria`] - structured per-field filters
//! - [`SortDescriptor`] / [`SortCycle`] - the active sort and how clicks cycle it
//! - [`PageState`] / [`PageSlice`] - the page window and its result

mod criterion;
mod order;
mod page;

pub use criterion::Criterion;
pub use criterion::FilterCriteria;
pub use order::Direction;
pub use order::SortCycle;
pub use order::SortDescriptor;
pub use page::PageSlice;
pub use page::PageState;
