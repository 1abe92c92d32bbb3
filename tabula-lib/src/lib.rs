//! Tabular data presentation engine
//!
//! Client-side filter → sort → paginate over in-memory records, with global
//! free-text search and debounced search input.
//!
//! - [`model`] - dynamic [`Value`](model::Value) and schema-less [`Record`](model::Record)
//! - [`query`] - filter criteria, sort descriptor, page window
//! - [`pipeline`] - the pipeline stages as pure functions
//! - [`table`] - the stateful [`Table`](table::Table) orchestrator and its render view
//! - [`debounce`] - cancellable timers for search input

pub mod debounce;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod query;
pub mod table;

pub use error::TableError;
pub use table::Table;
pub use table::TableConfig;
