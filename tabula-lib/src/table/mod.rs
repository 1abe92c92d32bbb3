//! Table orchestration: columns, interactive state and render output.
//!
//! A [`Table`] composes the [`pipeline`](crate::pipeline) stages in a fixed
//! order (filter, then search, then sort, then paginate) and exposes:
//! - [`Table::visible_rows`] - the current page of records
//! - [`Table::view`] - header, formatted cells and pagination controls
//!
//! # Example
//!
//! ```
//! use tabula_lib::table::{Column, Table};
//!
//! #[derive(Clone, Debug)]
//! struct Staff {
//!     name: String,
//!     role: String,
//! }
//!
//! let columns = vec![
//!     Column::new("name", "Name", |s: &Staff| s.name.clone().into()).sortable(),
//!     Column::new("role", "Role", |s: &Staff| s.role.clone().into()),
//! ];
//! let mut table = Table::new(columns).with_rows(vec![
//!     Staff { name: "Mona".into(), role: "agent".into() },
//!     Staff { name: "Ali".into(), role: "admin".into() },
//! ]);
//!
//! table.set_sort("name");
//! let view = table.view();
//! assert_eq!(view.rows[0][0].display, "Ali");
//! ```

pub(crate) mod column;
mod config;
mod state;
mod view;

pub use column::{Accessor, Alignment, Column, Comparator, Formatter};
pub use config::TableConfig;
pub use state::{Table, VisibleRows};
pub use view::{Cell, EmptyState, HeaderCell, PaginationControls, TableView};
