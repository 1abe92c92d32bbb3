//! Error types

mod table;

pub use table::*;
