//! Litescope Core - shared types for the SQLite browser
//!
//! This crate holds the types the inspector and the UI both depend on:
//!
//! - `Value` - a SQLite storage-class value with deterministic text rendering
//! - `Row` - one fetched table row, positionally aligned with column metadata
//! - `ColumnInfo` - column metadata in table-definition order
//! - `LitescopeError` / `Result` - the error taxonomy
//!
//! No I/O happens here; everything is plain data.

mod error;
mod schema;
mod types;

pub use error::*;
pub use schema::*;
pub use types::*;
