//! Error types for Litescope

use thiserror::Error;

/// Error taxonomy for inspector operations.
///
/// `Open` covers everything that leaves (or keeps) the inspector closed:
/// a missing, unreadable or invalid database file, or a catalog failure that
/// invalidates the connection. `Query` covers per-table failures while the
/// connection stays open, such as a table dropped between listing and
/// selection. `Closed` is a contract violation: a table operation was called
/// with no database open.
#[derive(Error, Debug)]
pub enum LitescopeError {
    #[error("Open error: {0}")]
    Open(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("No database is open")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Litescope operations
pub type Result<T> = std::result::Result<T, LitescopeError>;
