//! SQLite inspector implementation

use litescope_core::{ColumnInfo, LitescopeError, Result, Row, Value};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Owns at most one open SQLite connection and runs all database reads.
///
/// Every operation is synchronous and blocks the calling thread until it
/// completes; the UI event loop is the only caller, so no locking is needed.
/// The connection is released on [`close`](Inspector::close), on reopen, and
/// on drop, whichever comes first.
pub struct Inspector {
    db: Option<OpenDatabase>,
}

struct OpenDatabase {
    conn: Connection,
    path: PathBuf,
}

impl Inspector {
    /// Create an inspector with no database open
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Open a database file, replacing any prior connection.
    ///
    /// The prior connection is closed before the new file is touched, so a
    /// failed open always leaves the inspector closed. Fails with
    /// [`LitescopeError::Open`] if the file is missing, unreadable, or not a
    /// SQLite database.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.close();

        tracing::info!(path = %path.display(), "opening SQLite database");
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(|e| {
            LitescopeError::Open(format!(
                "Failed to open SQLite database at '{}': {}",
                path.display(),
                e
            ))
        })?;

        // SQLite defers reading the file header until the first statement,
        // so probe the catalog now to reject non-database files at open time.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| {
            LitescopeError::Open(format!(
                "'{}' is not a valid SQLite database: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!(path = %path.display(), "database connection established");
        self.db = Some(OpenDatabase {
            conn,
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// List every table in the database catalog, ordered by name.
    ///
    /// A catalog failure means the handle is no longer trustworthy, so the
    /// connection is dropped and the error reports as an open-class failure;
    /// the caller must reopen the file.
    #[tracing::instrument(skip(self))]
    pub fn list_tables(&mut self) -> Result<Vec<String>> {
        let db = self.db.as_ref().ok_or(LitescopeError::Closed)?;

        let names = (|| -> rusqlite::Result<Vec<String>> {
            let mut stmt = db
                .conn
                .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")?;
            let names = stmt
                .query_map([], |row| row.get(0))?
                .collect::<rusqlite::Result<Vec<String>>>()?;
            Ok(names)
        })();

        match names {
            Ok(names) => {
                tracing::debug!(table_count = names.len(), "tables listed");
                Ok(names)
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog query failed, dropping connection");
                self.db = None;
                Err(LitescopeError::Open(format!("Failed to list tables: {}", e)))
            }
        }
    }

    /// Fetch column metadata for a table, in table-definition order.
    ///
    /// Uses the parameterized `pragma_table_info` table-valued function so
    /// the table name is never interpolated into SQL text. Fails with
    /// [`LitescopeError::Query`] if the table no longer exists; the
    /// connection stays open and usable.
    #[tracing::instrument(skip(self))]
    pub fn describe_table(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        let db = self.db.as_ref().ok_or(LitescopeError::Closed)?;

        tracing::trace!(table = %table, "fetching column information");
        let mut stmt = db
            .conn
            .prepare(
                "SELECT cid, name, type, \"notnull\", dflt_value, pk \
                 FROM pragma_table_info(?1) ORDER BY cid",
            )
            .map_err(|e| LitescopeError::Query(format!("Failed to prepare table_info: {}", e)))?;

        let columns = stmt
            .query_map([table], |row| {
                Ok(ColumnInfo {
                    ordinal: row.get::<_, i64>(0)? as usize,
                    name: row.get(1)?,
                    data_type: row.get(2)?,
                    nullable: row.get::<_, i64>(3)? == 0,
                    default_value: row.get(4)?,
                    is_primary_key: row.get::<_, i64>(5)? > 0,
                })
            })
            .map_err(|e| LitescopeError::Query(format!("Failed to read table_info: {}", e)))?
            .collect::<rusqlite::Result<Vec<ColumnInfo>>>()
            .map_err(|e| LitescopeError::Query(format!("Failed to read table_info: {}", e)))?;

        // pragma_table_info yields nothing (rather than an error) for an
        // unknown table, e.g. one dropped between listing and selection.
        if columns.is_empty() {
            return Err(LitescopeError::Query(format!(
                "Table '{}' does not exist",
                table
            )));
        }

        tracing::debug!(table = %table, column_count = columns.len(), "columns described");
        Ok(columns)
    }

    /// Fetch every row of a table into memory, in storage order.
    ///
    /// Deliberately unbounded: no pagination, no row limit. Large tables
    /// block the caller for the duration of the read.
    #[tracing::instrument(skip(self))]
    pub fn fetch_rows(&self, table: &str) -> Result<Vec<Row>> {
        let db = self.db.as_ref().ok_or(LitescopeError::Closed)?;

        let sql = format!("SELECT * FROM {}", quote_identifier(table));
        let mut stmt = db.conn.prepare(&sql).map_err(|e| {
            LitescopeError::Query(format!("Failed to read table '{}': {}", table, e))
        })?;

        let column_names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();

        let mut rows = Vec::new();
        let mut result = stmt.query([]).map_err(|e| {
            LitescopeError::Query(format!("Failed to read table '{}': {}", table, e))
        })?;

        while let Some(row) = result
            .next()
            .map_err(|e| LitescopeError::Query(format!("Failed to fetch row: {}", e)))?
        {
            let mut values = Vec::with_capacity(column_names.len());
            for i in 0..column_names.len() {
                values.push(read_value(row, i)?);
            }
            rows.push(Row::new(column_names.clone(), values));
        }

        tracing::debug!(table = %table, row_count = rows.len(), "rows fetched");
        Ok(rows)
    }

    /// Close the current connection. Idempotent; a no-op when nothing is
    /// open. The underlying handle is released on drop.
    pub fn close(&mut self) {
        if let Some(db) = self.db.take() {
            tracing::info!(path = %db.path.display(), "closing SQLite database");
        }
    }

    /// Whether a database is currently open
    pub fn is_open(&self) -> bool {
        self.db.is_some()
    }

    /// Path of the currently open database file, if any
    pub fn path(&self) -> Option<&Path> {
        self.db.as_ref().map(|db| db.path.as_path())
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote a SQL identifier by doubling embedded double quotes.
///
/// `SELECT *` cannot take the table name as a bind parameter, so this is the
/// one place an identifier enters SQL text. Quoting makes names with spaces,
/// quotes or keyword fragments safe.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Convert one rusqlite cell into a core `Value`, preserving the storage
/// class. Blobs stay blobs even when their bytes happen to be valid UTF-8,
/// so the detail view can render them losslessly.
fn read_value(row: &rusqlite::Row<'_>, idx: usize) -> Result<Value> {
    use rusqlite::types::ValueRef;

    let value = match row
        .get_ref(idx)
        .map_err(|e| LitescopeError::Query(e.to_string()))?
    {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(s) => Value::Text(String::from_utf8_lossy(s).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_identifier_wraps_plain_names() {
        assert_eq!(quote_identifier("users"), "\"users\"");
        assert_eq!(quote_identifier("my table"), "\"my table\"");
    }

    #[test]
    fn quote_identifier_doubles_embedded_quotes() {
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
        assert_eq!(
            quote_identifier("x\"; DROP TABLE users; --"),
            "\"x\"\"; DROP TABLE users; --\""
        );
    }
}
