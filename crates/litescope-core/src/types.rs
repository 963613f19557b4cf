//! Value and row types for Litescope

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A SQLite value, one variant per storage class.
///
/// SQLite is dynamically typed per cell, so a column declared `INTEGER` can
/// still hold text. The variant reflects what is actually stored, not what
/// the column declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL value
    Null,
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point
    Real(f64),
    /// UTF-8 string
    Text(String),
    /// Binary data
    Blob(Vec<u8>),
}

impl Value {
    /// Check if the value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            Value::Text(s) => s.parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Complete, untruncated text rendering of the value.
    ///
    /// This is what the detail view shows. Scalars and text render the same
    /// as `Display`; blobs render as a full SQLite hex literal (`X'…'`) so
    /// no byte is lost, where `Display` only shows a byte-count placeholder
    /// suitable for a grid cell.
    pub fn detail_text(&self) -> String {
        match self {
            Value::Blob(bytes) => {
                let mut out = String::with_capacity(bytes.len() * 2 + 3);
                out.push_str("X'");
                for byte in bytes {
                    let _ = write!(out, "{:02X}", byte);
                }
                out.push('\'');
                out
            }
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Real(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
            Value::Blob(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

/// One fetched table row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Cell values, in column-definition order
    pub values: Vec<Value>,
    /// Column names (shared with every row of the same fetch)
    columns: Vec<String>,
}

impl Row {
    /// Create a new row
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        Self { values, columns }
    }

    /// Get a value by column index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Get a value by column name
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no cells
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Complete detail text for one cell, or `None` if the index is out of
    /// range. Pure projection, no I/O.
    pub fn detail_text(&self, index: usize) -> Option<String> {
        self.values.get(index).map(Value::detail_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_renders_each_storage_class() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Integer(-42).to_string(), "-42");
        assert_eq!(Value::Real(1.5).to_string(), "1.5");
        assert_eq!(Value::Text("Alice".into()).to_string(), "Alice");
        assert_eq!(Value::Blob(vec![0, 1, 2]).to_string(), "<3 bytes>");
    }

    #[test]
    fn detail_text_matches_display_for_scalars() {
        for value in [
            Value::Null,
            Value::Integer(7),
            Value::Real(-0.25),
            Value::Text("multi\nline\ttext".into()),
        ] {
            assert_eq!(value.detail_text(), value.to_string());
        }
    }

    #[test]
    fn detail_text_renders_blobs_as_full_hex_literal() {
        let value = Value::Blob(vec![0x00, 0xAB, 0xFF]);
        assert_eq!(value.detail_text(), "X'00ABFF'");
        // Idempotent: rendering twice gives the same text.
        assert_eq!(value.detail_text(), value.detail_text());
    }

    #[test]
    fn row_lookup_by_index_and_name() {
        let row = Row::new(
            vec!["id".into(), "name".into()],
            vec![Value::Integer(1), Value::Text("Alice".into())],
        );
        assert_eq!(row.len(), 2);
        assert_eq!(row.get(0), Some(&Value::Integer(1)));
        assert_eq!(row.get_by_name("name"), Some(&Value::Text("Alice".into())));
        assert_eq!(row.get_by_name("missing"), None);
        assert_eq!(row.detail_text(1).as_deref(), Some("Alice"));
        assert_eq!(row.detail_text(9), None);
    }
}
