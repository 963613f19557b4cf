//! Column metadata types

use serde::{Deserialize, Serialize};

/// Column metadata for one table column, as reported by `pragma_table_info`.
///
/// Ordering matters: `describe_table` returns these in table-definition
/// order, and fetched rows are aligned positionally with that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ColumnInfo {
    /// Column ordinal position (0-based)
    #[serde(default)]
    pub ordinal: usize,
    /// Column name
    #[serde(default)]
    pub name: String,
    /// Declared type from CREATE TABLE (may be empty for untyped columns)
    #[serde(default)]
    pub data_type: String,
    /// Whether the column can be NULL
    #[serde(default)]
    pub nullable: bool,
    /// Default value expression, if any
    #[serde(default)]
    pub default_value: Option<String>,
    /// Whether the column is part of the primary key
    #[serde(default)]
    pub is_primary_key: bool,
}
