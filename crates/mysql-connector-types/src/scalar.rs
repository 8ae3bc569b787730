use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of GraphQL scalars a MySQL column can map into.
///
/// Temporal columns are served as text, so the whole `DATE`/`DATETIME`
/// family maps to `String` rather than a dedicated date scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    Int,
    Float,
    String,
    Boolean,
}

impl ScalarType {
    /// Maps a MySQL `DATA_TYPE` name into a GraphQL scalar. The lookup is
    /// case-insensitive; anything unrecognized falls back to `String`.
    pub fn from_storage_type(storage_type: &str) -> Self {
        match storage_type.to_lowercase().as_str() {
            "int" | "bigint" | "smallint" | "mediumint" | "tinyint" | "year" => Self::Int,
            "varchar" | "char" | "text" | "longtext" | "mediumtext" | "tinytext" => Self::String,
            "decimal" | "float" | "double" => Self::Float,
            "boolean" | "bool" => Self::Boolean,
            "date" | "datetime" | "timestamp" | "time" => Self::String,
            "json" => Self::String,
            _ => Self::String,
        }
    }
}

impl AsRef<str> for ScalarType {
    fn as_ref(&self) -> &str {
        match self {
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::Boolean => "Boolean",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
