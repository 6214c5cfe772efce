//! Enumerations shared across the model

use serde::{Deserialize, Serialize};

/// Semantic column type
///
/// This is the boundary between source-specific classification and the
/// generic JSON Schema translator: a backend only has to produce one of these
/// values for every column to reuse the translator unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Whole numbers (`int`, `bigint`, `smallint`, ...)
    Integer,
    /// Floating point and fixed point numbers
    Float,
    /// `tinyint(1)`
    Boolean,
    /// Character and text types
    String,
    /// Calendar date without time
    Date,
    /// Date with time of day (`datetime`, `timestamp`)
    Datetime,
    /// Enumeration of string literals
    Enum,
    /// JSON document
    Json,
}

impl ColumnType {
    /// Whether `max_length` carries meaning for this type
    pub fn is_textual(&self) -> bool {
        matches!(self, ColumnType::String | ColumnType::Enum)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Boolean => write!(f, "boolean"),
            ColumnType::String => write!(f, "string"),
            ColumnType::Date => write!(f, "date"),
            ColumnType::Datetime => write!(f, "datetime"),
            ColumnType::Enum => write!(f, "enum"),
            ColumnType::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textual_types() {
        assert!(ColumnType::String.is_textual());
        assert!(ColumnType::Enum.is_textual());
        assert!(!ColumnType::Json.is_textual());
        assert!(!ColumnType::Integer.is_textual());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ColumnType::Datetime).unwrap();
        assert_eq!(json, "\"datetime\"");
        let parsed: ColumnType = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(parsed, ColumnType::Json);
    }
}
