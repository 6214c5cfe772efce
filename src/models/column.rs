//! Column model

use serde::{Deserialize, Serialize};

use super::enums::ColumnType;
use crate::import::{UnsupportedTypeError, classify};

/// Column model representing one field of a table row
///
/// Columns are produced by a [`SchemaSource`](crate::source::SchemaSource)
/// with their semantic type already resolved.
///
/// # Example
///
/// ```rust
/// use db2jsonschema::models::{Column, ColumnType};
///
/// let column = Column::from_raw_type("id", "int(11) unsigned").unwrap();
/// assert_eq!(column.column_type, ColumnType::Integer);
/// assert!(column.unsigned);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Semantic type
    pub column_type: ColumnType,
    /// Whether the column allows NULL values (default: true)
    #[serde(default = "default_true")]
    pub nullable: bool,
    /// Maximum character length, for textual types only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Enum literals in declaration order; non-empty iff the type is `Enum`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    /// Whether the numeric type was declared unsigned
    #[serde(default)]
    pub unsigned: bool,
    /// Default value expression as reported by the database
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Column {
    /// Create a nullable column without constraints
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
            max_length: None,
            enum_values: Vec::new(),
            unsigned: false,
            default: None,
        }
    }

    /// Create a column from a vendor type descriptor such as `varchar(255)`
    ///
    /// The enum literal list and the unsigned modifier are taken from the
    /// descriptor as well.
    pub fn from_raw_type(
        name: impl Into<String>,
        raw_type: &str,
    ) -> Result<Self, UnsupportedTypeError> {
        let classified = classify(raw_type)?;
        let mut column = Self::new(name, classified.column_type);
        column.enum_values = classified.enum_values;
        column.unsigned = classified.unsigned;
        Ok(column)
    }

    /// Set nullability
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set the default value
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the maximum length
    ///
    /// Ignored for non-textual types.
    pub fn with_max_length(mut self, max_length: u64) -> Self {
        if self.column_type.is_textual() {
            self.max_length = Some(max_length);
        }
        self
    }

    /// Set the enum literals
    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a row must provide a value for this column
    ///
    /// Columns with a default are never required, the database supplies
    /// the value.
    pub fn is_required(&self) -> bool {
        !self.nullable && self.default.is_none()
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}, Type: {}, Nullable: {}, MaxLength: {}, Enum: {:?}, Unsigned: {}",
            self.name,
            self.column_type,
            self.nullable,
            self.max_length.unwrap_or(0),
            self.enum_values,
            self.unsigned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_type_enum() {
        let column = Column::from_raw_type("role", "enum('admin','user')").unwrap();
        assert_eq!(column.column_type, ColumnType::Enum);
        assert_eq!(column.enum_values, vec!["admin", "user"]);
        assert!(column.nullable);
        assert!(!column.unsigned);
    }

    #[test]
    fn test_from_raw_type_unsupported() {
        let err = Column::from_raw_type("shape", "geometry").unwrap_err();
        assert_eq!(err.raw, "geometry");
    }

    #[test]
    fn test_required_rule() {
        let plain = Column::new("a", ColumnType::Integer).with_nullable(false);
        assert!(plain.is_required());

        let defaulted = Column::new("b", ColumnType::Integer)
            .with_nullable(false)
            .with_default("0");
        assert!(!defaulted.is_required());

        let nullable = Column::new("c", ColumnType::Integer);
        assert!(!nullable.is_required());
        assert!(!nullable.with_default("1").is_required());
    }

    #[test]
    fn test_max_length_only_for_textual() {
        let int_col = Column::new("n", ColumnType::Integer).with_max_length(11);
        assert_eq!(int_col.max_length, None);

        let text_col = Column::new("s", ColumnType::String).with_max_length(255);
        assert_eq!(text_col.max_length, Some(255));
    }

    #[test]
    fn test_display() {
        let column = Column::new("name", ColumnType::String).with_max_length(64);
        assert_eq!(
            column.to_string(),
            "Name: name, Type: string, Nullable: true, MaxLength: 64, Enum: [], Unsigned: false"
        );
    }
}
