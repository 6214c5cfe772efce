//! Error types for JSON Schema generation

use thiserror::Error;

use crate::import::UnsupportedTypeError;
use crate::source::SourceError;

/// Errors that abort a generation run
///
/// There is no partial output: any of these means no document was produced.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A column type could not be classified
    #[error("table `{table}`, column `{column}`: {source}")]
    UnsupportedType {
        table: String,
        column: String,
        #[source]
        source: UnsupportedTypeError,
    },

    /// A column violates the model invariants
    #[error("table `{table}`, column `{column}`: {reason}")]
    InvalidColumn {
        table: String,
        column: String,
        reason: String,
    },

    /// Two tables share a name
    #[error("duplicate table `{0}`")]
    DuplicateTable(String),

    /// A table name collides with a generated definition
    #[error("table name `{0}` is reserved for raw fixture values")]
    ReservedTableName(String),

    /// The schema source failed
    #[error("schema source error: {0}")]
    Source(#[source] SourceError),

    /// The document could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GenerateError {
    /// The classification failure behind this error, if any
    pub fn unsupported_type(&self) -> Option<&UnsupportedTypeError> {
        match self {
            GenerateError::UnsupportedType { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<SourceError> for GenerateError {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::UnsupportedType {
                table,
                column,
                source,
            } => GenerateError::UnsupportedType {
                table,
                column,
                source,
            },
            other => GenerateError::Source(other),
        }
    }
}

pub type GenerateResult<T> = Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unsupported_type_is_lifted() {
        let err: GenerateError = SourceError::UnsupportedType {
            table: "places".to_string(),
            column: "shape".to_string(),
            source: UnsupportedTypeError::new("geometry"),
        }
        .into();

        assert_eq!(err.unsupported_type().map(|e| e.raw.as_str()), Some("geometry"));
        assert_eq!(
            err.to_string(),
            "table `places`, column `shape`: unsupported type: geometry"
        );
    }

    #[test]
    fn test_other_source_errors_are_wrapped() {
        let err: GenerateError = SourceError::Connection("refused".to_string()).into();
        assert!(matches!(err, GenerateError::Source(SourceError::Connection(_))));
        assert!(err.unsupported_type().is_none());
    }
}
