//! DuckDB schema source
//!
//! Reads `information_schema.columns` of a DuckDB database file. DuckDB type
//! names are rewritten into the MySQL-style vocabulary understood by the
//! classifier before classification.

use std::path::PathBuf;

use async_trait::async_trait;
use duckdb::{AccessMode, Config, Connection};
use tracing::{info, warn};

use super::{ColumnRow, SchemaSource, SourceError, group_rows};
use crate::import::UnsupportedTypeError;
use crate::models::Table;

const COLUMNS_QUERY: &str = "
    SELECT
        table_name,
        column_name,
        data_type,
        is_nullable,
        character_maximum_length,
        column_default
    FROM information_schema.columns
    WHERE table_schema = ?
    ORDER BY table_name, ordinal_position";

// Nested and interval types overlap the MySQL substring rules
// (`INTERVAL` contains "int", `VARCHAR[]` contains "char").
const NESTED_PREFIXES: &[&str] = &["LIST", "ARRAY", "STRUCT", "MAP", "UNION", "INTERVAL"];

/// Rewrite a DuckDB type name into the classifier vocabulary
///
/// `BOOLEAN` becomes `tinyint(1)` and the unsigned integer family
/// (`UTINYINT` .. `UHUGEINT`) gains an explicit `unsigned` modifier.
/// Intervals, lists, arrays and other nested types are rejected.
pub fn normalize_type(data_type: &str) -> Result<String, UnsupportedTypeError> {
    let trimmed = data_type.trim();
    let upper = trimmed.to_ascii_uppercase();

    if upper.ends_with(']') || NESTED_PREFIXES.iter().any(|p| upper.starts_with(p)) {
        return Err(UnsupportedTypeError::new(trimmed));
    }

    let normalized = match upper.as_str() {
        "BOOLEAN" | "BOOL" | "LOGICAL" => "tinyint(1)".to_string(),
        "UTINYINT" | "USMALLINT" | "UINTEGER" | "UBIGINT" | "UHUGEINT" => {
            format!("{} unsigned", upper[1..].to_ascii_lowercase())
        }
        _ => trimmed.to_string(),
    };
    Ok(normalized)
}

/// Schema source backed by a DuckDB database file
#[derive(Debug, Clone)]
pub struct DuckDbSource {
    path: PathBuf,
    schema: String,
}

impl DuckDbSource {
    /// Describe the tables of `schema` (usually `main`) in the file at `path`
    pub fn new(path: impl Into<PathBuf>, schema: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            schema: schema.into(),
        }
    }

    /// Read tables synchronously
    pub fn read_tables(&self) -> Result<Vec<Table>, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::Connection(format!(
                "Database file not found: {}",
                self.path.display()
            )));
        }

        let config = Config::default()
            .access_mode(AccessMode::ReadOnly)
            .map_err(|e| SourceError::Connection(e.to_string()))?;
        let conn = Connection::open_with_flags(&self.path, config)
            .map_err(|e| SourceError::Connection(e.to_string()))?;

        let mut stmt = conn
            .prepare(COLUMNS_QUERY)
            .map_err(|e| SourceError::Query(e.to_string()))?;
        let rows = stmt
            .query_map([self.schema.as_str()], |row| {
                let max_length: Option<i64> = row.get(4)?;
                Ok(ColumnRow {
                    table_name: row.get(0)?,
                    column_name: row.get(1)?,
                    column_type: row.get(2)?,
                    is_nullable: row.get(3)?,
                    max_length: max_length.and_then(|len| u64::try_from(len).ok()),
                    default: row.get(5)?,
                })
            })
            .map_err(|e| SourceError::Query(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SourceError::Query(e.to_string()))?;

        if rows.is_empty() {
            warn!(schema = %self.schema, path = %self.path.display(), "No columns found");
        }

        let rows = rows
            .into_iter()
            .map(|mut row| match normalize_type(&row.column_type) {
                Ok(column_type) => {
                    row.column_type = column_type;
                    Ok(row)
                }
                Err(source) => Err(SourceError::UnsupportedType {
                    table: row.table_name,
                    column: row.column_name,
                    source,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        group_rows(rows)
    }
}

#[async_trait]
impl SchemaSource for DuckDbSource {
    fn name(&self) -> &str {
        "duckdb"
    }

    async fn get_tables(&self) -> Result<Vec<Table>, SourceError> {
        info!(path = %self.path.display(), schema = %self.schema, "Reading DuckDB schema");

        let source = self.clone();
        tokio::task::spawn_blocking(move || source.read_tables())
            .await
            .map_err(|e| SourceError::Connection(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnType;

    #[test]
    fn test_normalize_type() {
        assert_eq!(normalize_type("BOOLEAN").unwrap(), "tinyint(1)");
        assert_eq!(normalize_type("UBIGINT").unwrap(), "bigint unsigned");
        assert_eq!(normalize_type("UINTEGER").unwrap(), "integer unsigned");
        assert_eq!(normalize_type("VARCHAR").unwrap(), "VARCHAR");
        assert_eq!(normalize_type("DECIMAL(10,2)").unwrap(), "DECIMAL(10,2)");
    }

    #[test]
    fn test_normalize_type_rejects_nested_and_interval() {
        for raw in [
            "INTERVAL",
            "INTEGER[]",
            "VARCHAR[]",
            "INTEGER[3]",
            "LIST(INTEGER)",
            "STRUCT(a INTEGER)",
            "MAP(VARCHAR, INTEGER)",
        ] {
            let err = normalize_type(raw).unwrap_err();
            assert_eq!(err.raw, raw);
        }
    }

    #[test]
    fn test_read_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.duckdb");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE users (
                    id INTEGER NOT NULL,
                    email VARCHAR NOT NULL,
                    active BOOLEAN NOT NULL DEFAULT true,
                    visits UBIGINT,
                    created_at TIMESTAMP
                );",
            )
            .unwrap();
        }

        let tables = DuckDbSource::new(&path, "main").read_tables().unwrap();
        assert_eq!(tables.len(), 1);

        let users = &tables[0];
        assert_eq!(users.name, "users");
        let types: Vec<ColumnType> = users.columns.iter().map(|c| c.column_type).collect();
        assert_eq!(
            types,
            vec![
                ColumnType::Integer,
                ColumnType::String,
                ColumnType::Boolean,
                ColumnType::Integer,
                ColumnType::Datetime,
            ]
        );
        assert!(users.columns[3].unsigned);
        assert!(users.columns[2].default.is_some());
        assert_eq!(users.required_columns(), vec!["id", "email"]);
    }

    #[test]
    fn test_interval_column_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("waits.duckdb");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch("CREATE TABLE waits (id INTEGER NOT NULL, wait INTERVAL);")
                .unwrap();
        }

        let err = DuckDbSource::new(&path, "main").read_tables().unwrap_err();
        match err {
            SourceError::UnsupportedType {
                table,
                column,
                source,
            } => {
                assert_eq!(table, "waits");
                assert_eq!(column, "wait");
                assert_eq!(source.raw, "INTERVAL");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DuckDbSource::new(dir.path().join("nope.duckdb"), "main")
            .read_tables()
            .unwrap_err();
        assert!(matches!(err, SourceError::Connection(_)));
    }
}
