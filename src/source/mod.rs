//! Schema source abstraction
//!
//! Defines the SchemaSource trait and implementations for different backends:
//! - MySqlSource: MySQL / MariaDB `information_schema` (feature `mysql-backend`)
//! - DuckDbSource: DuckDB database files (feature `duckdb-backend`)
//! - MemorySource: a fixed list of tables (library callers, tests)

use async_trait::async_trait;
use tracing::debug;

use crate::import::UnsupportedTypeError;
use crate::models::{Column, Table};

/// Error type for schema sources
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Query error: {0}")]
    Query(String),
    #[error("table `{table}`, column `{column}`: {source}")]
    UnsupportedType {
        table: String,
        column: String,
        #[source]
        source: UnsupportedTypeError,
    },
}

/// Trait for schema sources
///
/// A source reads table and column metadata once and returns it normalized,
/// with every column type already classified. The translator never talks to
/// a database directly.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Short backend name for logging
    fn name(&self) -> &str;

    /// Read all tables with their columns in ordinal order
    async fn get_tables(&self) -> Result<Vec<Table>, SourceError>;
}

/// One row of column metadata as read from `information_schema`
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRow {
    pub table_name: String,
    pub column_name: String,
    /// Vendor type descriptor, e.g. `int(11) unsigned`
    pub column_type: String,
    /// `YES` or `NO`
    pub is_nullable: String,
    pub max_length: Option<u64>,
    pub default: Option<String>,
}

impl ColumnRow {
    /// Classify the row into a column
    pub fn into_column(self) -> Result<Column, SourceError> {
        let mut column = Column::from_raw_type(&self.column_name, &self.column_type).map_err(
            |source| SourceError::UnsupportedType {
                table: self.table_name.clone(),
                column: self.column_name.clone(),
                source,
            },
        )?;

        column.nullable = self.is_nullable.eq_ignore_ascii_case("YES");
        column.default = self.default;
        if let Some(max_length) = self.max_length {
            column = column.with_max_length(max_length);
        }

        debug!(table = %self.table_name, column = %column, "Classified column");
        Ok(column)
    }
}

/// Group metadata rows into tables
///
/// Tables keep the order of their first row, columns keep row order. Fails
/// on the first column whose type cannot be classified.
pub fn group_rows<I>(rows: I) -> Result<Vec<Table>, SourceError>
where
    I: IntoIterator<Item = ColumnRow>,
{
    let mut tables: Vec<Table> = Vec::new();

    for row in rows {
        let table_name = row.table_name.clone();
        let column = row.into_column()?;

        match tables.iter_mut().rev().find(|t| t.name == table_name) {
            Some(table) => table.columns.push(column),
            None => tables.push(Table::new(table_name, vec![column])),
        }
    }

    Ok(tables)
}

pub mod memory;

#[cfg(feature = "mysql-backend")]
pub mod mysql;

#[cfg(feature = "duckdb-backend")]
pub mod duckdb;

pub use memory::MemorySource;

#[cfg(feature = "mysql-backend")]
pub use mysql::{MySqlConnectionSettings, MySqlSource};

#[cfg(feature = "duckdb-backend")]
pub use self::duckdb::DuckDbSource;
