//! MySQL schema source
//!
//! Reads `information_schema.COLUMNS` for one schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, FromRow};
use tracing::{info, warn};

use super::{ColumnRow, SchemaSource, SourceError, group_rows};
use crate::models::Table;

// Text columns are cast to CHAR because MySQL 8 reports several
// information_schema columns with a binary collation.
const COLUMNS_QUERY: &str = "
    SELECT
        CAST(TABLE_NAME AS CHAR) AS table_name,
        CAST(COLUMN_NAME AS CHAR) AS column_name,
        CAST(COLUMN_TYPE AS CHAR) AS column_type,
        CAST(IS_NULLABLE AS CHAR) AS is_nullable,
        CAST(CHARACTER_MAXIMUM_LENGTH AS SIGNED) AS max_length,
        CAST(COLUMN_DEFAULT AS CHAR) AS column_default
    FROM information_schema.COLUMNS
    WHERE TABLE_SCHEMA = ?
    ORDER BY TABLE_NAME, ORDINAL_POSITION";

/// Connection settings for a MySQL server
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MySqlConnectionSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Schema whose tables are described, also used as the connection database
    pub database: String,
}

impl Default for MySqlConnectionSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: "information_schema".to_string(),
        }
    }
}

impl std::fmt::Debug for MySqlConnectionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

#[derive(Debug, FromRow)]
struct MySqlColumnRow {
    table_name: String,
    column_name: String,
    column_type: String,
    is_nullable: String,
    max_length: Option<i64>,
    column_default: Option<String>,
}

impl From<MySqlColumnRow> for ColumnRow {
    fn from(row: MySqlColumnRow) -> Self {
        ColumnRow {
            table_name: row.table_name,
            column_name: row.column_name,
            column_type: row.column_type,
            is_nullable: row.is_nullable,
            max_length: row.max_length.and_then(|len| u64::try_from(len).ok()),
            default: row.column_default,
        }
    }
}

/// Schema source backed by a MySQL server
#[derive(Debug, Clone)]
pub struct MySqlSource {
    settings: MySqlConnectionSettings,
}

impl MySqlSource {
    pub fn new(settings: MySqlConnectionSettings) -> Self {
        Self { settings }
    }

    fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.settings.host)
            .port(self.settings.port)
            .username(&self.settings.user)
            .database(&self.settings.database);

        if self.settings.password.is_empty() {
            options
        } else {
            options.password(&self.settings.password)
        }
    }
}

#[async_trait]
impl SchemaSource for MySqlSource {
    fn name(&self) -> &str {
        "mysql"
    }

    async fn get_tables(&self) -> Result<Vec<Table>, SourceError> {
        info!(
            host = %self.settings.host,
            port = self.settings.port,
            database = %self.settings.database,
            "Reading MySQL schema"
        );

        let mut conn = MySqlConnection::connect_with(&self.connect_options())
            .await
            .map_err(|e| SourceError::Connection(e.to_string()))?;

        let rows = sqlx::query_as::<_, MySqlColumnRow>(COLUMNS_QUERY)
            .bind(&self.settings.database)
            .fetch_all(&mut conn)
            .await
            .map_err(|e| SourceError::Query(e.to_string()));

        if let Err(e) = conn.close().await {
            warn!("Failed to close MySQL connection: {}", e);
        }

        let rows = rows?;
        if rows.is_empty() {
            warn!(database = %self.settings.database, "No columns found");
        }

        group_rows(rows.into_iter().map(ColumnRow::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = MySqlConnectionSettings::default();
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.port, 3306);
        assert_eq!(settings.user, "root");
        assert!(settings.password.is_empty());
        assert_eq!(settings.database, "information_schema");
    }

    #[test]
    fn test_debug_hides_password() {
        let settings = MySqlConnectionSettings {
            password: "hunter2".to_string(),
            ..Default::default()
        };
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("localhost"));
    }

    #[test]
    fn test_row_conversion() {
        let row = MySqlColumnRow {
            table_name: "users".to_string(),
            column_name: "email".to_string(),
            column_type: "varchar(255)".to_string(),
            is_nullable: "NO".to_string(),
            max_length: Some(255),
            column_default: None,
        };

        let row = ColumnRow::from(row);
        assert_eq!(row.max_length, Some(255));

        let column = row.into_column().unwrap();
        assert_eq!(column.max_length, Some(255));
        assert!(!column.nullable);
    }

    #[test]
    fn test_negative_length_is_dropped() {
        let row = MySqlColumnRow {
            table_name: "t".to_string(),
            column_name: "c".to_string(),
            column_type: "text".to_string(),
            is_nullable: "YES".to_string(),
            max_length: Some(-1),
            column_default: None,
        };
        assert_eq!(ColumnRow::from(row).max_length, None);
    }
}
