//! db2jsonschema - describe relational database tables as JSON Schema
//!
//! Provides:
//! - Column type classification for vendor type descriptors
//! - Schema sources reading table metadata (MySQL, DuckDB, in-memory)
//! - Translation of tables into one draft-07 JSON Schema document
//!
//! ```rust
//! use db2jsonschema::export::{GenerateSettings, translate};
//! use db2jsonschema::models::{Column, Table};
//!
//! let users = Table::new(
//!     "users",
//!     vec![Column::from_raw_type("id", "int(11)").unwrap().with_nullable(false)],
//! );
//! let document = translate(&[users], &GenerateSettings::default()).unwrap();
//! assert!(document.definitions.contains("users"));
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod export;
pub mod generator;
pub mod import;
pub mod models;
pub mod source;

// Re-export commonly used types
pub use export::{Document, GenerateError, GenerateSettings, translate};
pub use generator::Generator;
pub use import::{ClassifiedType, UnsupportedTypeError, classify};
pub use models::{Column, ColumnType, Table};
pub use source::{MemorySource, SchemaSource, SourceError};

#[cfg(feature = "duckdb-backend")]
pub use source::DuckDbSource;
#[cfg(feature = "mysql-backend")]
pub use source::{MySqlConnectionSettings, MySqlSource};
