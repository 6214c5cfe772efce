//! Export functionality
//!
//! Translates normalized tables into a JSON Schema (draft-07) document.

pub mod config;
pub mod error;
pub mod json_schema;

pub use config::{DEFAULT_DATETIME_PATTERN, GenerateSettings, GenerateSettingsBuilder};
pub use error::{GenerateError, GenerateResult};
pub use json_schema::{
    Document, JsonSchemaObject, JsonSchemaType, Properties, column_schema, table_schema,
    to_bytes, translate,
};
