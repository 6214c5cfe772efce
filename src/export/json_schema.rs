//! JSON Schema export
//!
//! Builds one draft-07 document for a set of tables. Every table becomes an
//! array-typed property whose items reference the table's object schema
//! under `definitions`:
//!
//! ```json
//! {
//!   "$schema": "http://json-schema.org/draft-07/schema#",
//!   "type": "object",
//!   "properties": {
//!     "users": { "type": "array", "items": { "$ref": "#/definitions/users" } }
//!   },
//!   "definitions": {
//!     "users": {
//!       "type": "object",
//!       "title": "users",
//!       "properties": { "id": { "type": "integer" } },
//!       "required": ["id"]
//!     }
//!   }
//! }
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use super::config::GenerateSettings;
use super::error::{GenerateError, GenerateResult};
use crate::models::{Column, ColumnType, Table};

/// `$schema` identifier of every generated document
pub const SCHEMA_DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// Definition name of the shared raw fixture value schema
pub const RAW_FIXTURE_DEFINITION: &str = "testfixtures-raw";

/// Pattern accepted by the raw fixture escape hatch
pub const RAW_FIXTURE_PATTERN: &str = "RAW=.*";

/// Description attached to datetime columns
pub const DATETIME_DESCRIPTION: &str = "(datetime)";

/// JSON Schema primitive type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonSchemaType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl From<ColumnType> for JsonSchemaType {
    fn from(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Integer => JsonSchemaType::Integer,
            ColumnType::Float => JsonSchemaType::Number,
            ColumnType::Boolean => JsonSchemaType::Boolean,
            ColumnType::String
            | ColumnType::Enum
            | ColumnType::Date
            | ColumnType::Datetime
            | ColumnType::Json => JsonSchemaType::String,
        }
    }
}

/// Name to schema mapping that serializes in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<(String, JsonSchemaObject)>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a schema, returning `false` if the name is already taken
    pub fn insert(&mut self, name: impl Into<String>, schema: JsonSchemaObject) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push((name, schema));
        true
    }

    pub fn get(&self, name: &str) -> Option<&JsonSchemaObject> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, schema) in &self.0 {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}

/// A JSON Schema node
///
/// Only the keywords the generator emits are modelled; unset keywords are
/// left out of the serialized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSchemaObject {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<JsonSchemaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
    #[serde(skip_serializing_if = "Properties::is_empty")]
    pub definitions: Properties,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<JsonSchemaObject>>,
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<JsonSchemaObject>,
}

impl JsonSchemaObject {
    fn typed(schema_type: JsonSchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    fn reference_to(definition: &str) -> Self {
        Self {
            reference: Some(definition_pointer(definition)),
            ..Self::default()
        }
    }
}

/// A complete generated document
pub type Document = JsonSchemaObject;

/// JSON pointer to a definition, escaped per RFC 6901
pub fn definition_pointer(name: &str) -> String {
    format!("#/definitions/{}", name.replace('~', "~0").replace('/', "~1"))
}

/// Translate one column into its schema
///
/// The base type follows [`JsonSchemaType::from`]; constraints are added for
/// enum literals, positive maximum lengths, dates and datetimes.
pub fn column_schema(column: &Column, settings: &GenerateSettings) -> JsonSchemaObject {
    let mut schema = JsonSchemaObject::typed(column.column_type.into());

    if !column.enum_values.is_empty() {
        schema.enum_values = column.enum_values.clone();
    }

    if let Some(max_length) = column.max_length.filter(|len| *len > 0) {
        schema.max_length = Some(max_length);
    }

    match column.column_type {
        ColumnType::Date => schema.format = Some("date".to_string()),
        ColumnType::Datetime => {
            schema.pattern = Some(settings.datetime_pattern.clone());
            schema.description = Some(DATETIME_DESCRIPTION.to_string());
        }
        _ => {}
    }

    schema
}

fn check_column(table: &Table, column: &Column) -> GenerateResult<()> {
    let is_enum = column.column_type == ColumnType::Enum;
    let reason = match (is_enum, column.enum_values.is_empty()) {
        (true, true) => "enum column without values",
        (false, false) => "enum values on a non-enum column",
        _ => return Ok(()),
    };
    Err(GenerateError::InvalidColumn {
        table: table.name.clone(),
        column: column.name.clone(),
        reason: reason.to_string(),
    })
}

/// Translate one table into its object schema
///
/// Columns appear in table order. A column is required when it is not
/// nullable and has no default.
pub fn table_schema(
    table: &Table,
    settings: &GenerateSettings,
) -> GenerateResult<JsonSchemaObject> {
    let mut schema = JsonSchemaObject::typed(JsonSchemaType::Object);
    schema.title = Some(table.name.clone());

    for column in &table.columns {
        check_column(table, column)?;

        let mut property = column_schema(column, settings);
        if settings.raw_fixtures {
            property = JsonSchemaObject {
                any_of: vec![property, JsonSchemaObject::reference_to(RAW_FIXTURE_DEFINITION)],
                ..JsonSchemaObject::default()
            };
        }

        if !schema.properties.insert(column.name.clone(), property) {
            return Err(GenerateError::InvalidColumn {
                table: table.name.clone(),
                column: column.name.clone(),
                reason: "duplicate column name".to_string(),
            });
        }
    }
    schema.required = table
        .required_columns()
        .into_iter()
        .map(String::from)
        .collect();

    debug!(
        table = %table.name,
        columns = table.columns.len(),
        required = schema.required.len(),
        "Translated table"
    );

    Ok(schema)
}

/// Translate all tables into one document
///
/// Fails on the first invalid table; no partial document is returned. With
/// `raw_fixtures` on, `testfixtures-raw` is not accepted as a table name.
pub fn translate(tables: &[Table], settings: &GenerateSettings) -> GenerateResult<Document> {
    let mut document = JsonSchemaObject::typed(JsonSchemaType::Object);
    document.schema = Some(SCHEMA_DRAFT_07.to_string());
    document.title = settings.title.clone();
    document.description = settings.description.clone();

    if settings.raw_fixtures {
        let mut raw = JsonSchemaObject::typed(JsonSchemaType::String);
        raw.pattern = Some(RAW_FIXTURE_PATTERN.to_string());
        document.definitions.insert(RAW_FIXTURE_DEFINITION, raw);
    }

    for table in tables {
        if settings.raw_fixtures && table.name == RAW_FIXTURE_DEFINITION {
            return Err(GenerateError::ReservedTableName(table.name.clone()));
        }
        let schema = table_schema(table, settings)?;

        let mut rows = JsonSchemaObject::typed(JsonSchemaType::Array);
        rows.items = Some(Box::new(JsonSchemaObject::reference_to(&table.name)));

        if !document.properties.insert(table.name.clone(), rows)
            || !document.definitions.insert(table.name.clone(), schema)
        {
            return Err(GenerateError::DuplicateTable(table.name.clone()));
        }
    }

    Ok(document)
}

/// Serialize a document to JSON bytes
pub fn to_bytes(document: &Document, pretty: bool) -> GenerateResult<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(document)?
    } else {
        serde_json::to_vec(document)?
    };
    Ok(bytes)
}
