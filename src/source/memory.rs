//! In-memory schema source

use async_trait::async_trait;

use super::{SchemaSource, SourceError};
use crate::models::Table;

/// Schema source serving a fixed list of tables
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: Vec<Table>,
}

impl MemorySource {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl SchemaSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get_tables(&self) -> Result<Vec<Table>, SourceError> {
        Ok(self.tables.clone())
    }
}
