//! Generation pipeline
//!
//! Reads every table from a [`SchemaSource`], translates them into one JSON
//! Schema document and serializes it. A run either produces the whole
//! document or fails without output.

use std::time::Instant;

use tracing::info;

use crate::export::{Document, GenerateResult, GenerateSettings, to_bytes, translate};
use crate::source::SchemaSource;

/// Runs a schema source through the JSON Schema translator
pub struct Generator<S> {
    settings: GenerateSettings,
    source: S,
}

impl<S: SchemaSource> Generator<S> {
    pub fn new(settings: GenerateSettings, source: S) -> Self {
        Self { settings, source }
    }

    /// Read the source and build the document
    pub async fn document(&self) -> GenerateResult<Document> {
        let started = Instant::now();
        let tables = self.source.get_tables().await?;
        let document = translate(&tables, &self.settings)?;

        info!(
            source = self.source.name(),
            tables = tables.len(),
            columns = tables.iter().map(|t| t.columns.len()).sum::<usize>(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Generated JSON Schema"
        );

        Ok(document)
    }

    /// Read the source, build the document and serialize it
    pub async fn generate(&self) -> GenerateResult<Vec<u8>> {
        let document = self.document().await?;
        to_bytes(&document, self.settings.pretty)
    }
}
