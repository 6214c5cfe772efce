//! Settings for JSON Schema generation

use serde::{Deserialize, Serialize};

/// Pattern attached to datetime columns unless overridden
pub const DEFAULT_DATETIME_PATTERN: &str =
    "[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}";

/// Settings for JSON Schema generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateSettings {
    /// Regular expression attached as `pattern` to datetime columns
    pub datetime_pattern: String,

    /// Document level `title`
    pub title: Option<String>,

    /// Document level `description`
    pub description: Option<String>,

    /// Wrap every column schema in `anyOf` with a `RAW=...` escape hatch
    /// so fixture files can carry raw SQL expressions
    pub raw_fixtures: bool,

    /// Pretty-print the serialized document
    pub pretty: bool,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            datetime_pattern: DEFAULT_DATETIME_PATTERN.to_string(),
            title: None,
            description: None,
            raw_fixtures: false,
            pretty: false,
        }
    }
}

impl GenerateSettings {
    /// Create settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom settings
    pub fn builder() -> GenerateSettingsBuilder {
        GenerateSettingsBuilder::default()
    }
}

/// Builder for GenerateSettings
#[derive(Debug, Default)]
pub struct GenerateSettingsBuilder {
    settings: GenerateSettings,
}

impl GenerateSettingsBuilder {
    /// Set the datetime pattern
    pub fn datetime_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.settings.datetime_pattern = pattern.into();
        self
    }

    /// Set the document title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.settings.title = Some(title.into());
        self
    }

    /// Set the document description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.settings.description = Some(description.into());
        self
    }

    /// Enable or disable the raw fixture escape hatch
    pub fn raw_fixtures(mut self, enabled: bool) -> Self {
        self.settings.raw_fixtures = enabled;
        self
    }

    /// Enable or disable pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.settings.pretty = pretty;
        self
    }

    /// Build the settings
    pub fn build(self) -> GenerateSettings {
        self.settings
    }
}
