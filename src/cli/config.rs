//! Configuration file loading
//!
//! Values are resolved in three layers: built-in defaults, then the TOML
//! file, then command line flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::CliError;
use crate::export::GenerateSettings;
#[cfg(feature = "mysql-backend")]
use crate::source::MySqlConnectionSettings;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "db2jsonschema.toml";

/// DuckDB section of the config file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DuckDbConfig {
    pub path: Option<PathBuf>,
    pub schema: String,
}

impl Default for DuckDbConfig {
    fn default() -> Self {
        Self {
            path: None,
            schema: "main".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub output: GenerateSettings,
    #[cfg(feature = "mysql-backend")]
    pub mysql: MySqlConnectionSettings,
    pub duckdb: DuckDbConfig,
}

impl FileConfig {
    /// Load `path`, or the default config file if it exists, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::ConfigRead(path.to_path_buf(), e.to_string()))?;
        toml::from_str(&content)
            .map_err(|e| CliError::ConfigParse(path.to_path_buf(), e.to_string()))
    }
}
