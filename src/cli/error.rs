//! CLI error type

use std::path::PathBuf;

use thiserror::Error;

use crate::export::GenerateError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read config file {0}: {1}")]
    ConfigRead(PathBuf, String),

    #[error("Invalid config file {0}: {1}")]
    ConfigParse(PathBuf, String),

    #[error("Failed to write output file {0}: {1}")]
    OutputWrite(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}
