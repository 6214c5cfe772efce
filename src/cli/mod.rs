//! CLI module for the db2jsonschema binary

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use args::Cli;
pub use error::CliError;
