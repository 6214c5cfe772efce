//! Command line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[cfg(feature = "duckdb-backend")]
use super::config::DuckDbConfig;
use crate::export::GenerateSettings;
#[cfg(feature = "mysql-backend")]
use crate::source::MySqlConnectionSettings;

#[derive(Parser, Debug)]
#[command(
    name = "db2jsonschema",
    author,
    version,
    about = "convert database schema to json schema",
    long_about = None
)]
pub struct Cli {
    /// Path to configuration file (default: ./db2jsonschema.toml if present)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every backend
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Output file (stdout if not provided)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Pretty-print the document
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Regular expression attached to datetime columns
    #[arg(long, value_name = "REGEX", global = true)]
    pub datetime_pattern: Option<String>,

    /// Document title
    #[arg(long, global = true)]
    pub title: Option<String>,

    /// Document description
    #[arg(long, global = true)]
    pub description: Option<String>,

    /// Accept `RAW=...` fixture values for every column
    #[arg(long, global = true)]
    pub raw_fixtures: bool,
}

impl GenerateArgs {
    /// Override `settings` with the options given on the command line
    pub fn apply(&self, mut settings: GenerateSettings) -> GenerateSettings {
        if let Some(pattern) = &self.datetime_pattern {
            settings.datetime_pattern = pattern.clone();
        }
        if let Some(title) = &self.title {
            settings.title = Some(title.clone());
        }
        if let Some(description) = &self.description {
            settings.description = Some(description.clone());
        }
        if self.pretty {
            settings.pretty = true;
        }
        if self.raw_fixtures {
            settings.raw_fixtures = true;
        }
        settings
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// convert mysql schema to json schema
    #[cfg(feature = "mysql-backend")]
    Mysql(MySqlArgs),

    /// convert duckdb schema to json schema
    #[cfg(feature = "duckdb-backend")]
    Duckdb(DuckDbArgs),
}

#[cfg(feature = "mysql-backend")]
#[derive(Args, Debug, Default)]
pub struct MySqlArgs {
    /// mysql host [default: localhost]
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// mysql port [default: 3306]
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// mysql user [default: root]
    #[arg(short, long)]
    pub user: Option<String>,

    /// mysql password
    #[arg(short, long)]
    pub password: Option<String>,

    /// mysql database [default: information_schema]
    #[arg(short, long)]
    pub database: Option<String>,
}

#[cfg(feature = "mysql-backend")]
impl MySqlArgs {
    /// Override `settings` with the options given on the command line
    pub fn apply(&self, mut settings: MySqlConnectionSettings) -> MySqlConnectionSettings {
        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(user) = &self.user {
            settings.user = user.clone();
        }
        if let Some(password) = &self.password {
            settings.password = password.clone();
        }
        if let Some(database) = &self.database {
            settings.database = database.clone();
        }
        settings
    }
}

#[cfg(feature = "duckdb-backend")]
#[derive(Args, Debug, Default)]
pub struct DuckDbArgs {
    /// Path to the DuckDB database file
    pub path: Option<PathBuf>,

    /// Schema to describe [default: main]
    #[arg(short, long)]
    pub schema: Option<String>,
}

#[cfg(feature = "duckdb-backend")]
impl DuckDbArgs {
    /// Override `config` with the options given on the command line
    pub fn apply(&self, mut config: DuckDbConfig) -> DuckDbConfig {
        if let Some(path) = &self.path {
            config.path = Some(path.clone());
        }
        if let Some(schema) = &self.schema {
            config.schema = schema.clone();
        }
        config
    }
}
