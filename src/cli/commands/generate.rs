//! Generate command
//!
//! Resolves settings from the config file and flags, reads the selected
//! backend and writes the document.

use tracing::debug;

use crate::cli::args::{Cli, Command};
use crate::cli::config::FileConfig;
use crate::cli::error::CliError;
use crate::cli::output::write_output;
use crate::export::GenerateSettings;
use crate::generator::Generator;
use crate::source::SchemaSource;
#[cfg(feature = "duckdb-backend")]
use crate::source::DuckDbSource;
#[cfg(feature = "mysql-backend")]
use crate::source::MySqlSource;

/// Run the command selected on the command line
pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let file = FileConfig::load(cli.config.as_deref())?;
    let settings = cli.generate.apply(file.output.clone());
    debug!(?settings, "Resolved generation settings");

    let document = match &cli.command {
        #[cfg(feature = "mysql-backend")]
        Command::Mysql(args) => {
            let connection = args.apply(file.mysql.clone());
            debug!(?connection, "Resolved MySQL settings");
            generate(settings, MySqlSource::new(connection)).await?
        }
        #[cfg(feature = "duckdb-backend")]
        Command::Duckdb(args) => {
            let config = args.apply(file.duckdb.clone());
            let path = config.path.ok_or_else(|| {
                CliError::InvalidArgument(
                    "a DuckDB database path is required (argument or [duckdb] path)".to_string(),
                )
            })?;
            generate(settings, DuckDbSource::new(path, config.schema)).await?
        }
    };

    write_output(&document, cli.generate.output.as_deref())
}

async fn generate<S: SchemaSource>(
    settings: GenerateSettings,
    source: S,
) -> Result<Vec<u8>, CliError> {
    Ok(Generator::new(settings, source).generate().await?)
}
