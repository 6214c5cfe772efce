//! db2jsonschema command line entry point

use std::process::ExitCode;

use clap::Parser;

use db2jsonschema::cli::Cli;
use db2jsonschema::cli::commands;
use db2jsonschema::cli::logging::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
