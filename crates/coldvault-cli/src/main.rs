//! Coldvault CLI - list Glacier vaults, run inventories and delete archives.

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod progress;

use std::process::ExitCode;

use clap::Parser;
use coldvault_core::GlacierClient;
use coldvault_core::VaultClient;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    logging::setup_logging(cli.debug);

    let formatter = output::create_formatter(cli.json, cli.debug > 0);
    let client_config = cli.client_config();
    let connect = || -> anyhow::Result<Box<dyn VaultClient>> {
        Ok(Box::new(GlacierClient::connect(&client_config)?))
    };

    match commands::dispatch(&cli, &*formatter, &connect) {
        Ok(outcome) => outcome.exit_code(cli.strict),
        Err(e) => {
            formatter.format_error(&e);
            ExitCode::FAILURE
        }
    }
}
