//! Toae Directory CLI entry point.
//!
//! Startup sequence:
//!   1. Parse arguments
//!   2. Init logger from `TOAE_LOG_*`
//!   3. Build the namespace directory from `TOAE_*`
//!   4. Run the command against it

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use toae_directory::cli::{commands, handle_error, Cli, Commands};
use toae_directory::infrastructure::logging::{LogConfig, LoggerImpl};
use toae_directory::NamespaceDirectory;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli.command, cli.json) {
        handle_error(&err, cli.json);
    }
}

fn run(command: Commands, json: bool) -> anyhow::Result<()> {
    let log_config = LogConfig::from_env().context("Failed to load logging configuration")?;
    LoggerImpl::init(&log_config).context("Failed to initialize logging")?;

    let directory = Arc::new(NamespaceDirectory::from_env());

    match command {
        Commands::Namespaces(args) => commands::namespaces::execute(&directory, args, json),
        Commands::Show(args) => commands::show::execute(&directory, args, json),
        Commands::Resolve(args) => commands::resolve::execute(&directory, args, json),
        Commands::Mode(args) => commands::mode::execute(&directory, args, json),
    }
}
