//! Command-line interface for inspecting the namespace directory.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{mode::ModeArgs, namespaces::NamespacesArgs, resolve::ResolveArgs, show::ShowArgs};

/// Inspect the datastore configuration resolved for each namespace
#[derive(Debug, Parser)]
#[command(name = "toae-directory", version, about)]
pub struct Cli {
    /// Emit JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List tenant namespaces (the global namespace is never listed)
    Namespaces(NamespacesArgs),
    /// Show the datastore configuration of a namespace
    Show(ShowArgs),
    /// Resolve the namespace that owns an identity
    Resolve(ResolveArgs),
    /// Show the tenancy mode of this deployment
    Mode(ModeArgs),
}

/// Print `err` in the selected format and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json: bool) -> ! {
    if json {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{body}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1)
}
