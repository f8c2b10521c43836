//! # ctry CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ctry_cli::check::{run_check, CheckArgs};
use ctry_cli::list::{run_list, ListArgs};
use ctry_cli::lookup::{run_exists, run_lookup, ExistsArgs, LookupArgs};

/// Country registry CLI.
///
/// Looks up ISO 3166-1 countries by name, alpha-2, alpha-3, or numeric
/// code, and validates the country dataset.
#[derive(Parser, Debug)]
#[command(name = "ctry", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find a country by name or code.
    Lookup(LookupArgs),

    /// Check whether a country exists; exits 1 if it does not.
    Exists(ExistsArgs),

    /// List every country in the dataset.
    List(ListArgs),

    /// Validate the embedded dataset or a candidate dataset file.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Lookup(args) => run_lookup(&args, ctry_core::registry()),
        Commands::Exists(args) => run_exists(&args, ctry_core::registry()),
        Commands::List(args) => run_list(&args, ctry_core::registry()),
        Commands::Check(args) => run_check(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
