//! # Lookup and Exists Subcommands
//!
//! `ctry lookup` prints the matching record; `ctry exists` prints `true` or
//! `false`. Both exit with 1 when the key is not found.

use anyhow::Result;
use clap::Args;

use ctry_core::Registry;

use crate::{resolve, KeyKind};

/// Arguments for the `ctry lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Country name or code.
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Which identifier KEY is.
    #[arg(long, value_enum, default_value_t = KeyKind::Auto)]
    pub by: KeyKind,

    /// Print the record as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `ctry exists` subcommand.
#[derive(Args, Debug)]
pub struct ExistsArgs {
    /// Country name or code.
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Which identifier KEY is.
    #[arg(long, value_enum, default_value_t = KeyKind::Auto)]
    pub by: KeyKind,
}

/// Execute the lookup subcommand.
///
/// Returns exit code: 0 when found, 1 when not found.
pub fn run_lookup(args: &LookupArgs, registry: &Registry) -> Result<u8> {
    match render_lookup(args, registry)? {
        Ok(out) => {
            println!("{out}");
            Ok(0)
        }
        Err(miss) => {
            eprintln!("{miss}");
            Ok(1)
        }
    }
}

/// Render the lookup result: the record on a hit, the error message on a miss.
pub fn render_lookup(args: &LookupArgs, registry: &Registry) -> Result<Result<String, String>> {
    let found = match resolve(registry, args.by, &args.key)? {
        Ok(ident) => ident,
        Err(e) => return Ok(Err(e.to_string())),
    };
    tracing::debug!(key = %args.key, alpha3 = %found.alpha3, "lookup hit");
    let out = if args.json {
        serde_json::to_string_pretty(found)?
    } else {
        found.to_string()
    };
    Ok(Ok(out))
}

/// Execute the exists subcommand.
///
/// Returns exit code: 0 when the key exists, 1 otherwise.
pub fn run_exists(args: &ExistsArgs, registry: &Registry) -> Result<u8> {
    let exists = resolve(registry, args.by, &args.key)?.is_ok();
    println!("{exists}");
    Ok(if exists { 0 } else { 1 })
}
