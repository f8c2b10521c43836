//! # List Subcommand
//!
//! Enumerates the dataset as an aligned table or a JSON array.

use anyhow::Result;
use clap::{Args, ValueEnum};

use ctry_core::{Ident, Registry};

/// Sort order for `ctry list`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Dataset order.
    Dataset,
    /// By official name.
    Name,
    /// By 2-letter code.
    Alpha2,
    /// By 3-letter code.
    Alpha3,
    /// By numeric code.
    IsoNum,
}

/// Arguments for the `ctry list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print records as a JSON array.
    #[arg(long)]
    pub json: bool,

    /// Sort order.
    #[arg(long, value_enum, default_value_t = SortKey::Dataset)]
    pub sort_by: SortKey,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, registry: &Registry) -> Result<u8> {
    println!("{}", render_list(args, registry)?);
    Ok(0)
}

/// Render the listing.
pub fn render_list(args: &ListArgs, registry: &Registry) -> Result<String> {
    let mut idents: Vec<&Ident> = registry.iter().collect();
    match args.sort_by {
        SortKey::Dataset => {}
        SortKey::Name => idents.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Alpha2 => idents.sort_by(|a, b| a.alpha2.cmp(&b.alpha2)),
        SortKey::Alpha3 => idents.sort_by(|a, b| a.alpha3.cmp(&b.alpha3)),
        SortKey::IsoNum => idents.sort_by_key(|i| i.iso_num),
    }

    if args.json {
        return Ok(serde_json::to_string_pretty(&idents)?);
    }

    let lines: Vec<String> = idents
        .iter()
        .map(|i| {
            format!(
                "{:<2}  {:<3}  {}  {}",
                i.alpha2,
                i.alpha3,
                i.iso_num_padded(),
                i.name
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
