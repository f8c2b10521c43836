//! # ctry-cli: CLI Tool for the Country Registry
//!
//! Provides the `ctry` command-line interface over [`ctry_core`].
//!
//! ## Subcommands
//!
//! - `ctry lookup`: Find a country by name or code.
//! - `ctry exists`: Existence check, reported through the exit code.
//! - `ctry list`: Enumerate the dataset.
//! - `ctry check`: Strict validation of the embedded or a candidate dataset.
//!
//! ```bash
//! ctry lookup canada
//! ctry lookup 124 --json
//! ctry exists xx --by alpha2
//! ctry check --file data/countries.json
//! ```
//!
//! Exit codes: 0 on success, 1 when a key is not found or a check fails,
//! 2 on operational error.

pub mod check;
pub mod list;
pub mod lookup;

use anyhow::{Context, Result};
use clap::ValueEnum;

use ctry_core::{Ident, LookupError, LookupField, Registry};

/// Which identifier a command-line key is.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Infer from the key: digits are a numeric code, two characters an
    /// alpha-2 code, three an alpha-3 code, anything else a name.
    Auto,
    /// Official country name.
    Name,
    /// 2-letter code.
    Alpha2,
    /// 3-letter code.
    Alpha3,
    /// Numeric code.
    IsoNum,
}

impl KeyKind {
    /// Resolve `Auto` against a concrete key.
    pub fn field_for(self, key: &str) -> LookupField {
        match self {
            Self::Name => LookupField::Name,
            Self::Alpha2 => LookupField::Alpha2,
            Self::Alpha3 => LookupField::Alpha3,
            Self::IsoNum => LookupField::IsoNum,
            Self::Auto => {
                let key = key.trim();
                if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
                    LookupField::IsoNum
                } else {
                    match key.chars().count() {
                        2 => LookupField::Alpha2,
                        3 => LookupField::Alpha3,
                        _ => LookupField::Name,
                    }
                }
            }
        }
    }
}

/// Look `key` up in `registry` by the field `kind` selects.
///
/// The outer `Result` is an operational error (a key given with
/// `--by iso-num` that is not a `u16`); the inner one is the lookup outcome.
/// Auto-detected digits too large for a numeric code are a plain miss.
pub fn resolve<'r>(
    registry: &'r Registry,
    kind: KeyKind,
    key: &str,
) -> Result<Result<&'r Ident, LookupError>> {
    Ok(match kind.field_for(key) {
        LookupField::Name => registry.by_name(key),
        LookupField::Alpha2 => registry.by_alpha2(key),
        LookupField::Alpha3 => registry.by_alpha3(key),
        LookupField::IsoNum => match key.trim().parse::<u16>() {
            Ok(n) => registry.by_iso_num(n),
            // auto-detected digits that overflow u16 name no country
            Err(_) if kind == KeyKind::Auto => Err(LookupError::NotFound {
                field: LookupField::IsoNum,
                key: key.trim().to_string(),
            }),
            Err(e) => {
                return Err(e).with_context(|| format!("not a numeric country code: {key:?}"))
            }
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_detects_field() {
        assert_eq!(KeyKind::Auto.field_for("124"), LookupField::IsoNum);
        assert_eq!(KeyKind::Auto.field_for(" 4 "), LookupField::IsoNum);
        assert_eq!(KeyKind::Auto.field_for("ca"), LookupField::Alpha2);
        assert_eq!(KeyKind::Auto.field_for(" can "), LookupField::Alpha3);
        assert_eq!(KeyKind::Auto.field_for("canada"), LookupField::Name);
        assert_eq!(KeyKind::Auto.field_for(""), LookupField::Name);
    }

    #[test]
    fn explicit_kind_wins() {
        assert_eq!(KeyKind::Name.field_for("124"), LookupField::Name);
        assert_eq!(KeyKind::Alpha3.field_for("ca"), LookupField::Alpha3);
    }

    #[test]
    fn resolve_against_registry() {
        let registry = ctry_core::registry();
        let canada = resolve(registry, KeyKind::Auto, "canada").unwrap().unwrap();
        assert_eq!(canada.iso_num, 124);
        assert_eq!(
            resolve(registry, KeyKind::Auto, "124").unwrap().unwrap(),
            canada
        );
        assert!(resolve(registry, KeyKind::Auto, "xx").unwrap().is_err());
    }

    #[test]
    fn resolve_rejects_non_numeric_code() {
        let registry = ctry_core::registry();
        assert!(resolve(registry, KeyKind::IsoNum, "ca").is_err());
        assert!(resolve(registry, KeyKind::IsoNum, "70000").is_err());
    }

    #[test]
    fn resolve_auto_oversized_number_is_not_found() {
        let registry = ctry_core::registry();
        let miss = resolve(registry, KeyKind::Auto, " 70000 ").unwrap().unwrap_err();
        assert_eq!(
            miss,
            LookupError::NotFound {
                field: LookupField::IsoNum,
                key: "70000".to_string(),
            }
        );
    }
}
