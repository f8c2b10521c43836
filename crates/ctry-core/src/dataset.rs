//! # Dataset Loader
//!
//! The country dataset is a JSON array of records compiled into the binary.
//! [`load`] turns those bytes into the canonical, ordered record list. It is
//! all-or-nothing: one malformed record fails the whole load.
//!
//! [`validate`] is a stricter, opt-in pass over a loaded list that enforces
//! the shape of every field. It is not part of [`load`], so datasets that
//! only satisfy the wire format still load.

use crate::error::DatasetError;
use crate::ident::Ident;

/// The embedded ISO 3166-1 dataset.
pub const EMBEDDED: &[u8] = include_bytes!("../data/countries.json");

/// Deserialize a dataset, preserving source order.
///
/// # Errors
///
/// Returns [`DatasetError::Json`] if the bytes are not valid JSON, are not
/// an array, or any element has a missing or mistyped field.
pub fn load(bytes: &[u8]) -> Result<Vec<Ident>, DatasetError> {
    let idents: Vec<Ident> = serde_json::from_slice(bytes)?;
    Ok(idents)
}

/// Check every record's fields against their canonical shape.
///
/// - `name` is non-empty after trimming.
/// - `alpha2` is exactly 2 ASCII letters after trimming.
/// - `alpha3` is exactly 3 ASCII letters after trimming.
/// - `iso_num` is not 0, which no country is assigned.
///
/// # Errors
///
/// Returns [`DatasetError::InvalidRecord`] for the first offending record.
pub fn validate(idents: &[Ident]) -> Result<(), DatasetError> {
    match violations(idents).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Every record that fails the checks of [`validate`], in dataset order.
pub fn violations(idents: &[Ident]) -> Vec<DatasetError> {
    idents
        .iter()
        .enumerate()
        .filter_map(|(position, ident)| {
            shape_violation(ident).map(|reason| DatasetError::InvalidRecord {
                position,
                name: ident.name.clone(),
                reason,
            })
        })
        .collect()
}

fn shape_violation(ident: &Ident) -> Option<String> {
    if ident.name.trim().is_empty() {
        return Some("name must be non-empty".to_string());
    }
    if !is_code(&ident.alpha2, 2) {
        return Some(format!(
            "alpha2 must be exactly 2 ASCII letters, got {:?}",
            ident.alpha2
        ));
    }
    if !is_code(&ident.alpha3, 3) {
        return Some(format!(
            "alpha3 must be exactly 3 ASCII letters, got {:?}",
            ident.alpha3
        ));
    }
    if ident.iso_num == 0 {
        return Some("iso_num 0 is reserved".to_string());
    }
    None
}

fn is_code(s: &str, len: usize) -> bool {
    let s = s.trim();
    s.len() == len && s.bytes().all(|b| b.is_ascii_alphabetic())
}
