//! # Index Builder
//!
//! Four lookup tables over the canonical record list, one per
//! [`LookupField`]. Values are offsets into the list rather than references,
//! so the indices carry no lifetime and the list stays the single owner of
//! every record.
//!
//! ## Key normalization
//!
//! String keys are trimmed and upper-cased with [`normalize`] both when the
//! index is built and on every query. Numeric codes are used as-is.
//!
//! ## Collisions
//!
//! If two records share a normalized key, the later record wins and the
//! earlier one is no longer reachable through that index. This is not an
//! error; [`Indices::collisions`] reports such keys for callers that want a
//! strict uniqueness check.

use std::collections::HashMap;

use crate::field::LookupField;
use crate::ident::Ident;

/// Normalize a string key: trim surrounding whitespace, then upper-case.
pub fn normalize(key: &str) -> String {
    key.trim().to_uppercase()
}

/// The four lookup tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indices {
    by_name: HashMap<String, usize>,
    by_alpha2: HashMap<String, usize>,
    by_alpha3: HashMap<String, usize>,
    by_iso_num: HashMap<u16, usize>,
}

/// A key shared by more than one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// The index in which the collision occurs.
    pub field: LookupField,
    /// The normalized key (numeric codes rendered in decimal).
    pub key: String,
    /// Offset of the record that is overwritten.
    pub first: usize,
    /// Offset of the record that wins.
    pub second: usize,
}

impl Indices {
    /// Build all four indices from the canonical list.
    ///
    /// Deterministic and side-effect free apart from debug tracing of
    /// overwritten keys.
    pub fn build(idents: &[Ident]) -> Self {
        let n = idents.len();
        let mut indices = Self {
            by_name: HashMap::with_capacity(n),
            by_alpha2: HashMap::with_capacity(n),
            by_alpha3: HashMap::with_capacity(n),
            by_iso_num: HashMap::with_capacity(n),
        };

        for (i, ident) in idents.iter().enumerate() {
            insert(&mut indices.by_name, LookupField::Name, normalize(&ident.name), i);
            insert(&mut indices.by_alpha2, LookupField::Alpha2, normalize(&ident.alpha2), i);
            insert(&mut indices.by_alpha3, LookupField::Alpha3, normalize(&ident.alpha3), i);
            insert(&mut indices.by_iso_num, LookupField::IsoNum, ident.iso_num, i);
        }

        tracing::debug!(
            records = n,
            names = indices.by_name.len(),
            alpha2 = indices.by_alpha2.len(),
            alpha3 = indices.by_alpha3.len(),
            iso_num = indices.by_iso_num.len(),
            "built country indices"
        );

        indices
    }

    /// Every key that more than one record maps to, in dataset order.
    ///
    /// A key shared by three records yields two collisions, one per
    /// overwrite.
    pub fn collisions(idents: &[Ident]) -> Vec<Collision> {
        let mut out = Vec::new();
        let mut seen: [HashMap<String, usize>; LookupField::COUNT] = Default::default();

        for (i, ident) in idents.iter().enumerate() {
            for (slot, field) in LookupField::all().iter().enumerate() {
                let raw = match field {
                    LookupField::Name => ident.name.clone(),
                    LookupField::Alpha2 => ident.alpha2.clone(),
                    LookupField::Alpha3 => ident.alpha3.clone(),
                    LookupField::IsoNum => ident.iso_num.to_string(),
                };
                let key = if field.is_normalized() { normalize(&raw) } else { raw };
                if let Some(first) = seen[slot].insert(key.clone(), i) {
                    out.push(Collision {
                        field: *field,
                        key,
                        first,
                        second: i,
                    });
                }
            }
        }

        out
    }

    /// Resolve a normalized key in the given string index.
    ///
    /// Returns `None` for [`LookupField::IsoNum`]; use
    /// [`Indices::position_by_iso_num`] for numeric codes.
    pub fn position(&self, field: LookupField, normalized: &str) -> Option<usize> {
        let map = match field {
            LookupField::Name => &self.by_name,
            LookupField::Alpha2 => &self.by_alpha2,
            LookupField::Alpha3 => &self.by_alpha3,
            LookupField::IsoNum => return None,
        };
        map.get(normalized).copied()
    }

    /// Resolve a numeric code.
    pub fn position_by_iso_num(&self, iso_num: u16) -> Option<usize> {
        self.by_iso_num.get(&iso_num).copied()
    }

    /// Raw name index: normalized name to offset.
    pub fn by_name(&self) -> &HashMap<String, usize> {
        &self.by_name
    }

    /// Raw alpha-2 index: normalized code to offset.
    pub fn by_alpha2(&self) -> &HashMap<String, usize> {
        &self.by_alpha2
    }

    /// Raw alpha-3 index: normalized code to offset.
    pub fn by_alpha3(&self) -> &HashMap<String, usize> {
        &self.by_alpha3
    }

    /// Raw numeric index: code to offset.
    pub fn by_iso_num(&self) -> &HashMap<u16, usize> {
        &self.by_iso_num
    }
}

fn insert<K>(map: &mut HashMap<K, usize>, field: LookupField, key: K, offset: usize)
where
    K: std::hash::Hash + Eq + std::fmt::Display,
{
    if let Some(previous) = map.get(&key) {
        tracing::debug!(%field, %key, previous, offset, "duplicate key, later record wins");
    }
    map.insert(key, offset);
}
