//! # Lookup Fields
//!
//! The four identifiers a country record can be found by. Each one owns
//! exactly one index in [`crate::index::Indices`].

use serde::{Deserialize, Serialize};

/// An identifier kind, and therefore an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupField {
    /// Official country name, upper-case (e.g. "CANADA").
    Name,
    /// ISO 3166-1 alpha-2 code (e.g. "CA").
    Alpha2,
    /// ISO 3166-1 alpha-3 code (e.g. "CAN").
    Alpha3,
    /// ISO 3166-1 numeric code (e.g. 124).
    IsoNum,
}

impl LookupField {
    /// Return all lookup fields in index order.
    pub fn all() -> &'static [LookupField] {
        &[Self::Name, Self::Alpha2, Self::Alpha3, Self::IsoNum]
    }

    /// The total number of lookup fields.
    pub const COUNT: usize = 4;

    /// Whether keys for this field are normalized before use.
    ///
    /// Numeric codes are compared as integers and need no normalization.
    pub fn is_normalized(self) -> bool {
        !matches!(self, Self::IsoNum)
    }
}

impl std::fmt::Display for LookupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Alpha2 => "alpha2",
            Self::Alpha3 => "alpha3",
            Self::IsoNum => "iso_num",
        };
        write!(f, "{s}")
    }
}
