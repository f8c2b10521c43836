//! # Country Identifiers
//!
//! [`Ident`] is one record of the dataset: an official name and the three
//! ISO 3166-1 codes. Records are immutable once loaded; the registry hands
//! out shared references and never copies them.

use serde::{Deserialize, Serialize};

/// A country with its standard identifiers.
///
/// Canonical form of every string field is upper-case. The serialized
/// form uses the field names `name`, `alpha2`, `alpha3`, and `iso_num`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    /// Official country name (e.g. "CANADA").
    pub name: String,
    /// 2-letter code (e.g. "CA").
    pub alpha2: String,
    /// 3-letter code (e.g. "CAN").
    pub alpha3: String,
    /// Numeric code (e.g. 124).
    pub iso_num: u16,
}

impl Ident {
    /// Construct a record from its four identifiers.
    pub fn new(
        name: impl Into<String>,
        alpha2: impl Into<String>,
        alpha3: impl Into<String>,
        iso_num: u16,
    ) -> Self {
        Self {
            name: name.into(),
            alpha2: alpha2.into(),
            alpha3: alpha3.into(),
            iso_num,
        }
    }

    /// The numeric code as ISO writes it: three digits, zero-padded ("004").
    ///
    /// Codes above 999 are not assigned by ISO and are rendered as-is.
    pub fn iso_num_padded(&self) -> String {
        format!("{:03}", self.iso_num)
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}/{}/{})",
            self.name,
            self.alpha2,
            self.alpha3,
            self.iso_num_padded()
        )
    }
}
