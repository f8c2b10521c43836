#![deny(missing_docs)]

//! # ctry-core: ISO 3166-1 Country Registry
//!
//! A static reference-data library: a fixed dataset of countries (official
//! name, 2-letter code, 3-letter code, numeric code) is compiled into the
//! binary, indexed once, and queried case-insensitively by any of the four
//! identifiers.
//!
//! ```
//! let canada = ctry_core::by_name("  CaNaDa ").unwrap();
//! assert_eq!(canada.alpha3, "CAN");
//! assert_eq!(ctry_core::by_iso_num(124).unwrap(), canada);
//! assert!(!ctry_core::exists("wakanda"));
//! ```
//!
//! ## Design Principles
//!
//! 1. **One owner.** [`Registry`] owns the canonical record list; the four
//!    indices store offsets into it, never copies.
//!
//! 2. **Immutable after construction.** Nothing mutates a registry once
//!    built. The process-wide instance behind [`lookup`] is created under a
//!    `OnceLock` and then shared read-only across threads.
//!
//! 3. **One runtime error.** Every lookup fails only with
//!    [`LookupError::NotFound`]. Dataset problems are [`DatasetError`]s and
//!    surface before any query can run.

pub mod dataset;
pub mod error;
pub mod field;
pub mod ident;
pub mod index;
pub mod lookup;
pub mod registry;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{CtryError, DatasetError, LookupError};
pub use field::LookupField;
pub use ident::Ident;
pub use index::{normalize, Collision, Indices};
pub use lookup::{
    by_alpha2, by_alpha3, by_iso_num, by_name, dataset_size, exists, exists_alpha2,
    exists_alpha3, exists_iso_num, init, list, registry,
};
pub use registry::Registry;
