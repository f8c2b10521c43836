//! # Error Hierarchy
//!
//! Structured error types for the country registry, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! There are exactly two kinds of failure:
//!
//! - [`LookupError`] is the only error a query can return. A miss is a miss:
//!   a five-character "alpha-2" code is not a format error, it is simply a
//!   key that is not in the index.
//! - [`DatasetError`] is raised while loading or validating a dataset. For
//!   the embedded dataset this is a build defect and the process-wide
//!   registry refuses to start (see [`crate::lookup`]).

use thiserror::Error;

use crate::field::LookupField;

/// Top-level error type for the country registry.
#[derive(Error, Debug)]
pub enum CtryError {
    /// A lookup did not match any record.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Loading or validating a dataset failed.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// The single runtime error: the normalized key is absent from the index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No record carries this identifier.
    #[error("country not found: no record with {field} \"{key}\"")]
    NotFound {
        /// The index that was consulted.
        field: LookupField,
        /// The key as it was looked up, after normalization.
        key: String,
    },
}

impl LookupError {
    /// The index that was consulted.
    pub fn field(&self) -> LookupField {
        match self {
            Self::NotFound { field, .. } => *field,
        }
    }
}

/// Errors while loading or validating a serialized dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The bytes are not a JSON array of well-formed records.
    #[error("failed to deserialize country dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// A record violates the shape constraints of its fields.
    #[error("invalid record at position {position} ({name:?}): {reason}")]
    InvalidRecord {
        /// Offset of the record in the dataset.
        position: usize,
        /// The record's name as found in the dataset.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Two records map to the same normalized key.
    #[error("duplicate {field} key \"{key}\" at positions {first} and {second}")]
    DuplicateKey {
        /// The index in which the collision occurs.
        field: LookupField,
        /// The normalized key.
        key: String,
        /// Offset of the record that would be overwritten.
        first: usize,
        /// Offset of the record that wins.
        second: usize,
    },
}
