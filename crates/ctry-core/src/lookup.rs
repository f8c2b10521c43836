//! # Process-Wide Lookup API
//!
//! Free functions over a single [`Registry`] built from the embedded
//! dataset on first use. Initialization happens at most once, under a
//! [`OnceLock`], and completes before any caller can observe the registry.
//!
//! ## Initialization failure
//!
//! A malformed embedded dataset is a build defect, not a runtime condition.
//! The first call into this module panics with the deserialization error
//! rather than serving lookups from a partial dataset. Call [`init`] at
//! program start to surface such a defect immediately. Callers that need a
//! `Result` instead can build their own with [`Registry::embedded`].

use std::sync::OnceLock;

use crate::error::LookupError;
use crate::ident::Ident;
use crate::registry::Registry;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, built from the embedded dataset on first use.
///
/// # Panics
///
/// Panics if the embedded dataset fails to deserialize.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        let registry = Registry::embedded()
            .unwrap_or_else(|e| panic!("failed to load embedded country dataset: {e}"));
        tracing::info!(records = registry.len(), "country registry initialized");
        registry
    })
}

/// Force initialization of the process-wide registry.
///
/// # Panics
///
/// Panics if the embedded dataset fails to deserialize.
pub fn init() {
    registry();
}

/// Find a country by name, ignoring case and surrounding whitespace.
pub fn by_name(name: &str) -> Result<&'static Ident, LookupError> {
    registry().by_name(name)
}

/// Find a country by its 2-letter code, ignoring case and surrounding whitespace.
pub fn by_alpha2(code: &str) -> Result<&'static Ident, LookupError> {
    registry().by_alpha2(code)
}

/// Find a country by its 3-letter code, ignoring case and surrounding whitespace.
pub fn by_alpha3(code: &str) -> Result<&'static Ident, LookupError> {
    registry().by_alpha3(code)
}

/// Find a country by its numeric code.
pub fn by_iso_num(iso_num: u16) -> Result<&'static Ident, LookupError> {
    registry().by_iso_num(iso_num)
}

/// Whether a country with this name exists.
pub fn exists(name: &str) -> bool {
    registry().exists(name)
}

/// Whether a country with this 2-letter code exists.
pub fn exists_alpha2(code: &str) -> bool {
    registry().exists_alpha2(code)
}

/// Whether a country with this 3-letter code exists.
pub fn exists_alpha3(code: &str) -> bool {
    registry().exists_alpha3(code)
}

/// Whether a country with this numeric code exists.
pub fn exists_iso_num(iso_num: u16) -> bool {
    registry().exists_iso_num(iso_num)
}

/// Number of records in the embedded dataset.
pub fn dataset_size() -> usize {
    registry().len()
}

/// All records, in dataset order.
pub fn list() -> &'static [Ident] {
    registry().idents()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_a_singleton() {
        assert!(std::ptr::eq(registry(), registry()));
    }

    #[test]
    fn free_functions_delegate_to_registry() {
        init();
        let canada = by_name("canada").unwrap();
        assert_eq!(by_alpha2("CA").unwrap(), canada);
        assert_eq!(by_alpha3("can").unwrap(), canada);
        assert_eq!(by_iso_num(124).unwrap(), canada);
        assert!(exists("Canada"));
        assert!(exists_alpha2(" ca"));
        assert!(exists_alpha3("CAN "));
        assert!(exists_iso_num(124));
        assert_eq!(dataset_size(), list().len());
    }
}
