//! # Embedded Dataset Tests
//!
//! Exercise the process-wide API against the dataset compiled into the
//! crate: every record must be reachable through all four indices, the
//! dataset must pass the strict checks, and lookups must be safe to run
//! from many threads at once.

use ctry_core::dataset::{self, EMBEDDED};
use ctry_core::{Indices, LookupError, LookupField, Registry};

/// (query, expected name) pairs for name lookups.
const NAME_CASES: &[(&str, Option<&str>)] = &[
    ("CANADA", Some("CANADA")),
    ("canada", Some("CANADA")),
    ("CaNaDa", Some("CANADA")),
    ("  canada  ", Some("CANADA")),
    ("\tUnited Kingdom\n", Some("UNITED KINGDOM")),
    ("WAKANDA", None),
    ("", None),
    ("   ", None),
];

#[test]
fn dataset_size_matches_list_and_is_stable() {
    let n = ctry_core::dataset_size();
    assert!(n > 0);
    assert_eq!(n, ctry_core::list().len());
    assert_eq!(n, ctry_core::registry().len());
    assert_eq!(ctry_core::dataset_size(), n);
}

#[test]
fn every_record_round_trips_through_every_index() {
    for ident in ctry_core::list() {
        assert_eq!(ctry_core::by_name(&ident.name).unwrap(), ident);
        assert_eq!(ctry_core::by_alpha2(&ident.alpha2).unwrap(), ident);
        assert_eq!(ctry_core::by_alpha3(&ident.alpha3).unwrap(), ident);
        assert_eq!(ctry_core::by_iso_num(ident.iso_num).unwrap(), ident);
    }
}

#[test]
fn every_record_matches_lower_case_and_padded_keys() {
    for ident in ctry_core::list() {
        let name = format!("  {}  ", ident.name.to_lowercase());
        assert_eq!(ctry_core::by_name(&name).unwrap(), ident);
        let a2 = format!(" {} ", ident.alpha2.to_lowercase());
        assert_eq!(ctry_core::by_alpha2(&a2).unwrap(), ident);
        let a3 = format!("{}\t", ident.alpha3.to_lowercase());
        assert_eq!(ctry_core::by_alpha3(&a3).unwrap(), ident);
    }
}

#[test]
fn indices_cover_every_record_exactly_once() {
    let registry = ctry_core::registry();
    let n = registry.len();
    let indices = registry.indices();
    assert_eq!(indices.by_name().len(), n);
    assert_eq!(indices.by_alpha2().len(), n);
    assert_eq!(indices.by_alpha3().len(), n);
    assert_eq!(indices.by_iso_num().len(), n);

    let mut offsets: Vec<usize> = indices.by_iso_num().values().copied().collect();
    offsets.sort_unstable();
    assert_eq!(offsets, (0..n).collect::<Vec<_>>());
}

#[test]
fn embedded_dataset_passes_strict_checks() {
    let idents = dataset::load(EMBEDDED).unwrap();
    dataset::validate(&idents).unwrap();
    assert!(Indices::collisions(&idents).is_empty());
    let strict = Registry::from_json_strict(EMBEDDED).unwrap();
    assert_eq!(strict.len(), ctry_core::dataset_size());
}

#[test]
fn embedded_dataset_is_canonical_upper_case() {
    for ident in ctry_core::list() {
        assert_eq!(ident.name, ctry_core::normalize(&ident.name));
        assert_eq!(ident.alpha2, ctry_core::normalize(&ident.alpha2));
        assert_eq!(ident.alpha3, ctry_core::normalize(&ident.alpha3));
    }
}

#[test]
fn name_lookup_cases() {
    for (input, expected) in NAME_CASES {
        let got = ctry_core::by_name(input).ok().map(|i| i.name.as_str());
        assert_eq!(got, *expected, "by_name({input:?})");
        assert_eq!(ctry_core::exists(input), expected.is_some(), "exists({input:?})");
    }
}

#[test]
fn canada_scenarios() {
    let canada = ctry_core::by_name("canada").unwrap();
    assert_eq!(canada.name, "CANADA");
    assert_eq!(canada.alpha2, "CA");
    assert_eq!(canada.alpha3, "CAN");
    assert_eq!(canada.iso_num, 124);

    assert_eq!(ctry_core::by_name("  CaNaDa  ").unwrap(), canada);
    assert_eq!(ctry_core::by_alpha2("ca").unwrap().alpha2, "CA");
    assert_eq!(ctry_core::by_alpha2(" ca ").unwrap(), canada);
    assert_eq!(ctry_core::by_alpha3("can").unwrap().alpha3, "CAN");
    assert_eq!(ctry_core::by_iso_num(124).unwrap().iso_num, 124);
}

#[test]
fn absent_keys_are_not_found() {
    for _ in 0..3 {
        assert!(matches!(
            ctry_core::by_name("WAKANDA"),
            Err(LookupError::NotFound { field: LookupField::Name, .. })
        ));
        assert!(ctry_core::by_alpha2("XX").is_err());
        assert!(ctry_core::by_alpha3("XXX").is_err());
        assert!(ctry_core::by_iso_num(999).is_err());
        assert!(ctry_core::by_iso_num(0).is_err());
    }
}

#[test]
fn exists_functions() {
    assert!(ctry_core::exists("canada"));
    assert!(!ctry_core::exists("wakanda"));
    assert!(ctry_core::exists_alpha2("ca"));
    assert!(!ctry_core::exists_alpha2("xx"));
    assert!(ctry_core::exists_alpha3("can"));
    assert!(!ctry_core::exists_alpha3("xxx"));
    assert!(ctry_core::exists_iso_num(124));
    assert!(!ctry_core::exists_iso_num(999));
}

#[test]
fn exists_iso_num_agrees_with_lookup_over_full_range() {
    let mut hits = 0;
    for n in 0..=u16::MAX {
        let found = ctry_core::by_iso_num(n).is_ok();
        assert_eq!(ctry_core::exists_iso_num(n), found, "iso_num {n}");
        hits += usize::from(found);
    }
    assert_eq!(hits, ctry_core::dataset_size());
}

#[test]
fn concurrent_readers_see_the_same_registry() {
    let base = ctry_core::registry() as *const Registry as usize;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|t| {
                s.spawn(move || {
                    let registry = ctry_core::registry();
                    assert_eq!(registry as *const Registry as usize, base);
                    for (i, ident) in registry.iter().enumerate() {
                        if i % 8 != t {
                            continue;
                        }
                        assert_eq!(ctry_core::by_alpha3(&ident.alpha3).unwrap(), ident);
                        assert!(ctry_core::exists_iso_num(ident.iso_num));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    });
}

#[test]
fn explicit_registry_matches_process_wide_one() {
    let local = Registry::embedded().unwrap();
    assert_eq!(local.idents(), ctry_core::list());
    assert_eq!(local.indices(), ctry_core::registry().indices());
}
