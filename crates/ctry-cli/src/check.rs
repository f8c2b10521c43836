//! # Check Subcommand
//!
//! Strict validation of a country dataset: deserialization, field shapes,
//! and uniqueness of every key in every index. Unlike the library's
//! last-write-wins indexing, any shared key is reported as a problem.
//!
//! Without `--file` the embedded dataset is checked, which is what CI runs
//! after editing `data/countries.json`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use ctry_core::dataset::{self, EMBEDDED};
use ctry_core::{DatasetError, Indices};

/// Arguments for the `ctry check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Candidate dataset to check instead of the embedded one.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Outcome of checking one dataset.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of records that deserialized.
    pub records: usize,
    /// Every problem found, in dataset order.
    pub problems: Vec<DatasetError>,
}

impl CheckReport {
    /// Whether the dataset passed.
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 if the dataset passes, 1 if any problem is found.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let (source, bytes) = match &args.file {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read dataset: {}", path.display()))?;
            (path.display().to_string(), bytes)
        }
        None => ("<embedded>".to_string(), EMBEDDED.to_vec()),
    };

    let report = check_bytes(&bytes);
    tracing::info!(
        %source,
        records = report.records,
        problems = report.problems.len(),
        "dataset checked"
    );

    for problem in &report.problems {
        eprintln!("  FAIL: {problem}");
    }
    if report.is_ok() {
        println!("OK: {source} ({} records)", report.records);
        Ok(0)
    } else {
        println!("FAILED: {source} ({} problems)", report.problems.len());
        Ok(1)
    }
}

/// Check a serialized dataset and collect every problem.
pub fn check_bytes(bytes: &[u8]) -> CheckReport {
    let idents = match dataset::load(bytes) {
        Ok(idents) => idents,
        Err(e) => {
            return CheckReport {
                records: 0,
                problems: vec![e],
            }
        }
    };

    let mut problems = dataset::violations(&idents);
    problems.extend(
        Indices::collisions(&idents)
            .into_iter()
            .map(|c| DatasetError::DuplicateKey {
                field: c.field,
                key: c.key,
                first: c.first,
                second: c.second,
            }),
    );

    CheckReport {
        records: idents.len(),
        problems,
    }
}
