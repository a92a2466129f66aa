//! Coverage measurement workflow
//!
//! Replays every chain of a table and counts the distinct passwords that get
//! hashed along the way. Those are exactly the passwords the cracker can
//! recover.

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;
use tracing::info;

use crate::domain::alphabet::index_for_password;
use crate::domain::chain::enumerate_chain_passwords;
use crate::domain::coverage::{CoverageReport, PasswordSet};
use crate::domain::table::RainbowTable;
use crate::error::ConfigError;

const PROGRESS_INTERVAL: u64 = 10_000;

/// Build the set of passwords hashed by at least one chain
///
/// Processes all chains in parallel using rayon.
pub fn reachable_passwords<F>(table: &RainbowTable, on_progress: F) -> Result<PasswordSet, ConfigError>
where
    F: Fn(u64, u64) + Sync,
{
    let params = table.params();
    let hasher = table.hasher();
    let total = table.len() as u64;
    let progress = AtomicU64::new(0);

    let set = table
        .chains()
        .par_iter()
        .try_fold(PasswordSet::new, |mut set, entry| -> Result<_, ConfigError> {
            let passwords = enumerate_chain_passwords(&entry.start, params, hasher);
            // the end password is stored, never hashed
            for password in &passwords[..params.chain_length as usize] {
                set.insert(index_for_password(password)?);
            }

            let count = progress.fetch_add(1, Ordering::Relaxed) + 1;
            if count % PROGRESS_INTERVAL == 0 {
                on_progress(count, total);
            }
            Ok(set)
        })
        .try_reduce(PasswordSet::new, |mut a, b| {
            a.merge(b);
            Ok(a)
        })?;

    on_progress(total, total);
    Ok(set)
}

/// Measure how much of the password space a table covers
pub fn measure_coverage(table: &RainbowTable) -> Result<CoverageReport, ConfigError> {
    measure_coverage_with_progress(table, |_, _| {})
}

/// Measure coverage with a progress callback (done, total)
pub fn measure_coverage_with_progress<F>(
    table: &RainbowTable,
    on_progress: F,
) -> Result<CoverageReport, ConfigError>
where
    F: Fn(u64, u64) + Sync,
{
    let params = table.params();
    let set = reachable_passwords(table, on_progress)?;

    let report = CoverageReport {
        covered: set.len(),
        space: params.password_space(),
        steps: table.len() as u64 * params.chain_length as u64,
        num_chains: table.len() as u64,
        distinct_ends: table.distinct_ends() as u64,
    };

    info!(
        covered = report.covered,
        ratio = report.ratio(),
        merged_chains = report.merged_chains(),
        "coverage measured"
    );

    Ok(report)
}
