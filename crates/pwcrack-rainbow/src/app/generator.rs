//! Table generation workflow
//!
//! This module provides functions for generating rainbow tables.
//! Chains are independent, so every variant computes them on the rayon pool
//! and gathers the results in start-index order.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::constants::LOG_BATCH_SIZE;
use crate::domain::alphabet::password_for_index;
use crate::domain::chain::{ChainEntry, compute_chain, compute_chain_traced};
use crate::domain::hash::Hasher;
use crate::domain::params::TableParams;
use crate::domain::table::RainbowTable;
use crate::error::{BuildError, ConfigError};
use crate::infra::chain_log::write_chain_block;

/// Progress is reported every this many chains
const PROGRESS_INTERVAL: u64 = 1000;

#[inline]
fn chain_at(index: u64, params: &TableParams, hasher: &Hasher) -> Result<ChainEntry, ConfigError> {
    let start = password_for_index(index as u128, params.password_length)?;
    Ok(compute_chain(start, params, hasher))
}

/// Generate a rainbow table
///
/// Generate chains from start indices 0 to num_chains - 1.
pub fn build_table(params: TableParams, hasher: Hasher) -> Result<RainbowTable, ConfigError> {
    build_table_with_progress(params, hasher, |_, _| {})
}

/// Generate a rainbow table with progress callback
///
/// The callback is invoked from worker threads with (done, total).
pub fn build_table_with_progress<F>(
    params: TableParams,
    hasher: Hasher,
    on_progress: F,
) -> Result<RainbowTable, ConfigError>
where
    F: Fn(u64, u64) + Sync,
{
    log_build_start(&params, &hasher);
    let started = Instant::now();

    let total = params.num_chains;
    let done = AtomicU64::new(0);

    let chains = (0..total)
        .into_par_iter()
        .map(|index| -> Result<ChainEntry, ConfigError> {
            let entry = chain_at(index, &params, &hasher)?;
            let current = done.fetch_add(1, Ordering::Relaxed) + 1;
            if current % PROGRESS_INTERVAL == 0 || current == total {
                on_progress(current, total);
            }
            Ok(entry)
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    let table = RainbowTable::from_chains(params, hasher, chains);
    log_build_done(&table, started);
    Ok(table)
}

/// Generate a subset of the table (for testing or partial generation)
///
/// Returns the chains for start indices in [start, end).
pub fn build_table_range(
    params: &TableParams,
    hasher: &Hasher,
    start: u64,
    end: u64,
) -> Result<Vec<ChainEntry>, ConfigError> {
    (start..end)
        .into_par_iter()
        .map(|index| chain_at(index, params, hasher))
        .collect()
}

/// Generate a rainbow table and write every chain step to `sink`
///
/// Chains are traced in parallel batches; each batch is written in chain
/// order, so the log does not depend on scheduling. A write failure aborts
/// the build.
pub fn build_table_with_log<W>(
    params: TableParams,
    hasher: Hasher,
    sink: &mut W,
) -> Result<RainbowTable, BuildError>
where
    W: Write + ?Sized,
{
    log_build_start(&params, &hasher);
    let started = Instant::now();

    let mut chains = Vec::with_capacity(params.num_chains as usize);
    let mut batch_start = 0;

    while batch_start < params.num_chains {
        let batch_end = (batch_start + LOG_BATCH_SIZE).min(params.num_chains);

        let traced = (batch_start..batch_end)
            .into_par_iter()
            .map(|index| -> Result<_, ConfigError> {
                let start = password_for_index(index as u128, params.password_length)?;
                Ok(compute_chain_traced(start, &params, &hasher))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        for (entry, trace) in traced {
            write_chain_block(sink, &trace)?;
            chains.push(entry);
        }

        debug!(done = batch_end, total = params.num_chains, "chain log batch written");
        batch_start = batch_end;
    }

    sink.flush()?;

    let table = RainbowTable::from_chains(params, hasher, chains);
    log_build_done(&table, started);
    Ok(table)
}

fn log_build_start(params: &TableParams, hasher: &Hasher) {
    info!(
        password_length = params.password_length,
        chain_length = params.chain_length,
        num_chains = params.num_chains,
        hash = %hasher.function,
        "generating rainbow table"
    );
}

fn log_build_done(table: &RainbowTable, started: Instant) {
    info!(
        chains = table.len(),
        distinct_ends = table.distinct_ends(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "rainbow table generated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chain::advance_chain;
    use std::io;
    use std::sync::Mutex;

    fn small_params() -> TableParams {
        TableParams::new(3, 20, 64).unwrap()
    }

    #[test]
    fn test_build_table_start_passwords() {
        let table = build_table(small_params(), Hasher::md5()).unwrap();
        assert_eq!(table.len(), 64);

        for (i, entry) in table.chains().iter().enumerate() {
            assert_eq!(entry.start, password_for_index(i as u128, 3).unwrap());
        }
    }

    #[test]
    fn test_build_table_deterministic() {
        let table1 = build_table(small_params(), Hasher::md5()).unwrap();
        let table2 = build_table(small_params(), Hasher::md5()).unwrap();
        assert_eq!(table1.chains(), table2.chains());
    }

    #[test]
    fn test_build_table_matches_sequential() {
        let params = small_params();
        let hasher = Hasher::md5();
        let table = build_table(params, hasher).unwrap();

        for (i, entry) in table.chains().iter().enumerate() {
            let start = password_for_index(i as u128, params.password_length).unwrap();
            let end = advance_chain(&start, 0..params.chain_length, &params, &hasher);
            assert_eq!(entry.end, end, "Mismatch at chain {}", i);
        }
    }

    #[test]
    fn test_build_table_range_empty() {
        let entries = build_table_range(&small_params(), &Hasher::md5(), 0, 0).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_build_table_range_offset() {
        let params = small_params();
        let hasher = Hasher::md5();
        let full = build_table(params, hasher).unwrap();
        let partial = build_table_range(&params, &hasher, 10, 20).unwrap();

        assert_eq!(partial.len(), 10);
        assert_eq!(partial.as_slice(), &full.chains()[10..20]);
    }

    #[test]
    fn test_build_table_range_out_of_space() {
        let params = TableParams::new(1, 5, 36).unwrap();
        let result = build_table_range(&params, &Hasher::md5(), 30, 40);
        assert!(matches!(result, Err(ConfigError::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_build_table_with_progress_reports_total() {
        let params = TableParams::new(3, 5, 2500).unwrap();
        let calls = Mutex::new(Vec::new());

        let table = build_table_with_progress(params, Hasher::md5(), |done, total| {
            calls.lock().unwrap().push((done, total));
        })
        .unwrap();

        let calls = calls.into_inner().unwrap();
        assert_eq!(table.len(), 2500);
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|&(_, total)| total == 2500));
        assert!(calls.contains(&(2500, 2500)));
    }

    #[test]
    fn test_build_table_with_log_matches_plain_build() {
        let params = TableParams::new(2, 3, 300).unwrap();
        let hasher = Hasher::md5();

        let mut log = Vec::new();
        let logged = build_table_with_log(params, hasher, &mut log).unwrap();
        let plain = build_table(params, hasher).unwrap();

        assert_eq!(logged.chains(), plain.chains());

        let text = String::from_utf8(log).unwrap();
        assert_eq!(text.matches("PW:").count(), 300);
        assert!(text.starts_with("\n\nPW:00\n00@"));
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_build_table_with_log_sink_failure() {
        let params = TableParams::new(2, 3, 4).unwrap();
        let result = build_table_with_log(params, Hasher::md5(), &mut FailingSink);
        assert!(matches!(result, Err(BuildError::LogSink(_))));
    }
}
