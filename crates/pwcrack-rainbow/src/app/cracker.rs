//! Search workflow implementation
//!
//! Recovers a password from its digest by walking candidate chains backward
//! from the target and replaying every chain whose end password matches.
//!
//! For each assumed column, from the last one down to the first:
//! 1. Reduce the target at that column, then keep hashing and reducing up to
//!    the end of the chain, looking up every reduced password among the end
//!    passwords of the table.
//! 2. On a hit, replay the matching chain from its start. The digest is only
//!    accepted if the replay actually produces it; otherwise the hit was a
//!    false alarm and the walk goes on.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::domain::alphabet::Password;
use crate::domain::chain::replay_chain;
use crate::domain::hash::Digest;
use crate::domain::reduce::reduce;
use crate::domain::table::RainbowTable;
use crate::error::{CrackError, NotFound};

/// Counters collected during one lookup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrackStats {
    /// End-password matches that led to a chain replay
    pub table_hits: u64,
    /// Replays that did not reproduce the target digest
    pub false_alarms: u64,
    /// Hash evaluations, walking and replaying
    pub hash_evaluations: u64,
}

/// State of one lookup
struct Search<'a> {
    table: &'a RainbowTable,
    target: &'a Digest,
    /// Chains already replayed without finding the target
    rejected: FxHashSet<u32>,
    stats: CrackStats,
}

impl<'a> Search<'a> {
    fn new(table: &'a RainbowTable, target: &'a Digest) -> Self {
        Self {
            table,
            target,
            rejected: FxHashSet::default(),
            stats: CrackStats::default(),
        }
    }

    /// Assume the target sits at `start_pos` and walk to the chain end
    fn search_from(&mut self, start_pos: u32) -> Option<Password> {
        let table = self.table;
        let params = table.params();
        let hasher = table.hasher();
        let mut digest = self.target.clone();

        for i in start_pos..params.chain_length {
            let candidate = reduce(&digest, i, params.password_length);

            for &chain in table.chains_ending_at(&candidate) {
                if let Some(password) = self.try_chain(chain) {
                    debug!(start_pos, column = i, chain, "table hit confirmed");
                    return Some(password);
                }
            }

            if i + 1 < params.chain_length {
                digest = hasher.hash(&candidate);
                self.stats.hash_evaluations += 1;
            }
        }

        None
    }

    /// Replay a chain from its start and check it really holds the target
    fn try_chain(&mut self, chain: u32) -> Option<Password> {
        if self.rejected.contains(&chain) {
            return None;
        }

        let table = self.table;
        let entry = table.chain(chain)?;
        self.stats.table_hits += 1;

        match replay_chain(&entry.start, self.target, table.params(), table.hasher()) {
            Some((column, password)) => {
                self.stats.hash_evaluations += column as u64 + 1;
                Some(password)
            }
            None => {
                self.stats.hash_evaluations += table.params().chain_length as u64;
                self.stats.false_alarms += 1;
                self.rejected.insert(chain);
                debug!(chain, start = %entry.start, "false alarm");
                None
            }
        }
    }
}

/// Search for a password that hashes to `target`
///
/// Columns are tried from the longest remaining suffix down to the first
/// column. Returns [`NotFound`] when no chain accounts for the digest.
pub fn crack(table: &RainbowTable, target: &Digest) -> Result<Password, NotFound> {
    crack_with_stats(table, target).0
}

/// Search for a password and report lookup counters
pub fn crack_with_stats(
    table: &RainbowTable,
    target: &Digest,
) -> (Result<Password, NotFound>, CrackStats) {
    let mut search = Search::new(table, target);

    let found = (0..table.params().chain_length)
        .rev()
        .find_map(|start_pos| search.search_from(start_pos));

    let stats = search.stats;
    info!(
        found = found.is_some(),
        table_hits = stats.table_hits,
        false_alarms = stats.false_alarms,
        hash_evaluations = stats.hash_evaluations,
        "lookup finished"
    );

    (found.ok_or(NotFound), stats)
}

/// Search for a password using rayon parallel processing across all columns
///
/// Returns the same password as [`crack`]: the result of the highest column
/// that succeeds is kept.
pub fn crack_parallel(table: &RainbowTable, target: &Digest) -> Result<Password, NotFound> {
    let found = (0..table.params().chain_length)
        .into_par_iter()
        .rev()
        .find_map_first(|start_pos| Search::new(table, target).search_from(start_pos));

    info!(found = found.is_some(), "parallel lookup finished");
    found.ok_or(NotFound)
}

/// Search for a password from a hex-encoded digest
pub fn crack_hex(table: &RainbowTable, hex: &str) -> Result<Password, CrackError> {
    let target = table.hasher().parse_hex(hex)?;
    Ok(crack(table, &target)?)
}
