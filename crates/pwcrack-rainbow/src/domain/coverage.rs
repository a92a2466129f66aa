//! Password coverage accounting
//!
//! Tracks which passwords are reachable from a rainbow table, i.e. hashed at
//! some column of some chain, and how many chains merged.

use rustc_hash::FxHashSet;

/// Set of reachable password indices
///
/// Unlike a full-space bitmap this only grows with the number of chain steps,
/// so it stays usable for long passwords.
#[derive(Debug, Default)]
pub struct PasswordSet {
    indices: FxHashSet<u128>,
}

impl PasswordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with room for `capacity` indices
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Mark a password index as reachable
    #[inline]
    pub fn insert(&mut self, index: u128) -> bool {
        self.indices.insert(index)
    }

    /// Check if a password index is reachable
    #[inline]
    pub fn contains(&self, index: u128) -> bool {
        self.indices.contains(&index)
    }

    /// Merge another set into this one
    pub fn merge(&mut self, other: PasswordSet) {
        if other.indices.len() > self.indices.len() {
            let smaller = std::mem::replace(&mut self.indices, other.indices);
            self.indices.extend(smaller);
        } else {
            self.indices.extend(other.indices);
        }
    }

    /// Number of reachable passwords
    pub fn len(&self) -> u64 {
        self.indices.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Coverage statistics of a table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverageReport {
    /// Distinct passwords hashed by at least one chain
    pub covered: u64,
    /// Size of the password space
    pub space: u128,
    /// Chain steps walked (num_chains * chain_length)
    pub steps: u64,
    /// Number of chains
    pub num_chains: u64,
    /// Distinct end passwords
    pub distinct_ends: u64,
}

impl CoverageReport {
    /// Fraction of the password space that can be recovered (0.0 to 1.0)
    pub fn ratio(&self) -> f64 {
        if self.space == 0 {
            return 0.0;
        }
        self.covered as f64 / self.space as f64
    }

    /// Fraction of walked steps that landed on an already covered password
    pub fn step_loss(&self) -> f64 {
        if self.steps == 0 {
            return 0.0;
        }
        1.0 - self.covered as f64 / self.steps as f64
    }

    /// Chains that share their end password with an earlier chain
    pub fn merged_chains(&self) -> u64 {
        self.num_chains - self.distinct_ends
    }
}
