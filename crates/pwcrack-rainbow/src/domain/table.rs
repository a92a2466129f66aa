//! In-memory rainbow table
//!
//! Chains are stored in start-index order and indexed by end password.
//! The table is immutable once built.

use rustc_hash::FxHashMap;

use crate::domain::chain::ChainEntry;
use crate::domain::hash::Hasher;
use crate::domain::params::TableParams;

/// Chain indices grouped by end password
pub type EndIndex = FxHashMap<String, Vec<u32>>;

/// A built rainbow table
#[derive(Clone, Debug)]
pub struct RainbowTable {
    params: TableParams,
    hasher: Hasher,
    chains: Vec<ChainEntry>,
    by_end: EndIndex,
}

impl RainbowTable {
    /// Create a table from chains in start-index order
    ///
    /// Several chains may share an end password (a merge); all of them stay
    /// reachable through [`RainbowTable::chains_ending_at`].
    pub fn from_chains(params: TableParams, hasher: Hasher, chains: Vec<ChainEntry>) -> Self {
        let by_end = build_end_index(&chains);
        Self {
            params,
            hasher,
            chains,
            by_end,
        }
    }

    pub fn params(&self) -> &TableParams {
        &self.params
    }

    pub fn hasher(&self) -> &Hasher {
        &self.hasher
    }

    pub fn chains(&self) -> &[ChainEntry] {
        &self.chains
    }

    /// Get a chain by index
    pub fn chain(&self, index: u32) -> Option<&ChainEntry> {
        self.chains.get(index as usize)
    }

    /// Number of chains
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Indices of the chains whose end password is `password`
    #[inline]
    pub fn chains_ending_at(&self, password: &str) -> &[u32] {
        self.by_end.get(password).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct end passwords
    pub fn distinct_ends(&self) -> usize {
        self.by_end.len()
    }
}

/// Build an end-password index over chains
pub fn build_end_index(chains: &[ChainEntry]) -> EndIndex {
    let mut index = EndIndex::default();
    for (i, entry) in chains.iter().enumerate() {
        index.entry(entry.end.clone()).or_default().push(i as u32);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RainbowTable {
        let params = TableParams::new(2, 3, 4).unwrap();
        let chains = vec![
            ChainEntry::new("00", "ab"),
            ChainEntry::new("01", "cd"),
            ChainEntry::new("02", "ab"),
            ChainEntry::new("03", "ef"),
        ];
        RainbowTable::from_chains(params, Hasher::md5(), chains)
    }

    #[test]
    fn test_lookup_by_end() {
        let table = sample_table();
        assert_eq!(table.chains_ending_at("cd"), &[1]);
        assert_eq!(table.chains_ending_at("ef"), &[3]);
        assert!(table.chains_ending_at("zz").is_empty());
    }

    #[test]
    fn test_merged_ends_keep_all_chains() {
        let table = sample_table();
        assert_eq!(table.chains_ending_at("ab"), &[0, 2]);
        assert_eq!(table.distinct_ends(), 3);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_chain_accessors() {
        let table = sample_table();
        assert!(!table.is_empty());
        assert_eq!(table.chain(1), Some(&ChainEntry::new("01", "cd")));
        assert_eq!(table.chain(4), None);
        assert_eq!(table.params().chain_length, 3);
        assert_eq!(table.hasher(), &Hasher::md5());
    }

    #[test]
    fn test_empty_table() {
        let params = TableParams::new(2, 3, 4).unwrap();
        let table = RainbowTable::from_chains(params, Hasher::md5(), Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.distinct_ends(), 0);
        assert!(table.chains_ending_at("00").is_empty());
    }
}
