//! Chain operations implementation
//!
//! This module provides the chain entry structure and functions for
//! chain generation, tracing and replay in rainbow table operations.

use std::ops::Range;

use crate::domain::alphabet::Password;
use crate::domain::hash::{Digest, Hasher};
use crate::domain::params::TableParams;
use crate::domain::reduce::reduce;

/// Chain entry structure
///
/// Only the first and last password of a chain are kept.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChainEntry {
    /// Starting password of the chain
    pub start: Password,
    /// Ending password of the chain
    pub end: Password,
}

impl ChainEntry {
    /// Create a new chain entry
    pub fn new(start: impl Into<Password>, end: impl Into<Password>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// One hash step of a chain: a password and its digest
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainStep {
    pub password: Password,
    pub digest: Digest,
}

/// Every step of a chain, kept for the diagnostic log
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainTrace {
    pub start: Password,
    pub steps: Vec<ChainStep>,
}

/// Apply hash → reduce for each column in `columns`, starting from `password`
#[inline]
pub fn advance_chain(
    password: &str,
    columns: Range<u32>,
    params: &TableParams,
    hasher: &Hasher,
) -> Password {
    let mut current = password.to_owned();

    for n in columns {
        let digest = hasher.hash(&current);
        current = reduce(&digest, n, params.password_length);
    }

    current
}

/// Compute a single chain
///
/// Starting from `start`, repeat hash → reduce `chain_length` times
/// and return the entry with the ending password.
pub fn compute_chain(start: Password, params: &TableParams, hasher: &Hasher) -> ChainEntry {
    let end = advance_chain(&start, 0..params.chain_length, params, hasher);
    ChainEntry { start, end }
}

/// Compute a single chain and record every (password, digest) step
pub fn compute_chain_traced(
    start: Password,
    params: &TableParams,
    hasher: &Hasher,
) -> (ChainEntry, ChainTrace) {
    let mut steps = Vec::with_capacity(params.chain_length as usize);
    let mut current = start.clone();

    for n in 0..params.chain_length {
        let digest = hasher.hash(&current);
        let next = reduce(&digest, n, params.password_length);
        steps.push(ChainStep {
            password: current,
            digest,
        });
        current = next;
    }

    let entry = ChainEntry {
        start: start.clone(),
        end: current,
    };
    (entry, ChainTrace { start, steps })
}

/// Replay a chain from its start and look for the target digest
///
/// Returns the column and the password whose digest equals `target`,
/// or `None` if the chain does not contain it (a false alarm).
pub fn replay_chain(
    start: &str,
    target: &Digest,
    params: &TableParams,
    hasher: &Hasher,
) -> Option<(u32, Password)> {
    let mut current = start.to_owned();

    for n in 0..params.chain_length {
        let digest = hasher.hash(&current);
        if &digest == target {
            return Some((n, current));
        }
        current = reduce(&digest, n, params.password_length);
    }

    None
}

/// Enumerate all passwords of a chain
///
/// Returns `chain_length + 1` passwords: the start, each reduction, and the end.
pub fn enumerate_chain_passwords(
    start: &str,
    params: &TableParams,
    hasher: &Hasher,
) -> Vec<Password> {
    let mut passwords = Vec::with_capacity(params.chain_length as usize + 1);
    let mut current = start.to_owned();

    for n in 0..params.chain_length {
        let digest = hasher.hash(&current);
        let next = reduce(&digest, n, params.password_length);
        passwords.push(current);
        current = next;
    }
    passwords.push(current);

    passwords
}
