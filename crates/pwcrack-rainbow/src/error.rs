//! Error types
//!
//! Configuration faults, fatal construction faults and the expected
//! "not found" outcome of a lookup are kept in separate types so callers
//! can tell a missing password apart from a broken setup.

use std::io;
use thiserror::Error;

/// Invalid parameters or malformed input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Password length is zero or above the supported maximum
    #[error("password length must be between 1 and {max}, got {found}")]
    PasswordLength { found: usize, max: usize },

    /// Chain length is zero
    #[error("chain length must be positive")]
    ChainLength,

    /// Number of chains is zero
    #[error("number of chains must be positive")]
    ChainCount,

    /// More chains requested than there are distinct start passwords
    #[error("table of {requested} chains exceeds the password space of {space}")]
    TableTooLarge { requested: u64, space: u128 },

    /// Encoder index outside of [0, 36^length)
    #[error("index {index} does not fit in {length} base-36 characters")]
    IndexOutOfRange { index: u128, length: usize },

    /// Character outside of the alphabet
    #[error("character {0:?} is not in the alphabet")]
    InvalidCharacter(char),

    /// Digest input is not hexadecimal
    #[error("digest {0:?} is not valid hexadecimal")]
    InvalidHex(String),

    /// Digest input is wider than the hash function output
    #[error("digest is {bits} bits wide, the hash function produces at most {max}")]
    DigestTooWide { bits: u64, max: u64 },
}

/// No chain in the table accounts for the target digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no password found for the given digest")]
pub struct NotFound;

/// Table construction failure
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The diagnostic log sink failed; the table is not trustworthy
    #[error("failed to write the chain log: {0}")]
    LogSink(#[from] io::Error),
}

/// Lookup failure from a hex-encoded digest
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrackError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    NotFound(#[from] NotFound),
}

impl CrackError {
    /// True when the digest was valid but no password was recovered
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
