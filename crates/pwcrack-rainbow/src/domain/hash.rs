//! Hash function implementations
//!
//! This module maps a password to its digest, interpreted as an
//! arbitrary-precision non-negative integer. The digest algorithm and the
//! byte order used to read the digest as an integer are explicit parameters.

use num_bigint::BigUint;
use std::fmt::{self, Display};

use crate::error::ConfigError;

/// A digest read as a non-negative integer
pub type Digest = BigUint;

/// All the supported hash functions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HashFunction {
    Md4,
    #[default]
    Md5,
    Sha1,
    Sha2_256,
}

impl HashFunction {
    /// Width of the digest in bits
    pub fn digest_bits(&self) -> u64 {
        match self {
            Self::Md4 | Self::Md5 => 128,
            Self::Sha1 => 160,
            Self::Sha2_256 => 256,
        }
    }

    fn digest_to_integer(&self, input: &[u8], order: ByteOrder) -> Digest {
        match self {
            Self::Md4 => order.read(&<md4::Md4 as digest::Digest>::digest(input)),
            Self::Md5 => order.read(&<md5::Md5 as digest::Digest>::digest(input)),
            Self::Sha1 => order.read(&<sha1::Sha1 as digest::Digest>::digest(input)),
            Self::Sha2_256 => order.read(&<sha2::Sha256 as digest::Digest>::digest(input)),
        }
    }
}

impl Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Md4 => "md4",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha2_256 => "sha2-256",
        };
        f.write_str(name)
    }
}

/// Byte order used to interpret digest bytes as an integer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first
    #[default]
    BigEndian,
    /// Least significant byte first
    LittleEndian,
}

impl ByteOrder {
    #[inline]
    fn read(&self, bytes: &[u8]) -> Digest {
        match self {
            Self::BigEndian => BigUint::from_bytes_be(bytes),
            Self::LittleEndian => BigUint::from_bytes_le(bytes),
        }
    }
}

/// Password hasher: a digest algorithm plus the byte order of its output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hasher {
    pub function: HashFunction,
    pub byte_order: ByteOrder,
}

impl Hasher {
    pub fn new(function: HashFunction, byte_order: ByteOrder) -> Self {
        Self {
            function,
            byte_order,
        }
    }

    /// MD5 read most significant byte first
    pub fn md5() -> Self {
        Self::default()
    }

    /// Hash a password's UTF-8 bytes
    #[inline]
    pub fn hash(&self, password: &str) -> Digest {
        self.function
            .digest_to_integer(password.as_bytes(), self.byte_order)
    }

    /// Width of the digest in bits
    pub fn digest_bits(&self) -> u64 {
        self.function.digest_bits()
    }

    /// Parse a hex digest no wider than this hasher's output
    pub fn parse_hex(&self, hex: &str) -> Result<Digest, ConfigError> {
        parse_hex_digest(hex, self.digest_bits())
    }
}

/// Parse a hexadecimal digest
///
/// Accepts an optional `0x` prefix and either letter case. Leading zeros may
/// be omitted. The value must fit in `max_bits` bits.
pub fn parse_hex_digest(hex: &str, max_bits: u64) -> Result<Digest, ConfigError> {
    let trimmed = hex.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConfigError::InvalidHex(hex.to_owned()));
    }

    let value = BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| ConfigError::InvalidHex(hex.to_owned()))?;

    if value.bits() > max_bits {
        return Err(ConfigError::DigestTooWide {
            bits: value.bits(),
            max: max_bits,
        });
    }

    Ok(value)
}

/// Format a digest as lowercase hex without leading zeros
pub fn format_digest(digest: &Digest) -> String {
    format!("{digest:x}")
}
