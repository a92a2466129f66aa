//! Reduction function
//!
//! Folds a digest back into the password space. The chain position is added
//! to the digest first, so the same digest reduces to different passwords at
//! different columns.

use crate::constants::{ALPHABET, ALPHABET_SIZE};
use crate::domain::alphabet::Password;
use crate::domain::hash::Digest;

/// Reduce a digest at a chain position to a password of `length` characters
///
/// Takes the `length` least significant base-36 digits of `digest + position`
/// (repeated floor division by 36) and emits them most significant first.
/// Missing high digits are '0'.
#[inline]
pub fn reduce(digest: &Digest, position: u32, length: usize) -> Password {
    let mut folded = digest.clone();
    folded += position;

    // least significant digit first
    let digits = folded.to_radix_le(ALPHABET_SIZE);

    (0..length)
        .rev()
        .map(|i| ALPHABET[digits.get(i).copied().unwrap_or(0) as usize] as char)
        .collect()
}
