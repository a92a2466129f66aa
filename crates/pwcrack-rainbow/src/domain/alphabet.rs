//! Password encoder
//!
//! Deterministic bijection between an integer index and a fixed-length
//! password over the 36-character alphabet.

use crate::constants::{ALPHABET, ALPHABET_SIZE, PAD_CHAR};
use crate::error::ConfigError;

/// A fixed-length password over the alphabet
pub type Password = String;

/// Get the alphabet character for a value in 0..36
#[inline]
pub fn char_for_index(index: u8) -> Option<char> {
    ALPHABET.get(index as usize).map(|&c| c as char)
}

/// Get the value (0..36) of an alphabet character
#[inline]
pub fn index_for_char(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='z' => Some(c as u8 - b'a' + 10),
        _ => None,
    }
}

/// Number of distinct passwords of the given length (36^length)
///
/// Returns `None` if the space does not fit in a u128.
pub fn password_space(length: usize) -> Option<u128> {
    let exp = u32::try_from(length).ok()?;
    (ALPHABET_SIZE as u128).checked_pow(exp)
}

/// Encode an index as a password
///
/// Base-36 representation of `index`, most significant digit first,
/// left-padded with '0' to exactly `length` characters.
pub fn password_for_index(index: u128, length: usize) -> Result<Password, ConfigError> {
    let mut digits = vec![PAD_CHAR; length];
    let mut rest = index;

    for slot in digits.iter_mut().rev() {
        if rest == 0 {
            break;
        }
        *slot = ALPHABET[(rest % ALPHABET_SIZE as u128) as usize] as char;
        rest /= ALPHABET_SIZE as u128;
    }

    if rest > 0 {
        return Err(ConfigError::IndexOutOfRange { index, length });
    }

    Ok(digits.into_iter().collect())
}

/// Decode a password back to its index (inverse of [`password_for_index`])
pub fn index_for_password(password: &str) -> Result<u128, ConfigError> {
    password.chars().try_fold(0u128, |acc, c| {
        let value = index_for_char(c).ok_or(ConfigError::InvalidCharacter(c))?;
        acc.checked_mul(ALPHABET_SIZE as u128)
            .and_then(|v| v.checked_add(value as u128))
            .ok_or(ConfigError::IndexOutOfRange {
                index: u128::MAX,
                length: password.len(),
            })
    })
}

/// Check that a password has the given length and only alphabet characters
pub fn is_valid_password(password: &str, length: usize) -> bool {
    password.len() == length && password.chars().all(|c| index_for_char(c).is_some())
}
