//! Rainbow table related constants

// =============================================================================
// Alphabet
// =============================================================================

/// Password alphabet: digits first, then lowercase letters.
///
/// A character's position in this array is its numeric value (0..35).
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of characters in the alphabet (the radix of the encoder and of reduce)
pub const ALPHABET_SIZE: u32 = ALPHABET.len() as u32;

/// Character used to left-pad encoded passwords (value 0)
pub const PAD_CHAR: char = '0';

// =============================================================================
// Rainbow table parameters
// =============================================================================

/// Default password length
pub const DEFAULT_PASSWORD_LENGTH: usize = 7;

/// Default chain length (t = 2,000)
pub const DEFAULT_CHAIN_LENGTH: u32 = 2000;

/// Default number of chains (m = 2,000)
pub const DEFAULT_NUM_CHAINS: u64 = 2000;

/// Maximum password length allowed
///
/// 36^16 still fits in a u128 password space.
pub const MAX_PASSWORD_LENGTH: usize = 16;

// =============================================================================
// Generation
// =============================================================================

/// Number of chains traced per batch when writing the diagnostic log
pub const LOG_BATCH_SIZE: u64 = 256;

/// Default file name of the diagnostic chain log
pub const DEFAULT_LOG_FILE: &str = "rainbow_table_log.txt";
