//! pwcrack-rainbow - Rainbow table password recovery
//!
//! This crate provides functionality to:
//! - Generate rainbow tables over fixed-length passwords of `0-9a-z`
//! - Recover a password from its digest by backward chain search
//! - Measure how much of the password space a table covers
//! - Write a diagnostic log of every chain step

pub mod constants;
pub mod error;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use app::coverage::measure_coverage;
pub use app::cracker::{CrackStats, crack, crack_hex, crack_parallel, crack_with_stats};
pub use app::generator::{build_table, build_table_with_log, build_table_with_progress};
pub use domain::alphabet::{Password, index_for_password, password_for_index};
pub use domain::chain::ChainEntry;
pub use domain::hash::{ByteOrder, Digest, HashFunction, Hasher};
pub use domain::params::TableParams;
pub use domain::reduce::reduce;
pub use domain::table::RainbowTable;
pub use error::{BuildError, ConfigError, CrackError, NotFound};
