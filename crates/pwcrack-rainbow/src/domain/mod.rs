//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod alphabet;
pub mod chain;
pub mod coverage;
pub mod hash;
pub mod params;
pub mod reduce;
pub mod table;
