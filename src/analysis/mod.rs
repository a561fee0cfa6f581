//! String property analysis
//!
//! Pure, deterministic derivation of [`StringProperties`] from a string
//! value. No I/O, no failure modes: every string, including the empty
//! string, is valid input.

mod analyzer;

pub use analyzer::{analyze, sha256_hex, StringProperties};
