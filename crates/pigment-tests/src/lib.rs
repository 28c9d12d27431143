//! # pigment-tests
//!
//! Round-trip and accuracy sweeps for pigment-core.
//!
//! This crate provides:
//! - A deterministic RGB corpus covering the 8-bit cube
//! - Per-channel error accounting for round-trip sweeps
//!
//! ## Test Categories
//!
//! 1. **Round-trip bounds**: RGB → space → RGB within per-space tolerances
//! 2. **Conversion scenarios**: pinned reference values per space
//! 3. **Parsing**: hex and CSS functional notation
//! 4. **Serde stability**: field order and width of serialized colors

pub mod accuracy;
pub mod corpus;

pub use accuracy::ChannelDeltaStats;
pub use corpus::{grid_corpus, random_corpus};
