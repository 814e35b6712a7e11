//! Random number generation module
//!
//! This module provides the ISAAC32 pseudorandom word generator: a large
//! 260-word state, a seed-expansion procedure that accepts seed material of
//! any length, a one-word transition function, and a byte-stream layer on
//! top of it.
//!
//! ISAAC32 is a statistical PRNG. It makes no claim of cryptographic
//! security and must not be used where an adversary can observe output.

/// Design goals:
/// - Bit-for-bit compatibility with the published ISAAC reference vectors
/// - Deterministic output for a given seed on every platform
/// - No heap allocation in the generator itself
/// - Minimal and explicit API surface
pub mod isaac32;

/// ISAAC32 generator state.
///
/// This type is the primary entry point for generating ISAAC32 output.
pub use isaac32::Isaac32;

/// State layout and seeding constants.
pub use isaac32::{
    ACCUMULATOR, COUNTER, CYCLE_POSITION, GOLDEN_RATIO, POOL_WORDS, RESULT, SEED_BYTES,
    STATE_WORDS,
};
