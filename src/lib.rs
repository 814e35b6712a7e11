//! ISAAC32 pseudorandom word generator
//!
//! This crate implements ISAAC32: a deterministic generator built on a
//! 260-word internal state and a nonlinear one-step transition, together
//! with the seed expansion that turns seed material of any length into that
//! state, and a byte-stream layer that serves arbitrary byte counts.
//!
//! Output matches the published ISAAC reference vectors bit for bit. All
//! word/byte conversions are little-endian on every platform.
//!
//! # Module overview
//!
//! - `rng`
//!   The generator itself: [`rng::Isaac32`], its seed expansion, the
//!   transition function and byte-stream extraction. With the `rand_core`
//!   feature it also implements `rand_core::RngCore` and `SeedableRng`.
//!
//! - `primitives`
//!   Little-endian packing between byte buffers and 32-bit words.
//!
//! - `tools`
//!   Library halves of the shipped binaries: a demonstration stream cipher,
//!   size-token parsing and output streaming, and the reference listing.
//!
//! - `error`
//!   Error type for the tools. The generator itself never fails.
//!
//! # Example
//!
//! ```
//! use isaac32::rng::Isaac32;
//!
//! let mut rng = Isaac32::from_seed(b"swordfish");
//! assert_eq!(rng.next_u32(), 0xa58b_b3af);
//!
//! let bytes = rng.read_bytes(6);
//! assert_eq!(bytes.len(), 6);
//! ```
//!
//! # Security
//!
//! ISAAC32 is a statistical PRNG. It is not a cryptographically secure
//! generator, and the stream cipher in `tools` is for demonstration only.

pub mod error;
pub mod primitives;
pub mod rng;
pub mod tools;

pub use error::ToolError;
pub use rng::Isaac32;
