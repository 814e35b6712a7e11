//! ISAAC32 generator
//!
//! The generator is split the same way the algorithm is:
//! - `state`: the 260-word layout and the [`Isaac32`] type itself
//! - `seed`: seed expansion (key scheduling)
//! - `core`: the one-step transition function
//! - `stream`: byte-stream extraction for arbitrary byte counts
//!
//! Callers seed a state once, then draw words or bytes from it. A state can
//! be cloned at any point to fork an independent, identically positioned
//! stream.
//!
//! # Example
//!
//! ```
//! use isaac32::rng::Isaac32;
//!
//! let mut rng = Isaac32::from_seed(b"swordfish");
//! let _first = rng.next_u32();
//!
//! let mut fork = rng.clone();
//! assert_eq!(rng.read_bytes(10), fork.read_bytes(10));
//! ```

mod core;
mod seed;
mod state;
mod stream;

#[cfg(feature = "rand_core")]
mod traits;

pub use seed::{GOLDEN_RATIO, SEED_BYTES};
pub use state::{
    ACCUMULATOR, COUNTER, CYCLE_POSITION, Isaac32, POOL_WORDS, RESULT, STATE_WORDS,
};

#[cfg(feature = "rand_core")]
pub use traits::Seed1024;
