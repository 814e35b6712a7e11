//! ISAAC32 state layout
//!
//! The whole generator lives in one fixed array of 260 `u32` words:
//!
//! ```text
//! [0 .. 256)  entropy pool
//! 256         accumulator   (a)
//! 257         result        (b), last output word
//! 258         counter       (c), bumped once per 256 steps
//! 259         cycle position (i), 0..=255
//! ```
//!
//! All arithmetic on these words wraps modulo 2³². Any bit pattern is a
//! valid state; an all-zero pool still yields a well-defined sequence.

use std::fmt;

/// Number of words in the entropy pool.
pub const POOL_WORDS: usize = 256;

/// Total number of words in an ISAAC32 state.
pub const STATE_WORDS: usize = POOL_WORDS + 4;

/// Index of the accumulator word.
pub const ACCUMULATOR: usize = 256;

/// Index of the result word.
pub const RESULT: usize = 257;

/// Index of the cycle counter word.
pub const COUNTER: usize = 258;

/// Index of the cycle position word.
pub const CYCLE_POSITION: usize = 259;

/// ISAAC32 generator state.
///
/// The state is a plain owned array; it never allocates and is never
/// resized. `Clone` performs a deep copy: the clone shares no storage with
/// the original and continues the original's sequence from the clone point.
///
/// A single instance must not be driven from several threads at once
/// without external synchronization (every operation takes `&mut self`, so
/// safe code cannot do this by accident). Distinct instances are fully
/// independent.
#[derive(Clone, PartialEq, Eq)]
pub struct Isaac32 {
    pub(super) words: [u32; STATE_WORDS],
}

impl Isaac32 {
    /// Creates a state seeded with the empty seed.
    ///
    /// This is the `init` state: identical every time, and equal to
    /// `Isaac32::from_seed(&[])`.
    pub fn new() -> Self {
        let mut rng = Self::zeroed();
        rng.init();
        rng
    }

    /// An all-zero state, used only as the target of seed expansion.
    pub(super) const fn zeroed() -> Self {
        Self {
            words: [0u32; STATE_WORDS],
        }
    }

    /// Copies every word of `original` into `self`.
    ///
    /// This is the in-place form of `clone`: afterwards both states produce
    /// the same sequence, and advancing one never affects the other.
    pub fn copy_from(&mut self, original: &Isaac32) {
        self.words.copy_from_slice(&original.words);
    }

    /// Returns a read-only view of the raw 260-word layout.
    pub fn as_words(&self) -> &[u32; STATE_WORDS] {
        &self.words
    }

    /// Current cycle position (0..=255).
    #[inline(always)]
    pub fn position(&self) -> usize {
        (self.words[CYCLE_POSITION] & 0xff) as usize
    }

    /// Number of completed-or-started 256-step cycles since seeding.
    pub fn cycles(&self) -> u32 {
        self.words[COUNTER]
    }
}

impl Default for Isaac32 {
    /// Creates the `init` state, equivalent to [`Isaac32::new`].
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Isaac32 {
    // The pool is 1 KiB of opaque state; only the control words are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Isaac32")
            .field("a", &self.words[ACCUMULATOR])
            .field("b", &self.words[RESULT])
            .field("c", &self.words[COUNTER])
            .field("i", &self.position())
            .finish_non_exhaustive()
    }
}
