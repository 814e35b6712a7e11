//! ISAAC32 seed expansion
//!
//! Turns seed material of any length into a full generator state.
//!
//! The seed is viewed as exactly 1024 bytes (longer seeds are truncated,
//! shorter ones zero-padded) and packed into 256 little-endian words. Eight
//! mixing words start from the golden-ratio constant, are scrambled four
//! times, then absorb the seed in 8-word blocks over two passes. The first
//! pass reads the seed; the second reads the pool produced by the first, so
//! every seed byte influences every pool word.

use super::state::{ACCUMULATOR, CYCLE_POSITION, Isaac32, POOL_WORDS};
use crate::primitives::words_from_le_bytes;

/// Number of seed bytes consumed by seed expansion.
pub const SEED_BYTES: usize = POOL_WORDS * 4;

/// Initial value of every mixing word (⌊2³² / φ⌋).
pub const GOLDEN_RATIO: u32 = 0x9e37_79b9;

/// Shift applied to mixing word `k` during a scramble round.
///
/// Even indices shift left, odd indices shift right.
const SHIFTS: [u32; 8] = [11, 2, 8, 16, 10, 4, 8, 9];

/// Applies one scramble round to the eight mixing words.
///
/// Indices are processed in order and each step sees the values already
/// updated earlier in the same round.
#[inline(always)]
pub(super) fn scramble(mix: &mut [u32; 8]) {
    for k in 0..8 {
        let next = mix[(k + 1) % 8];
        if k % 2 == 1 {
            mix[k] ^= next >> SHIFTS[k];
        } else {
            mix[k] ^= next << SHIFTS[k];
        }
        mix[(k + 3) % 8] = mix[(k + 3) % 8].wrapping_add(mix[k]);
        mix[(k + 1) % 8] = mix[(k + 1) % 8].wrapping_add(mix[(k + 2) % 8]);
    }
}

/// Adds each 8-word block of `source` into `mix`, scrambles, and writes the
/// mixing words back into the same block of `pool`.
fn absorb(mix: &mut [u32; 8], source: &[u32; POOL_WORDS], pool: &mut [u32]) {
    for (block, out) in source.chunks_exact(8).zip(pool.chunks_exact_mut(8)) {
        mix.iter_mut().zip(block).for_each(|(m, s)| {
            *m = m.wrapping_add(*s);
        });

        scramble(mix);

        out.copy_from_slice(mix);
    }
}

impl Isaac32 {
    /// Creates a state from arbitrary seed bytes.
    ///
    /// Only the first [`SEED_BYTES`] bytes are used; shorter seeds behave
    /// exactly as if zero-padded to that length. The empty seed is valid and
    /// gives the `init` state.
    pub fn from_seed(seed: &[u8]) -> Self {
        let mut rng = Self::zeroed();
        rng.seed(seed);
        rng
    }

    /// Re-seeds this state in place, overwriting all 260 words.
    pub fn seed(&mut self, seed: &[u8]) {
        let seed_words: [u32; POOL_WORDS] = words_from_le_bytes(seed);

        self.words[ACCUMULATOR..=CYCLE_POSITION].fill(0);

        let mut mix = [GOLDEN_RATIO; 8];
        for _ in 0..4 {
            scramble(&mut mix);
        }

        // First pass reads the seed.
        absorb(&mut mix, &seed_words, &mut self.words[..POOL_WORDS]);

        // Second pass reads the pool the first pass produced.
        let mut first_pass = [0u32; POOL_WORDS];
        first_pass.copy_from_slice(&self.words[..POOL_WORDS]);
        absorb(&mut mix, &first_pass, &mut self.words[..POOL_WORDS]);
    }

    /// Re-seeds this state with the empty seed.
    ///
    /// Equivalent to `self.seed(&[])`.
    pub fn init(&mut self) {
        self.seed(&[]);
    }
}
