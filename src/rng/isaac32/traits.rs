//! `rand_core` trait implementations for [`Isaac32`].
//!
//! Only `RngCore` and `SeedableRng` are provided. `CryptoRng` is not: the
//! generator makes no security claim.

use super::seed::SEED_BYTES;
use super::state::Isaac32;

/// A full 1024-byte ISAAC32 seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed1024(pub [u8; SEED_BYTES]);

impl Default for Seed1024 {
    fn default() -> Self {
        Self([0; SEED_BYTES])
    }
}

impl AsRef<[u8]> for Seed1024 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for Seed1024 {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl From<[u8; SEED_BYTES]> for Seed1024 {
    fn from(other: [u8; SEED_BYTES]) -> Self {
        Self(other)
    }
}

impl rand_core::RngCore for Isaac32 {
    fn next_u32(&mut self) -> u32 {
        Isaac32::next_u32(self)
    }

    /// Two consecutive words, the first one in the low half.
    fn next_u64(&mut self) -> u64 {
        let lo = Isaac32::next_u32(self) as u64;
        let hi = Isaac32::next_u32(self) as u64;
        (hi << 32) | lo
    }

    /// Equivalent to [`Isaac32::fill_bytes`].
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Isaac32::fill_bytes(self, dest)
    }

    /// Equivalent to [`Isaac32::fill_bytes`]. Always returns `Ok(())`.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Isaac32::fill_bytes(self, dest);
        Ok(())
    }
}

impl rand_core::SeedableRng for Isaac32 {
    type Seed = Seed1024;

    fn from_seed(seed: Self::Seed) -> Self {
        Isaac32::from_seed(&seed.0)
    }
}
