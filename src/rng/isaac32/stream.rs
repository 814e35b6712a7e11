//! ISAAC32 byte-stream extraction
//!
//! Serializes generator words into bytes, least-significant byte first.
//!
//! A request for `n` bytes performs exactly `ceil(n / 4)` steps. Whole words
//! contribute all four bytes; a final partial word contributes only its
//! first `n % 4` bytes and the rest of that word is dropped. Nothing is
//! carried over between calls, so:
//! - reads whose lengths are multiples of 4 compose: `read(n)` then
//!   `read(m)` equals `read(n + m)`
//! - a read following a partial read starts on a fresh word

use super::state::Isaac32;

impl Isaac32 {
    /// Returns the next word as four little-endian bytes.
    ///
    /// This is the byte stream with a request size of exactly 4.
    #[inline]
    pub fn next_word_bytes(&mut self) -> [u8; 4] {
        self.next_u32().to_le_bytes()
    }

    /// Fills `dest` with generator output.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(4);

        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_word_bytes());
        }

        // Partial tail word: unused bytes are discarded, never buffered.
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let word = self.next_word_bytes();
            let len = tail.len();
            tail.copy_from_slice(&word[..len]);
        }
    }

    /// Returns `count` bytes of generator output.
    pub fn read_bytes(&mut self, count: usize) -> Vec<u8> {
        let mut out = vec![0u8; count];
        self.fill_bytes(&mut out);
        out
    }
}
