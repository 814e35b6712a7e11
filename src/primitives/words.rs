//! Conversions between byte buffers and little-endian `u32` words.
//!
//! Byte `4k + j` of a buffer is bit range `8j..8j + 8` of word `k`. Buffers
//! whose length is not a multiple of four are treated as if they were
//! zero-padded up to the next word boundary.

/// Packs `bytes` into `out` as little-endian words.
///
/// Packing stops at whichever of the two runs out first. Words of `out`
/// not reached by `bytes` are set to zero, and a trailing partial chunk of
/// `bytes` is zero-padded on the high side.
#[cfg(not(feature = "speed"))]
pub fn fill_words_from_le_bytes(bytes: &[u8], out: &mut [u32]) {
    out.fill(0);

    for (word, chunk) in out.iter_mut().zip(bytes.chunks(4)) {
        let mut buf = [0u8; 4];
        buf[..chunk.len()].copy_from_slice(chunk);
        *word = u32::from_le_bytes(buf);
    }
}

/// Packs `bytes` into `out` as little-endian words (shift-and-or fast path).
#[cfg(feature = "speed")]
pub fn fill_words_from_le_bytes(bytes: &[u8], out: &mut [u32]) {
    out.fill(0);

    let whole = (bytes.len() / 4).min(out.len());
    for (word, b) in out[..whole].iter_mut().zip(bytes.chunks_exact(4)) {
        *word = (b[0] as u32) | ((b[1] as u32) << 8) | ((b[2] as u32) << 16) | ((b[3] as u32) << 24);
    }

    if whole < out.len() {
        let tail = &bytes[whole * 4..];
        for (j, &b) in tail.iter().take(4).enumerate() {
            out[whole] |= (b as u32) << (8 * j);
        }
    }
}

/// Packs `bytes` into a fixed array of `N` little-endian words.
///
/// Input longer than `4 * N` bytes is truncated; shorter input is
/// zero-padded.
pub fn words_from_le_bytes<const N: usize>(bytes: &[u8]) -> [u32; N] {
    let mut out = [0u32; N];
    fill_words_from_le_bytes(bytes, &mut out);
    out
}
