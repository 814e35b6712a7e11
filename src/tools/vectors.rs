//! Reference vector output.
//!
//! Reproduces the listing published alongside the original ISAAC code:
//! zero seed, skip the first 256 words, then print the next 512 words as
//! 8-digit lowercase hex, eight words per line.
//!
//! The skipped block comes from the reference program, whose initializer
//! generated (and threw away) one batch of results. It is kept only so the
//! listing matches; other callers have no reason to skip anything.

use std::io::Write;

use crate::error::ToolError;
use crate::rng::Isaac32;

/// Words generated and dropped before the listing starts.
pub const REFERENCE_DISCARD: usize = 256;

/// Words in the listing.
pub const REFERENCE_WORDS: usize = 512;

/// Words per output line.
pub const WORDS_PER_LINE: usize = 8;

/// Returns the reference listing, one `String` per line (no newline).
pub fn reference_lines() -> Vec<String> {
    let mut rng = Isaac32::new();
    rng.discard(REFERENCE_DISCARD);

    (0..REFERENCE_WORDS / WORDS_PER_LINE)
        .map(|_| {
            (0..WORDS_PER_LINE)
                .map(|_| format!("{:08x}", rng.next_u32()))
                .collect::<String>()
        })
        .collect()
}

/// Writes the reference listing to `writer`, newline-terminated.
pub fn write_reference<W: Write>(writer: &mut W) -> Result<(), ToolError> {
    for line in reference_lines() {
        writeln!(writer, "{line}").map_err(|e| ToolError::io("<stdout>", e))?;
    }

    writer.flush().map_err(|e| ToolError::io("<stdout>", e))
}
