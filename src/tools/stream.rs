//! Streaming generator output to a byte sink.

use std::io::Write;

use crate::error::ToolError;
use crate::rng::Isaac32;

/// Size of the whole-word blocks written to the sink.
pub const BLOCK_BYTES: usize = 64 * 1024;

/// Writes exactly `size` bytes of generator output to `writer`.
///
/// Output is produced in [`BLOCK_BYTES`] blocks; only the very last block
/// may end in a partial word. Because every earlier block is a whole number
/// of words, the result is byte-for-byte the same as a single
/// `rng.read_bytes(size)`.
///
/// `sink_name` labels I/O errors.
pub fn write_stream<W: Write>(
    rng: &mut Isaac32,
    size: u64,
    writer: &mut W,
    sink_name: &str,
) -> Result<(), ToolError> {
    let mut block = vec![0u8; BLOCK_BYTES];
    let mut remaining = size;

    while remaining > 0 {
        let len = remaining.min(BLOCK_BYTES as u64) as usize;
        let out = &mut block[..len];

        rng.fill_bytes(out);
        writer.write_all(out).map_err(|e| ToolError::io(sink_name, e))?;

        remaining -= len as u64;
    }

    writer.flush().map_err(|e| ToolError::io(sink_name, e))
}
