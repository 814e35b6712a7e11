//! ISAAC32 stream cipher.
//!
//! XORs data with the generator's byte stream. The generator is seeded
//! directly from the password bytes; no key derivation is applied.
//! Encryption and decryption are the same operation.
//!
//! Input is processed in chunks of [`CHUNK_BYTES`] bytes. Every chunk except
//! the last is filled completely before it is ciphered, so keystream words
//! always line up with 4-byte-aligned offsets of the input.
//!
//! This is a demonstration cipher: ISAAC32 is not a vetted cryptographic
//! primitive and nothing here authenticates the data.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use crate::error::ToolError;
use crate::rng::Isaac32;

/// Number of keystream words applied per chunk.
pub const CHUNK_WORDS: usize = 1024;

/// Size of one input chunk in bytes.
pub const CHUNK_BYTES: usize = CHUNK_WORDS * 4;

/// XORs `buf` in place with the next `buf.len()` bytes of keystream.
///
/// When `buf.len()` is not a multiple of 4 the final keystream word is only
/// partly used and its remaining bytes are discarded.
pub fn apply_keystream(rng: &mut Isaac32, buf: &mut [u8]) {
    let mut chunks = buf.chunks_exact_mut(4);

    for chunk in &mut chunks {
        let key = rng.next_word_bytes();
        chunk.iter_mut().zip(key).for_each(|(b, k)| *b ^= k);
    }

    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        let key = rng.next_word_bytes();
        tail.iter_mut().zip(key).for_each(|(b, k)| *b ^= k);
    }
}

/// Reads until `buf` is full or the input ends; returns the bytes read.
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}

/// Ciphers everything from `reader` into `writer` using `rng`.
///
/// Returns the number of bytes processed. Errors are tagged with
/// `source_name` or `dest_name` depending on which side failed.
pub fn cipher_stream<R: Read, W: Write>(
    rng: &mut Isaac32,
    reader: &mut R,
    writer: &mut W,
    source_name: &Path,
    dest_name: &Path,
) -> Result<u64, ToolError> {
    let mut buffer = [0u8; CHUNK_BYTES];
    let mut total = 0u64;

    loop {
        let len = read_chunk(reader, &mut buffer).map_err(|e| ToolError::io(source_name, e))?;
        if len == 0 {
            break;
        }

        apply_keystream(rng, &mut buffer[..len]);

        writer
            .write_all(&buffer[..len])
            .map_err(|e| ToolError::io(dest_name, e))?;

        total += len as u64;

        if len < CHUNK_BYTES {
            break;
        }
    }

    writer.flush().map_err(|e| ToolError::io(dest_name, e))?;

    Ok(total)
}

/// Ciphers the file at `source` into `dest` with `password` as the seed.
///
/// The destination is created (or truncated) only after the source has been
/// opened successfully.
///
/// # Errors
///
/// - [`ToolError::SamePath`] if `source` and `dest` are the same path
/// - [`ToolError::Io`] if either file cannot be opened, read or written
pub fn cipher_file(source: &Path, dest: &Path, password: &[u8]) -> Result<u64, ToolError> {
    if source == dest {
        return Err(ToolError::SamePath(source.to_path_buf()));
    }

    let mut rng = Isaac32::from_seed(password);

    let input = File::open(source).map_err(|e| ToolError::io(source, e))?;
    let output = File::create(dest).map_err(|e| ToolError::io(dest, e))?;

    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);

    cipher_stream(&mut rng, &mut reader, &mut writer, source, dest)
}
