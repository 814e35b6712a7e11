//! Primitive helpers
//!
//! This module holds the low-level building blocks shared by the generator
//! and the tools built on top of it.
//!
//! At the moment this is only the packing of seed bytes into 32-bit words.
//! Seeds and output streams share one fixed, platform-independent byte
//! order: **little-endian**. Output words are serialized with
//! `u32::to_le_bytes`.

pub mod words;

pub use words::{fill_words_from_le_bytes, words_from_le_bytes};
