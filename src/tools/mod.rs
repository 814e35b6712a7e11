//! Tools built on the generator
//!
//! These are the library halves of the binaries shipped with the crate:
//! - `cipher`: XOR a file with the generator's byte stream
//! - `size`: parse human byte counts such as `23MiB` or `max`
//! - `stream`: write an exact number of generator bytes to a sink
//! - `vectors`: print the published reference listing
//!
//! They hold all the logic so it can be tested without spawning processes;
//! the binaries only parse arguments and report errors.

pub mod cipher;
pub mod size;
pub mod stream;
pub mod vectors;

pub use cipher::{apply_keystream, cipher_file, cipher_stream};
pub use size::parse_size;
pub use stream::write_stream;
pub use vectors::{reference_lines, write_reference};
