use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use isaac32::rng::Isaac32;
use isaac32::tools::{parse_size, write_stream};

/// Write ISAAC32 output bytes to stdout.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "<BYTES> accepts the suffixes KB KiB MB MiB GB GiB TB TiB, or 'max' for\n\
        unlimited output.\n\n\
        Examples:\n  \
        isaac32_stdout 23MiB > 23MiB.bin\n  \
        isaac32_stdout 1GB \"swordfish\" > 1GB_seeded.bin\n  \
        isaac32_stdout max | RNG_test stdin32"
)]
struct Args {
    /// Number of bytes to write.
    bytes: String,

    /// Seed text. Without it the generator uses the empty seed.
    seed: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let size = match parse_size(&args.bytes) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = match &args.seed {
        Some(seed) => Isaac32::from_seed(seed.as_bytes()),
        None => Isaac32::new(),
    };

    let mut out = BufWriter::new(io::stdout().lock());

    match write_stream(&mut rng, size, &mut out, "<stdout>") {
        Ok(()) => ExitCode::SUCCESS,
        // The reader hung up (`| head`, `| RNG_test`): a normal way to stop.
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
