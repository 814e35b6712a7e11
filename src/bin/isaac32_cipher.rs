use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use isaac32::tools::cipher_file;

/// Encode or decode a file with the ISAAC32 byte stream.
///
/// Running the same command on the output with the same password restores
/// the original file. The password seeds the generator directly; this is a
/// demonstration cipher, not a secure one.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "Examples:\n  \
        Encode: isaac32_cipher myFile.txt myFile.isaac32 \"swordfish\"\n  \
        Decode: isaac32_cipher myFile.isaac32 mySecrets.txt \"swordfish\""
)]
struct Args {
    /// File to read.
    source: PathBuf,

    /// File to write (created or truncated). Must differ from the source.
    dest: PathBuf,

    /// Password used as the raw seed.
    password: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match cipher_file(&args.source, &args.dest, args.password.as_bytes()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
