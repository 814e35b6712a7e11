use std::io;
use std::process::ExitCode;

use clap::Parser;
use isaac32::tools::write_reference;

/// Print the ISAAC reference vectors.
///
/// The output should match `randvect.txt` from the original ISAAC
/// distribution exactly.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();

    match write_reference(&mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
