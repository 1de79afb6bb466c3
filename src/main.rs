//! udon-deckgen CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments and dispatches (via cli::run)
//! 2. Prints errors to stderr
//! 3. Exits with the error's exit code
//!
//! All logic is delegated to the CLI module.

use udon_deckgen::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}
