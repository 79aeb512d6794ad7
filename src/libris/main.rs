//! # Libris CLI
//!
//! The binary is thin: the console lives in `cli/`, and this file only calls
//! `cli::run()` and turns an error into a message on stderr and exit code 1.
//! Catalog logic stays in the `libris` library (see `lib.rs`).

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
