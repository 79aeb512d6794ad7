//! # Console Layer
//!
//! The interactive front end for libris. This is the **only** place that
//! reads stdin, writes stdout, or decides exit codes.
//!
//! - `setup`: clap definitions and logging setup
//! - `commands`: `run()`, config resolution, per-command handlers
//! - `session`: the numbered menu loop over a [`libris::api::LibraryApi`]
//! - `prompt`: line prompts and re-prompt loops over any `BufRead`/`Write`
//! - `menu`: menu entries and choice parsing
//! - `print`: formatting of messages, books and borrowers
//!
//! The session and prompt types are generic over their input and output so
//! the menu can be driven from a byte buffer in tests.

mod commands;
mod menu;
mod print;
mod prompt;
mod session;
mod setup;

pub use commands::run;
