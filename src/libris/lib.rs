//! # Libris Architecture
//!
//! Libris is a small lending-library catalog: books, borrowers, and the book
//! IDs each borrower holds. Everything lives in memory and each run starts
//! from the same sample data.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Console Layer (cli/, wired by main.rs)                     │
//! │  - Menu loop, prompts, re-prompting on bad input            │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the book store and the borrower store               │
//! │  - Applies config switches, returns CmdResult               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per file, pure logic over a store          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore / BorrowerStore traits, in-memory backends     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Expected failures (unknown ID, unknown borrower, repeated loan) are not
//! errors: they come back as [`commands::CmdMessage`]s. [`error::LibrisError`]
//! is kept for malformed input reaching the API and for config file I/O.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage traits, in-memory backends and seed data
//! - [`model`]: `Book` and `Borrower`
//! - [`validation`]: Book ID format check
//! - [`config`]: `config.json` handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
