//! # API Facade
//!
//! [`LibraryApi`] is the single entry point for catalog operations. It owns
//! one [`BookStore`] and one [`BorrowerStore`] and hands each command only the
//! store it needs. It does no terminal I/O and returns [`CmdResult`]s.
//!
//! Generic over both stores so tests and other front ends can plug in their
//! own backends.

use crate::commands::{self, borrowing::BorrowList, CatalogOptions, CmdResult};
use crate::error::Result;
use crate::store::{seed, BookStore, BorrowerStore};
use std::path::Path;

pub struct LibraryApi<B: BookStore, R: BorrowerStore> {
    books: B,
    borrowers: R,
    options: CatalogOptions,
}

impl<B: BookStore, R: BorrowerStore> LibraryApi<B, R> {
    pub fn new(books: B, borrowers: R, options: CatalogOptions) -> Self {
        Self {
            books,
            borrowers,
            options,
        }
    }

    /// Load the fixed sample books and borrowers.
    pub fn seed(&mut self) {
        seed::seed_books(&mut self.books);
        seed::seed_borrowers(&mut self.borrowers);
    }

    pub fn add_book(&mut self, title: String, author: String, book_id: String) -> Result<CmdResult> {
        commands::add_book::run(
            &mut self.books,
            title,
            author,
            book_id,
            self.options.unique_book_ids,
        )
    }

    pub fn delete_book(&mut self, book_id: &str) -> Result<CmdResult> {
        commands::delete_book::run(&mut self.books, book_id)
    }

    pub fn find_book(&self, book_id: &str) -> Result<CmdResult> {
        commands::find_book::run(&self.books, book_id)
    }

    pub fn list_books(&mut self) -> Result<CmdResult> {
        commands::list_books::run(&mut self.books, self.options.persist_sort_order)
    }

    pub fn add_borrower(&mut self, name: String, books: BorrowList) -> Result<CmdResult> {
        commands::add_borrower::run(&mut self.borrowers, name, books)
    }

    pub fn delete_borrowers(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete_borrower::run(&mut self.borrowers, name)
    }

    pub fn find_borrower(&self, name: &str) -> Result<CmdResult> {
        commands::find_borrower::run(&self.borrowers, name)
    }

    pub fn list_borrowers(&self) -> Result<CmdResult> {
        commands::list_borrowers::run(&self.borrowers)
    }

    pub fn books(&self) -> &B {
        &self.books
    }

    pub fn borrowers(&self) -> &R {
        &self.borrowers
    }
}

pub fn config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}

pub use crate::commands::borrowing::{wants_more, BorrowOutcome};
pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, MessageLevel};
