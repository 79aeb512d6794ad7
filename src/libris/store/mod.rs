//! # Storage Layer
//!
//! Books and borrowers live in two separate stores, each behind its own trait:
//!
//! - [`BookStore`]: ordered collection of [`Book`]s. New books are appended;
//!   lookups return the first match in stored order.
//! - [`BorrowerStore`]: collection of [`Borrower`]s. New borrowers are
//!   inserted at the front, so the most recent one enumerates first.
//!
//! The stores do not validate anything. Book ID checks happen before a
//! record reaches them (see [`crate::validation`] and [`crate::api`]).
//!
//! ## Implementations
//!
//! - [`memory::MemoryBookStore`] / [`memory::MemoryBorrowerStore`]: the only
//!   backends. Nothing is persisted; every run starts from [`seed`] data.

use crate::model::{Book, Borrower};

pub mod memory;
pub mod seed;

pub trait BookStore {
    /// Append a book at the end of the collection. Duplicate IDs are kept.
    fn append_book(&mut self, book: Book);

    /// Remove the first book with this ID, keeping the order of the rest.
    fn remove_book(&mut self, book_id: &str) -> Option<Book>;

    /// First book with this ID, in stored order.
    fn find_book(&self, book_id: &str) -> Option<Book>;

    /// All books in stored order.
    fn list_books(&self) -> Vec<Book>;

    /// Stable sort of the stored collection by book ID, ascending.
    fn sort_books_by_id(&mut self);

    fn book_count(&self) -> usize;
}

pub trait BorrowerStore {
    /// Insert a borrower at the front of the collection.
    fn prepend_borrower(&mut self, borrower: Borrower);

    /// Remove every borrower with exactly this name and return them.
    fn remove_borrowers(&mut self, name: &str) -> Vec<Borrower>;

    /// First borrower with this name, in current order.
    fn find_borrower(&self, name: &str) -> Option<Borrower>;

    /// All borrowers, most recently added first.
    fn list_borrowers(&self) -> Vec<Borrower>;

    fn borrower_count(&self) -> usize;
}
