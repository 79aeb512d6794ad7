use super::{BookStore, BorrowerStore};
use crate::model::{Book, Borrower};
use std::collections::VecDeque;

/// In-memory book storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: Vec<Book>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookStore for MemoryBookStore {
    fn append_book(&mut self, book: Book) {
        self.books.push(book);
    }

    fn remove_book(&mut self, book_id: &str) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.book_id == book_id)?;
        Some(self.books.remove(pos))
    }

    fn find_book(&self, book_id: &str) -> Option<Book> {
        self.books.iter().find(|b| b.book_id == book_id).cloned()
    }

    fn list_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn sort_books_by_id(&mut self) {
        self.books.sort_by(|a, b| a.book_id.cmp(&b.book_id));
    }

    fn book_count(&self) -> usize {
        self.books.len()
    }
}

/// In-memory borrower storage. Front insertion, no persistence.
#[derive(Debug, Default)]
pub struct MemoryBorrowerStore {
    borrowers: VecDeque<Borrower>,
}

impl MemoryBorrowerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BorrowerStore for MemoryBorrowerStore {
    fn prepend_borrower(&mut self, borrower: Borrower) {
        self.borrowers.push_front(borrower);
    }

    fn remove_borrowers(&mut self, name: &str) -> Vec<Borrower> {
        let (removed, kept): (Vec<_>, Vec<_>) =
            self.borrowers.drain(..).partition(|b| b.name == name);
        self.borrowers = kept.into();
        removed
    }

    fn find_borrower(&self, name: &str) -> Option<Borrower> {
        self.borrowers.iter().find(|b| b.name == name).cloned()
    }

    fn list_borrowers(&self) -> Vec<Borrower> {
        self.borrowers.iter().cloned().collect()
    }

    fn borrower_count(&self) -> usize {
        self.borrowers.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::seed;

    pub struct CatalogFixture {
        pub books: MemoryBookStore,
        pub borrowers: MemoryBorrowerStore,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                books: MemoryBookStore::new(),
                borrowers: MemoryBorrowerStore::new(),
            }
        }

        pub fn seeded() -> Self {
            let mut fixture = Self::new();
            seed::seed_books(&mut fixture.books);
            seed::seed_borrowers(&mut fixture.borrowers);
            fixture
        }

        pub fn with_book(mut self, title: &str, author: &str, book_id: &str) -> Self {
            self.books.append_book(Book::new(title, author, book_id));
            self
        }

        pub fn with_borrower(mut self, name: &str, book_ids: &[&str]) -> Self {
            let ids = book_ids.iter().map(|id| id.to_string()).collect();
            self.borrowers.prepend_borrower(Borrower::new(name, ids));
            self
        }
    }
}
