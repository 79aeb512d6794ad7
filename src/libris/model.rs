use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub book_id: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        book_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            book_id: book_id.into(),
        }
    }
}

/// A named borrower and the book IDs they currently hold.
///
/// `borrowed_books` refers to `Book::book_id` loosely: nothing checks that the
/// book exists, and removing a book leaves these lists untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrower {
    pub name: String,
    pub borrowed_books: Vec<String>,
}

impl Borrower {
    pub fn new(name: impl Into<String>, borrowed_books: Vec<String>) -> Self {
        Self {
            name: name.into(),
            borrowed_books,
        }
    }

    pub fn has_borrowed(&self, book_id: &str) -> bool {
        self.borrowed_books.iter().any(|id| id == book_id)
    }
}
