//! Fixed sample data loaded at startup.

use super::{BookStore, BorrowerStore};
use crate::model::{Book, Borrower};

/// `(title, author, book_id)` in insertion order.
pub const SEED_BOOKS: [(&str, &str, &str); 10] = [
    ("紅樓夢", "曹雪芹", "A1234"),
    ("西遊記", "吳承恩", "B2345"),
    ("水滸傳", "施耐庵", "B3456"),
    ("三國演義", "羅貫中", "C4567"),
    ("金瓶梅", "蘭陵笑笑生", "C5678"),
    ("聊齋志異", "蒲松齡", "D6789"),
    ("儒林外史", "吳敬梓", "D7890"),
    ("封神演義", "許仲琳", "E8901"),
    ("鏡花緣", "李汝珍", "E9012"),
    ("老殘遊記", "劉鶚", "F0123"),
];

/// `(name, borrowed book IDs)` in insertion order. Each one is prepended, so
/// the store lists them in reverse.
pub const SEED_BORROWERS: [(&str, &[&str]); 5] = [
    ("小明", &["A1234", "B2345"]),
    ("小華", &["C4567"]),
    ("小美", &["D6789", "E8901"]),
    ("小強", &["F0123"]),
    ("小麗", &["B3456", "C5678"]),
];

pub fn seed_books<S: BookStore>(store: &mut S) {
    for (title, author, book_id) in SEED_BOOKS {
        store.append_book(Book::new(title, author, book_id));
    }
    tracing::info!(count = SEED_BOOKS.len(), "seeded books");
}

pub fn seed_borrowers<S: BorrowerStore>(store: &mut S) {
    for (name, book_ids) in SEED_BORROWERS {
        let ids = book_ids.iter().map(|id| id.to_string()).collect();
        store.prepend_borrower(Borrower::new(name, ids));
    }
    tracing::info!(count = SEED_BORROWERS.len(), "seeded borrowers");
}
