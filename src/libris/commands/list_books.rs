use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BookStore;

/// Lists every book ordered by book ID.
///
/// With `persist_order` the store itself is sorted, so later deletes and
/// lookups see the sorted order. Without it the store is left alone and only
/// the returned copy is sorted.
pub fn run<S: BookStore>(store: &mut S, persist_order: bool) -> Result<CmdResult> {
    let books = if persist_order {
        store.sort_books_by_id();
        store.list_books()
    } else {
        let mut books = store.list_books();
        books.sort_by(|a, b| a.book_id.cmp(&b.book_id));
        books
    };

    Ok(CmdResult::default().with_listed_books(books))
}
