use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::BookStore;
use crate::validation::validate_book_id;

pub fn run<S: BookStore>(
    store: &mut S,
    title: String,
    author: String,
    book_id: String,
    unique_ids: bool,
) -> Result<CmdResult> {
    validate_book_id(&book_id)?;

    if unique_ids && store.find_book(&book_id).is_some() {
        tracing::debug!(%book_id, "rejected duplicate book id");
        return Ok(CmdResult::default()
            .with_message(CmdMessage::error(format!("圖書編號已存在: {}", book_id))));
    }

    let book = Book::new(title, author, book_id);
    store.append_book(book.clone());
    tracing::debug!(book_id = %book.book_id, "book added");

    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(CmdMessage::success("圖書添加成功。")))
}
