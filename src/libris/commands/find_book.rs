use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &S, book_id: &str) -> Result<CmdResult> {
    match store.find_book(book_id) {
        Some(book) => Ok(CmdResult::default().with_listed_books(vec![book])),
        None => Ok(CmdResult::default().with_message(CmdMessage::warning("找不到該圖書。"))),
    }
}
