use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &mut S, book_id: &str) -> Result<CmdResult> {
    match store.remove_book(book_id) {
        Some(book) => {
            tracing::debug!(%book_id, "book deleted");
            Ok(CmdResult::default()
                .with_affected_books(vec![book])
                .with_message(CmdMessage::success("圖書刪除成功。")))
        }
        None => Ok(CmdResult::default().with_message(CmdMessage::warning("找不到該圖書。"))),
    }
}
