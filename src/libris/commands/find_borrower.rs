use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BorrowerStore;

pub fn run<S: BorrowerStore>(store: &S, name: &str) -> Result<CmdResult> {
    match store.find_borrower(name) {
        Some(borrower) => Ok(CmdResult::default().with_listed_borrowers(vec![borrower])),
        None => Ok(CmdResult::default().with_message(CmdMessage::warning("找不到該借閱者。"))),
    }
}
