use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BorrowerStore;

pub fn run<S: BorrowerStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_borrowers(store.list_borrowers()))
}
