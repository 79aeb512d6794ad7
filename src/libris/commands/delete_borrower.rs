use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BorrowerStore;

/// Removes every borrower with this exact name.
pub fn run<S: BorrowerStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let removed = store.remove_borrowers(name);
    if removed.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("找不到該借閱者。")));
    }

    tracing::debug!(%name, count = removed.len(), "borrowers deleted");
    let message = if removed.len() == 1 {
        CmdMessage::success("借閱者刪除成功。")
    } else {
        CmdMessage::success(format!("借閱者刪除成功（共 {} 位）。", removed.len()))
    };

    Ok(CmdResult::default()
        .with_affected_borrowers(removed)
        .with_message(message))
}
