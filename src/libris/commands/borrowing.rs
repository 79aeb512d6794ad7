//! The in-progress book list built while registering a borrower.
//!
//! The console collects IDs one at a time. Each ID must pass
//! [`validate_book_id`] and must not already be in this borrower's list;
//! repeats are reported and skipped. Other borrowers' lists are not consulted.

use crate::commands::CmdMessage;
use crate::validation::{validate_book_id, BookIdError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    Added,
    AlreadyListed,
}

impl BorrowOutcome {
    pub fn message(self) -> CmdMessage {
        match self {
            BorrowOutcome::Added => CmdMessage::success("圖書已添加至借閱清單。"),
            BorrowOutcome::AlreadyListed => {
                CmdMessage::warning("該圖書已經借閱過，無法重複借閱。")
            }
        }
    }
}

/// Book IDs gathered for one borrower. Only valid, distinct IDs get in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorrowList {
    book_ids: Vec<String>,
}

impl BorrowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one more ID. A malformed ID is an error and is not recorded.
    pub fn offer(&mut self, book_id: &str) -> Result<BorrowOutcome, BookIdError> {
        validate_book_id(book_id)?;

        if self.contains(book_id) {
            return Ok(BorrowOutcome::AlreadyListed);
        }

        self.book_ids.push(book_id.to_string());
        Ok(BorrowOutcome::Added)
    }

    pub fn contains(&self, book_id: &str) -> bool {
        self.book_ids.iter().any(|id| id == book_id)
    }

    pub fn book_ids(&self) -> &[String] {
        &self.book_ids
    }

    pub fn len(&self) -> usize {
        self.book_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.book_ids.is_empty()
    }

    pub fn into_book_ids(self) -> Vec<String> {
        self.book_ids
    }
}

impl FromIterator<String> for BorrowList {
    /// Builds a list through [`BorrowList::offer`], dropping malformed and
    /// repeated IDs.
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = BorrowList::new();
        for id in iter {
            let _ = list.offer(&id);
        }
        list
    }
}

/// Whether a "add more?" answer means yes: it starts with `y` or `Y`.
pub fn wants_more(answer: &str) -> bool {
    matches!(answer.trim_start().chars().next(), Some('y' | 'Y'))
}
