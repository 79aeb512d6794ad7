use crate::config::LibrisConfig;
use crate::model::{Book, Borrower};

pub mod add_book;
pub mod add_borrower;
pub mod borrowing;
pub mod config;
pub mod delete_book;
pub mod delete_borrower;
pub mod find_book;
pub mod find_borrower;
pub mod list_books;
pub mod list_borrowers;

/// Behaviour switches that commands consult, taken from [`LibrisConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Listing books sorts the store itself rather than a copy.
    pub persist_sort_order: bool,
    /// Refuse to add a book whose ID is already in the store.
    pub unique_book_ids: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            persist_sort_order: true,
            unique_book_ids: false,
        }
    }
}

impl From<&LibrisConfig> for CatalogOptions {
    fn from(config: &LibrisConfig) -> Self {
        Self {
            persist_sort_order: config.persist_sort_order,
            unique_book_ids: config.unique_book_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub affected_borrowers: Vec<Borrower>,
    pub listed_borrowers: Vec<Borrower>,
    pub config: Option<LibrisConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_affected_borrowers(mut self, borrowers: Vec<Borrower>) -> Self {
        self.affected_borrowers = borrowers;
        self
    }

    pub fn with_listed_borrowers(mut self, borrowers: Vec<Borrower>) -> Self {
        self.listed_borrowers = borrowers;
        self
    }

    pub fn with_config(mut self, config: LibrisConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message is a warning or an error.
    pub fn has_problems(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
