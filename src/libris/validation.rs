//! Book ID validation.
//!
//! A book ID is exactly five characters: one ASCII letter followed by four
//! ASCII digits (`A1234`, `z0007`). The letter's case is kept as entered.

use thiserror::Error;

/// Number of characters in a book ID.
pub const BOOK_ID_LEN: usize = 5;

/// Reason a candidate book ID was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookIdError {
    #[error("book ID must be 5 characters, found {0}")]
    WrongLength(usize),

    #[error("book ID must start with a letter, found '{0}'")]
    InvalidPrefix(char),

    #[error("book ID must end in four digits, found '{found}' at position {position}")]
    InvalidDigit { position: usize, found: char },
}

/// Validates a book ID, reporting the first rule it breaks.
///
/// # Examples
/// ```
/// use libris::validation::validate_book_id;
///
/// assert!(validate_book_id("A1234").is_ok());
/// assert!(validate_book_id("b0001").is_ok());
///
/// assert!(validate_book_id("12345").is_err());
/// assert!(validate_book_id("A123").is_err());
/// assert!(validate_book_id("AB123").is_err());
/// ```
pub fn validate_book_id(id: &str) -> Result<(), BookIdError> {
    let len = id.chars().count();
    if len != BOOK_ID_LEN {
        return Err(BookIdError::WrongLength(len));
    }

    let mut chars = id.chars();
    // Length was checked above, so there is a first character.
    if let Some(first) = chars.next() {
        if !first.is_ascii_alphabetic() {
            return Err(BookIdError::InvalidPrefix(first));
        }
    }

    for (offset, ch) in chars.enumerate() {
        if !ch.is_ascii_digit() {
            return Err(BookIdError::InvalidDigit {
                position: offset + 1,
                found: ch,
            });
        }
    }

    Ok(())
}

pub fn is_valid_book_id(id: &str) -> bool {
    validate_book_id(id).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letter_and_four_digits() {
        assert!(is_valid_book_id("A1234"));
        assert!(is_valid_book_id("z0000"));
        assert!(is_valid_book_id("F0123"));
    }

    #[test]
    fn rejects_all_digits() {
        assert_eq!(
            validate_book_id("12345"),
            Err(BookIdError::InvalidPrefix('1'))
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(validate_book_id("A123"), Err(BookIdError::WrongLength(4)));
        assert_eq!(
            validate_book_id("A12345"),
            Err(BookIdError::WrongLength(6))
        );
        assert_eq!(validate_book_id(""), Err(BookIdError::WrongLength(0)));
    }

    #[test]
    fn rejects_second_letter() {
        assert_eq!(
            validate_book_id("AB123"),
            Err(BookIdError::InvalidDigit {
                position: 1,
                found: 'B'
            })
        );
    }

    #[test]
    fn rejects_non_ascii_characters() {
        // Five characters, but neither a letter nor digits in the ASCII sense.
        assert!(!is_valid_book_id("紅1234"));
        assert!(!is_valid_book_id("A１２３４"));
    }

    #[test]
    fn does_not_trim_whitespace() {
        assert!(!is_valid_book_id(" A123"));
        assert!(!is_valid_book_id("A123 "));
    }
}
