/// One action selectable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    DeleteBook,
    SearchBook,
    ListBooks,
    AddBorrower,
    DeleteBorrower,
    SearchBorrower,
    ListBorrowers,
    Exit,
    /// Out-of-range number or anything that is not a number.
    Invalid,
}

pub const MENU_TITLE: &str = "--- 圖書館管理系統 ---";

/// Menu lines in display order.
pub const MENU_ENTRIES: [(u8, &str); 9] = [
    (1, "添加新圖書"),
    (2, "刪除圖書"),
    (3, "搜尋圖書"),
    (4, "列出所有圖書"),
    (5, "添加新借閱者"),
    (6, "刪除借閱者"),
    (7, "搜尋借閱者"),
    (8, "列出所有借閱者"),
    (0, "退出"),
];

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(1) => MenuChoice::AddBook,
            Ok(2) => MenuChoice::DeleteBook,
            Ok(3) => MenuChoice::SearchBook,
            Ok(4) => MenuChoice::ListBooks,
            Ok(5) => MenuChoice::AddBorrower,
            Ok(6) => MenuChoice::DeleteBorrower,
            Ok(7) => MenuChoice::SearchBorrower,
            Ok(8) => MenuChoice::ListBorrowers,
            Ok(0) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_listed_entry() {
        let parsed: Vec<_> = MENU_ENTRIES
            .iter()
            .map(|(n, _)| MenuChoice::parse(&n.to_string()))
            .collect();
        assert!(!parsed.contains(&MenuChoice::Invalid));
        assert_eq!(parsed[0], MenuChoice::AddBook);
        assert_eq!(parsed[8], MenuChoice::Exit);
    }

    #[test]
    fn out_of_range_and_garbage_are_invalid() {
        assert_eq!(MenuChoice::parse("9"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("-1"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("abc"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("1a"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("99999999999999999999999"), MenuChoice::Invalid);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(MenuChoice::parse(" 4 "), MenuChoice::ListBooks);
    }
}
