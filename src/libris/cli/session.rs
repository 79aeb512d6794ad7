use libris::api::{wants_more, LibraryApi};
use libris::commands::borrowing::BorrowList;
use libris::commands::CmdMessage;
use libris::error::Result;
use libris::store::memory::{MemoryBookStore, MemoryBorrowerStore};
use std::io::{BufRead, Write};

use super::menu::MenuChoice;
use super::print::{
    write_book_list, write_borrower_list, write_found_book, write_found_borrower, write_menu,
    write_messages,
};
use super::prompt::Prompter;

pub type Library = LibraryApi<MemoryBookStore, MemoryBorrowerStore>;

const BOOK_ID_PROMPT: &str = "(5位，首字為字母後面為4位數字): ";

/// Whether the menu loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive menu. One choice per iteration, one operation per choice.
///
/// End of input anywhere is treated like choosing exit; an operation that was
/// only partly entered is dropped.
pub struct Session<R, W> {
    api: Library,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(api: Library, input: R, output: W) -> Self {
        Self {
            api,
            prompt: Prompter::new(input, output),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            write_menu(self.prompt.output())?;
            let choice = match self.prompt.ask_non_empty("請輸入您的選擇: ")? {
                Some(line) => MenuChoice::parse(&line),
                None => MenuChoice::Exit,
            };
            tracing::debug!(?choice, "menu selection");

            if self.dispatch(choice)? == Flow::Quit {
                writeln!(self.prompt.output(), "退出中...")?;
                return Ok(());
            }
        }
    }

    #[cfg(test)]
    pub fn api(&self) -> &Library {
        &self.api
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::DeleteBook => self.delete_book(),
            MenuChoice::SearchBook => self.search_book(),
            MenuChoice::ListBooks => self.list_books(),
            MenuChoice::AddBorrower => self.add_borrower(),
            MenuChoice::DeleteBorrower => self.delete_borrower(),
            MenuChoice::SearchBorrower => self.search_borrower(),
            MenuChoice::ListBorrowers => self.list_borrowers(),
            MenuChoice::Exit => Ok(Flow::Quit),
            MenuChoice::Invalid => {
                let invalid = [CmdMessage::error("無效的選擇，請重新輸入。")];
                write_messages(self.prompt.output(), &invalid)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_book(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt.ask_non_empty("輸入書名: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(author) = self.prompt.ask_non_empty("輸入作者: ")? else {
            return Ok(Flow::Quit);
        };
        let prompt = format!("輸入圖書編號 {}", BOOK_ID_PROMPT);
        let Some(book_id) = self.prompt.ask_book_id(&prompt)? else {
            return Ok(Flow::Quit);
        };

        let result = self.api.add_book(title, author, book_id)?;
        write_messages(self.prompt.output(), &result.messages)?;
        Ok(Flow::Continue)
    }

    fn delete_book(&mut self) -> Result<Flow> {
        let Some(book_id) = self.prompt.ask_non_empty("輸入要刪除的圖書編號: ")? else {
            return Ok(Flow::Quit);
        };

        let result = self.api.delete_book(&book_id)?;
        write_messages(self.prompt.output(), &result.messages)?;
        Ok(Flow::Continue)
    }

    fn search_book(&mut self) -> Result<Flow> {
        let Some(book_id) = self.prompt.ask_non_empty("輸入要查詢的圖書編號: ")? else {
            return Ok(Flow::Quit);
        };

        let result = self.api.find_book(&book_id)?;
        for book in &result.listed_books {
            write_found_book(self.prompt.output(), book)?;
        }
        write_messages(self.prompt.output(), &result.messages)?;
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> Result<Flow> {
        let result = self.api.list_books()?;
        write_book_list(self.prompt.output(), &result.listed_books)?;
        Ok(Flow::Continue)
    }

    fn add_borrower(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt.ask_non_empty("輸入借閱者姓名: ")? else {
            return Ok(Flow::Quit);
        };

        let mut books = BorrowList::new();
        let prompt = format!("輸入借閱的圖書編號 {}", BOOK_ID_PROMPT);
        loop {
            let Some(book_id) = self.prompt.ask_book_id(&prompt)? else {
                return Ok(Flow::Quit);
            };
            let outcome = books.offer(&book_id)?;
            write_messages(self.prompt.output(), &[outcome.message()])?;

            let Some(answer) = self.prompt.ask("是否添加更多圖書編號？(y/n): ")? else {
                return Ok(Flow::Quit);
            };
            if !wants_more(&answer) {
                break;
            }
        }

        let result = self.api.add_borrower(name, books)?;
        write_messages(self.prompt.output(), &result.messages)?;
        Ok(Flow::Continue)
    }

    fn delete_borrower(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt.ask_non_empty("輸入要刪除的借閱者姓名: ")? else {
            return Ok(Flow::Quit);
        };

        let result = self.api.delete_borrowers(&name)?;
        write_messages(self.prompt.output(), &result.messages)?;
        Ok(Flow::Continue)
    }

    fn search_borrower(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt.ask_non_empty("輸入要查詢的借閱者姓名: ")? else {
            return Ok(Flow::Quit);
        };

        let result = self.api.find_borrower(&name)?;
        for borrower in &result.listed_borrowers {
            write_found_borrower(self.prompt.output(), borrower)?;
        }
        write_messages(self.prompt.output(), &result.messages)?;
        Ok(Flow::Continue)
    }

    fn list_borrowers(&mut self) -> Result<Flow> {
        let result = self.api.list_borrowers()?;
        write_borrower_list(self.prompt.output(), &result.listed_borrowers)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libris::commands::CatalogOptions;
    use libris::store::{BookStore, BorrowerStore};
    use std::io::Cursor;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    fn seeded_library() -> Library {
        let mut api = LibraryApi::new(
            MemoryBookStore::new(),
            MemoryBorrowerStore::new(),
            CatalogOptions::default(),
        );
        api.seed();
        api
    }

    /// Run a whole session over `input` and return it with everything it printed.
    fn drive(input: &str) -> (TestSession, String) {
        let mut session = Session::new(
            seeded_library(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );
        session.run().unwrap();
        let out = String::from_utf8(session.prompt.output().clone()).unwrap();
        (session, out)
    }

    #[test]
    fn exit_choice_ends_session() {
        let (_, out) = drive("0\n4\n");
        assert!(out.contains("退出中..."));
        assert!(!out.contains("圖書列表"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (_, out) = drive("");
        assert!(out.contains("退出中..."));
    }

    #[test]
    fn lists_seeded_books_sorted() {
        let (_, out) = drive("4\n0\n");
        let a = out.find("A1234").unwrap();
        let f = out.find("F0123").unwrap();
        assert!(out.contains("紅樓夢"));
        assert!(a < f);
    }

    #[test]
    fn invalid_and_malformed_choices_are_reported() {
        let (session, out) = drive("9\nabc\n0\n");
        assert_eq!(out.matches("無效的選擇，請重新輸入。").count(), 2);
        assert_eq!(session.api().books().book_count(), 10);
    }

    #[test]
    fn add_book_reprompts_bad_ids_then_finds_it() {
        let (session, out) = drive("1\n圍城\n錢鍾書\n123\nAB123\nQ1947\n3\nQ1947\n0\n");

        assert_eq!(out.matches("圖書編號無效，請重新輸入").count(), 2);
        assert!(out.contains("圖書添加成功。"));
        assert!(out.contains("找到圖書 - 書名: 圍城, 作者: 錢鍾書"));
        assert_eq!(session.api().books().book_count(), 11);
    }

    #[test]
    fn delete_missing_book_reports_not_found() {
        let (session, out) = drive("2\nZ9999\n0\n");
        assert!(out.contains("找不到該圖書。"));
        assert_eq!(session.api().books().book_count(), 10);
    }

    #[test]
    fn borrower_duplicate_ids_are_skipped() {
        let (session, out) = drive("5\n小明\nA1234\ny\nA1234\nn\n0\n");

        assert!(out.contains("圖書已添加至借閱清單。"));
        assert!(out.contains("該圖書已經借閱過，無法重複借閱。"));
        assert!(out.contains("借閱者添加成功。"));

        let newest = &session.api().borrowers().list_borrowers()[0];
        assert_eq!(newest.name, "小明");
        assert_eq!(newest.borrowed_books, vec!["A1234"]);
    }

    #[test]
    fn delete_borrower_removes_all_with_name() {
        let (session, out) = drive("5\n小明\nC4567\nn\n6\n小明\n7\n小明\n0\n");

        assert!(out.contains("借閱者刪除成功"));
        assert!(out.contains("找不到該借閱者。"));
        assert_eq!(session.api().borrowers().borrower_count(), 4);
    }

    #[test]
    fn borrower_list_and_search() {
        let (_, out) = drive("8\n7\n小美\n0\n");
        assert!(out.contains("借閱者列表:"));
        let newest = out.find("小麗").unwrap();
        let oldest = out.find("小明").unwrap();
        assert!(newest < oldest);
        assert!(out.contains("找到借閱者 - 姓名: 小美, 借閱的圖書編號: D6789 E8901"));
    }

    #[test]
    fn input_ending_mid_borrower_adds_nothing() {
        let (session, _) = drive("5\n阿德\nA1234\n");
        assert_eq!(session.api().borrowers().borrower_count(), 5);
    }
}
