use crate::commands::borrowing::BorrowList;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Borrower;
use crate::store::BorrowerStore;

pub fn run<S: BorrowerStore>(store: &mut S, name: String, books: BorrowList) -> Result<CmdResult> {
    let borrower = Borrower::new(name, books.into_book_ids());
    store.prepend_borrower(borrower.clone());
    tracing::debug!(
        name = %borrower.name,
        books = borrower.borrowed_books.len(),
        "borrower added"
    );

    Ok(CmdResult::default()
        .with_affected_borrowers(vec![borrower])
        .with_message(CmdMessage::success("借閱者添加成功。")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::borrowing::BorrowOutcome;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn new_borrower_lists_first() {
        let mut fixture = CatalogFixture::seeded();
        let mut books = BorrowList::new();
        books.offer("A1234").unwrap();

        run(&mut fixture.borrowers, "阿德".into(), books).unwrap();

        let listed = fixture.borrowers.list_borrowers();
        assert_eq!(listed.len(), 6);
        assert_eq!(listed[0].name, "阿德");
    }

    #[test]
    fn duplicate_borrow_is_stored_once() {
        let mut fixture = CatalogFixture::new();
        let mut books = BorrowList::new();
        assert_eq!(books.offer("A1234"), Ok(BorrowOutcome::Added));
        assert_eq!(books.offer("A1234"), Ok(BorrowOutcome::AlreadyListed));

        run(&mut fixture.borrowers, "小明".into(), books).unwrap();

        let stored = fixture.borrowers.find_borrower("小明").unwrap();
        assert_eq!(stored.borrowed_books, vec!["A1234"]);
    }

    #[test]
    fn does_not_check_other_borrowers_or_books() {
        // Soft references: the ID need not exist and may be held by someone else.
        let mut fixture = CatalogFixture::new().with_borrower("amy", &["Z9999"]);
        let books: BorrowList = vec!["Z9999".to_string()].into_iter().collect();

        run(&mut fixture.borrowers, "bob".into(), books).unwrap();

        assert!(fixture
            .borrowers
            .find_borrower("bob")
            .unwrap()
            .has_borrowed("Z9999"));
    }
}
