use colored::Colorize;
use libris::api::{CmdMessage, MessageLevel};
use libris::model::{Book, Borrower};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

use super::menu::{MENU_ENTRIES, MENU_TITLE};

/// Column gap between aligned fields.
const GAP: &str = "  ";

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", MENU_TITLE.bold())?;
    for (number, label) in MENU_ENTRIES {
        writeln!(out, "{}. {}", number, label)?;
    }
    Ok(())
}

pub fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub fn write_found_book<W: Write>(out: &mut W, book: &Book) -> io::Result<()> {
    writeln!(
        out,
        "找到圖書 - 書名: {}, 作者: {}, 圖書編號: {}",
        book.title,
        book.author,
        book.book_id.yellow()
    )
}

pub fn write_book_list<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    writeln!(out, "圖書列表:")?;
    if books.is_empty() {
        return writeln!(out, "{}", "（沒有圖書）".dimmed());
    }

    let title_width = column_width(books.iter().map(|b| b.title.as_str()));
    let author_width = column_width(books.iter().map(|b| b.author.as_str()));

    for book in books {
        writeln!(
            out,
            "書名: {}{}作者: {}{}圖書編號: {}",
            pad_to_width(&book.title, title_width),
            GAP,
            pad_to_width(&book.author, author_width),
            GAP,
            book.book_id.yellow()
        )?;
    }
    Ok(())
}

pub fn write_found_borrower<W: Write>(out: &mut W, borrower: &Borrower) -> io::Result<()> {
    writeln!(
        out,
        "找到借閱者 - 姓名: {}, 借閱的圖書編號: {}",
        borrower.name,
        join_ids(&borrower.borrowed_books)
    )
}

pub fn write_borrower_list<W: Write>(out: &mut W, borrowers: &[Borrower]) -> io::Result<()> {
    writeln!(out, "借閱者列表:")?;
    if borrowers.is_empty() {
        return writeln!(out, "{}", "（沒有借閱者）".dimmed());
    }

    let name_width = column_width(borrowers.iter().map(|b| b.name.as_str()));
    for borrower in borrowers {
        writeln!(
            out,
            "姓名: {}{}借閱的圖書編號: {}",
            pad_to_width(&borrower.name, name_width),
            GAP,
            join_ids(&borrower.borrowed_books)
        )?;
    }
    Ok(())
}

fn join_ids(ids: &[String]) -> String {
    ids.join(" ")
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Right-pad `s` with spaces to `width` terminal columns. Wide (CJK)
/// characters count as two columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
