//! Page-by-page rendering of an address book for the binary.
//!
//! Text mode prints a `Page N` header followed by one indented record per
//! line, with days to the next birthday when one is tracked. JSON mode
//! prints each page as one JSON array per line.

use crate::book::AddressBook;
use crate::config::OutputFormat;
use crate::error::OutputResult;
use chrono::{Local, NaiveDate};
use std::io::Write;

/// Write `book` to `out` in pages of `page_size`, counting birthdays from today.
pub fn print_book<W: Write>(
    out: &mut W,
    book: &AddressBook,
    page_size: usize,
    format: OutputFormat,
) -> OutputResult<()> {
    print_book_on(out, book, page_size, format, Local::now().date_naive())
}

/// Write `book` to `out` in pages of `page_size`, counting birthdays from `today`.
///
/// An empty book writes nothing.
pub fn print_book_on<W: Write>(
    out: &mut W,
    book: &AddressBook,
    page_size: usize,
    format: OutputFormat,
    today: NaiveDate,
) -> OutputResult<()> {
    for (number, page) in book.iter_pages(page_size)?.enumerate() {
        match format {
            OutputFormat::Text => {
                writeln!(out, "Page {}", number + 1)?;
                for record in page {
                    match record.days_to_next_birthday_from(today) {
                        Some(days) => writeln!(out, "  {} [{} days to birthday]", record, days)?,
                        None => writeln!(out, "  {}", record)?,
                    }
                }
            }
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string(page)?)?;
            }
        }
    }

    tracing::debug!(records = book.len(), page_size = page_size, "Address book printed");
    Ok(())
}
