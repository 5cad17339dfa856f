//! Line-oriented contact import used by the binary.
//!
//! Each non-blank line that does not start with `#` is `name;phone[;birthday]`.

use crate::book::AddressBook;
use crate::error::InputError;
use crate::models::Record;
use std::io::BufRead;

/// Parse one input line.
///
/// Returns `None` for blank and comment lines. A line without a `;` has no
/// phone column and is rejected; `name;` is an explicitly empty phone.
pub fn parse_record_line(line: &str) -> Option<Result<Record, InputError>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut parts = line.splitn(3, ';').map(str::trim);
    let name = parts.next().unwrap_or_default();
    let Some(phone) = parts.next() else {
        return Some(Err(InputError::MissingColumn("phone")));
    };
    let birthday = parts.next();

    Some(Record::new(name, phone, birthday).map_err(InputError::from))
}

/// Read every valid record from `reader` into a new book.
///
/// Lines with invalid fields are logged and skipped.
pub fn read_book<R: BufRead>(reader: R) -> std::io::Result<AddressBook> {
    let mut book = AddressBook::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_record_line(&line) {
            Some(Ok(record)) => book.add_record(record),
            Some(Err(e)) => {
                tracing::warn!(line = index + 1, error = %e, "Skipping invalid contact");
            }
            None => {}
        }
    }

    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_parse_line_with_birthday() {
        let record = parse_record_line("Ann; 123 ;01.06.1990").unwrap().unwrap();
        assert_eq!(record.to_string(), "Ann (+123), 1990-06-01");
    }

    #[test]
    fn test_parse_line_without_birthday() {
        let record = parse_record_line("Bob;555").unwrap().unwrap();
        assert!(record.birthday().is_none());

        let record = parse_record_line("Bob;555;").unwrap().unwrap();
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_parse_line_without_phone_column_is_rejected() {
        assert_eq!(
            parse_record_line("Carol").unwrap().unwrap_err(),
            InputError::MissingColumn("phone")
        );
    }

    #[test]
    fn test_parse_line_explicit_empty_phone() {
        let record = parse_record_line("Carol;").unwrap().unwrap();
        assert_eq!(record.phone().value(), "+");
    }

    #[test]
    fn test_parse_line_skips_blank_and_comments() {
        assert!(parse_record_line("").is_none());
        assert!(parse_record_line("   ").is_none());
        assert!(parse_record_line("# name;phone;birthday").is_none());
    }

    #[test]
    fn test_parse_line_invalid() {
        assert!(matches!(
            parse_record_line("Ann;+123").unwrap(),
            Err(InputError::Validation(ValidationError::InvalidPhone(_)))
        ));
        assert!(parse_record_line("Ann;123;1990-06-01").unwrap().is_err());
    }

    #[test]
    fn test_read_book_skips_invalid_lines() {
        let input = "# contacts\nAnn;123;01.06.1990\nBad;12-34\nCarol\n\nBob;555\n";
        let book = read_book(input.as_bytes()).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.records()[0].name().value(), "Ann");
        assert_eq!(book.records()[1].name().value(), "Bob");
    }
}
