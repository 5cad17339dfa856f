//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and address books.

use address_book::{AddressBook, Record};
use chrono::NaiveDate;

/// Create a sample record without a birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phone: &str) -> Record {
    Record::new(name, phone, None).expect("sample record should be valid")
}

/// Create a sample record with a `DD.MM.YYYY` birthday.
#[allow(dead_code)]
pub fn sample_record_with_birthday(name: &str, phone: &str, birthday: &str) -> Record {
    Record::new(name, phone, Some(birthday)).expect("sample record should be valid")
}

/// Create a book with `count` records named `Contact 1`, `Contact 2`, ...
#[allow(dead_code)]
pub fn numbered_book(count: usize) -> AddressBook {
    (1..=count)
        .map(|i| sample_record(&format!("Contact {}", i), &format!("{:09}", i)))
        .collect()
}

/// Names of the given records, in order.
#[allow(dead_code)]
pub fn names(records: &[Record]) -> Vec<String> {
    records.iter().map(|r| r.name().value().clone()).collect()
}

/// Build a calendar date.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}
