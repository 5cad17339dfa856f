//! Birthday field kind.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// `chrono` format matching `DD.MM.YYYY`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone would also accept signed or longer years, so the shape is checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// Birthdays stored as `DD.MM.YYYY` strings and presented as calendar dates.
///
/// # Example
///
/// ```
/// use address_book::domain::BirthdayField;
/// use chrono::NaiveDate;
///
/// let birthday = BirthdayField::new("01.06.1990").unwrap();
/// assert_eq!(*birthday.value(), NaiveDate::from_ymd_opt(1990, 6, 1).unwrap());
///
/// assert!(BirthdayField::new("1990-06-01").is_err());
/// assert!(BirthdayField::new("31.02.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday;

impl FieldKind for Birthday {
    const NAME: &'static str = "Birthday";
    type Raw = String;
    type Value = NaiveDate;

    fn validate(raw: &String) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.clone()));
        }

        // Year 0 parses in chrono but is not a calendar year.
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .ok()
            .filter(|date| date.year() >= 1)
            .ok_or_else(|| ValidationError::InvalidBirthday(raw.clone()))
    }
}

/// A contact's birthday.
pub type BirthdayField = Field<Birthday>;
