//! Record model representing one contact in the address book.

use crate::domain::{BirthdayField, NameField, PhoneField, ValidationError};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Custom deserializer for birthdays that treats a missing or empty string as no birthday
fn deserialize_birthday<'de, D>(deserializer: D) -> Result<Option<BirthdayField>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.filter(|s| !s.is_empty()) {
        Some(s) => BirthdayField::new(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// A contact: name, phone number and an optional birthday.
///
/// The three slots are fixed for the record's lifetime. Name and phone can
/// be reassigned through their validated setters, and so can the birthday
/// when the record was created with one. A record created without a
/// birthday never gains one.
///
/// # Example
///
/// ```
/// use address_book::Record;
///
/// let record = Record::new("Ann", "380501234567", Some("01.06.1990")).unwrap();
/// assert_eq!(record.to_string(), "Ann (+380501234567), 1990-06-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: NameField,

    phone: PhoneField,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_birthday"
    )]
    birthday: Option<BirthdayField>,
}

impl Record {
    /// Create a new record.
    ///
    /// A birthday is only tracked when `birthday` is a non-empty string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the phone or the birthday is rejected.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = NameField::new(name)?;
        let phone = PhoneField::new(phone)?;
        let birthday = match birthday.filter(|b| !b.is_empty()) {
            Some(raw) => Some(BirthdayField::new(raw)?),
            None => None,
        };

        Ok(Self {
            name,
            phone,
            birthday,
        })
    }

    /// Get the name field.
    pub fn name(&self) -> &NameField {
        &self.name
    }

    /// Get the name field for reassignment.
    pub fn name_mut(&mut self) -> &mut NameField {
        &mut self.name
    }

    /// Get the phone field.
    pub fn phone(&self) -> &PhoneField {
        &self.phone
    }

    /// Get the phone field for reassignment.
    pub fn phone_mut(&mut self) -> &mut PhoneField {
        &mut self.phone
    }

    /// Get the birthday field, if this record tracks one.
    pub fn birthday(&self) -> Option<&BirthdayField> {
        self.birthday.as_ref()
    }

    /// Get the birthday field for reassignment, if this record tracks one.
    pub fn birthday_mut(&mut self) -> Option<&mut BirthdayField> {
        self.birthday.as_mut()
    }

    /// Days from today (local time) until the next birthday.
    ///
    /// Returns `None` when no birthday is tracked. See
    /// [`Record::days_to_next_birthday_from`] for the rules.
    pub fn days_to_next_birthday(&self) -> Option<i64> {
        self.days_to_next_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, in `0..=366`.
    ///
    /// A birthday falling on `today` counts as 0. Feb 29 birthdays are
    /// celebrated on Mar 1 in non-leap years.
    ///
    /// Also returns `None` when the next birthday would fall after
    /// `NaiveDate::MAX`, so near the end of chrono's range `None` does not
    /// imply the record has no birthday; check [`Record::birthday`] to tell
    /// the two apart.
    pub fn days_to_next_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?.value();

        let mut next = anniversary_in(today.year(), birthday)?;
        if next < today {
            next = anniversary_in(today.year() + 1, birthday)?;
        }

        Some((next - today).num_days())
    }
}

/// The date `birthday` falls on in `year`.
fn anniversary_in(year: i32, birthday: &NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.phone)?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", {}", birthday)?;
        }
        Ok(())
    }
}
