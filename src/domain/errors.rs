//! Domain validation errors.

use std::fmt;

/// Errors that can occur when a contact field rejects a value.
///
/// Every variant carries the rejected raw value so callers can report it
/// back or retry with a corrected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number contains something other than digits.
    InvalidPhone(String),

    /// The provided birthday is not a `DD.MM.YYYY` calendar date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// Name of the field kind that rejected the value.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidPhone(_) => "Phone",
            Self::InvalidBirthday(_) => "Birthday",
        }
    }

    /// The rejected raw value.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidPhone(value) | Self::InvalidBirthday(value) => value,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number {}", phone),
            Self::InvalidBirthday(date) => write!(f, "Invalid birthday date {}", date),
        }
    }
}

impl std::error::Error for ValidationError {}
