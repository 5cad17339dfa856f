//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when working with an address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// Record to delete is not in the book
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Caller passed an argument outside its allowed range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A field rejected its value
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur when parsing an imported contact line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required column is absent from the line
    #[error("Missing {0} column")]
    MissingColumn(&'static str),

    /// A field rejected its value
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while printing an address book.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Writing to the output failed
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode a page as JSON
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The book refused the requested paging
    #[error(transparent)]
    Book(#[from] AddressBookError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with OutputError
pub type OutputResult<T> = Result<T, OutputError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::NotFound("Ann (+123)".to_string());
        assert_eq!(err.to_string(), "Record not found: Ann (+123)");

        let err = AddressBookError::InvalidArgument("page_size must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: page_size must be positive");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
            reason: "Must be greater than 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_PAGE_SIZE: Must be greater than 0"
        );
    }

    #[test]
    fn test_input_error_display() {
        let err = InputError::MissingColumn("phone");
        assert_eq!(err.to_string(), "Missing phone column");

        let err: InputError = ValidationError::InvalidBirthday("x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid birthday date x");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: AddressBookError = ValidationError::InvalidPhone("x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid phone number x");
        assert!(matches!(err, AddressBookError::Validation(_)));
    }
}
