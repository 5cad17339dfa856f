//! Phone field kind.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};

/// Phone numbers stored as bare digits and presented with a leading `+`.
///
/// Validation only checks that every character is an ASCII digit. The
/// empty string therefore passes and presents as `"+"`.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneField;
///
/// let phone = PhoneField::new("14155551234").unwrap();
/// assert_eq!(phone.value(), "+14155551234");
/// assert_eq!(phone.raw(), "14155551234");
///
/// assert!(PhoneField::new("+1-555-1234").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phone;

impl Phone {
    fn is_valid(phone: &str) -> bool {
        phone.chars().all(|c| c.is_ascii_digit())
    }
}

impl FieldKind for Phone {
    const NAME: &'static str = "Phone";
    type Raw = String;
    type Value = String;

    fn validate(raw: &String) -> Result<String, ValidationError> {
        if !Self::is_valid(raw) {
            return Err(ValidationError::InvalidPhone(raw.clone()));
        }

        Ok(format!("+{}", raw))
    }
}

/// A contact's phone number.
pub type PhoneField = Field<Phone>;
