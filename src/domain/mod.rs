//! Domain value objects and types.
//!
//! This module contains the validated fields a contact record is built
//! from. Every field validates at construction time and on every later
//! assignment, so invalid data can never be represented in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod phone;

pub use birthday::{Birthday, BirthdayField, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use field::{Field, FieldKind, Name, NameField};
pub use phone::{Phone, PhoneField};
