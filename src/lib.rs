//! Address Book - an in-memory personal contact book.
//!
//! This library stores named contact records (name, phone, optional birthday),
//! validates every field on construction and assignment, and hands out the
//! records page by page.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday) and their errors
//! - **models**: The contact record
//! - **book**: The ordered record collection and its page iterator
//! - **error**: Crate-level error types
//! - **config**: Configuration for the binary from environment variables
//! - **input**: Line-oriented contact import for the binary
//! - **output**: Page-by-page text and JSON rendering for the binary

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod models;
pub mod output;

pub use book::{AddressBook, Pages, DEFAULT_PAGE_SIZE};
pub use config::{Config, OutputFormat};
pub use domain::{BirthdayField, NameField, PhoneField, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError, InputError, OutputError};
pub use models::Record;
