//! Data models for address book entries.
//!
//! This module contains the record type stored in an address book.

pub mod record;

pub use record::Record;
