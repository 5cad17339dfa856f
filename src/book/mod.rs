//! Address book collection.
//!
//! This module provides the ordered record collection and its lazy page iterator.

pub mod address_book;

pub use address_book::{AddressBook, Pages, DEFAULT_PAGE_SIZE};
