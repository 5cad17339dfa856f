//! Ordered, in-memory collection of contact records.
//!
//! Records keep their insertion order and may repeat. Pages are handed out
//! lazily as borrowed slices, so the book cannot change while a page
//! sequence is alive.

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::slice;

/// Page size used by [`AddressBook::pages`].
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// An ordered collection of records.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// for i in 0..5 {
///     book.add_record(Record::new(format!("Contact {}", i), "123", None).unwrap());
/// }
///
/// let sizes: Vec<usize> = book.iter_pages(2).unwrap().map(|page| page.len()).collect();
/// assert_eq!(sizes, vec![2, 2, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record. Duplicates are allowed.
    pub fn add_record(&mut self, record: Record) {
        tracing::debug!(record = %record, "Adding record");
        self.records.push(record);
    }

    /// Remove the first record equal to `record` and return it.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NotFound` if no record matches; the book
    /// is left unchanged.
    pub fn delete_record(&mut self, record: &Record) -> AddressBookResult<Record> {
        match self.records.iter().position(|r| r == record) {
            Some(index) => {
                tracing::debug!(record = %record, index = index, "Deleting record");
                Ok(self.records.remove(index))
            }
            None => {
                tracing::debug!(record = %record, "Record to delete not found");
                Err(AddressBookError::NotFound(record.to_string()))
            }
        }
    }

    /// Iterate over the records in pages of at most `page_size`.
    ///
    /// Pages come in insertion order, never overlap and never are empty;
    /// an empty book yields no pages. Call again to start over.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidArgument` if `page_size` is 0.
    pub fn iter_pages(&self, page_size: usize) -> AddressBookResult<Pages<'_>> {
        if page_size == 0 {
            return Err(AddressBookError::InvalidArgument(
                "page_size must be a positive integer".to_string(),
            ));
        }

        tracing::debug!(
            page_size = page_size,
            total_records = self.records.len(),
            "Iterating address book pages"
        );

        Ok(Pages {
            chunks: self.records.chunks(page_size),
        })
    }

    /// Iterate over the records in pages of [`DEFAULT_PAGE_SIZE`].
    pub fn pages(&self) -> Pages<'_> {
        Pages {
            chunks: self.records.chunks(DEFAULT_PAGE_SIZE),
        }
    }

    /// Iterate over all records in order.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// All records as a slice.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Lazy page sequence returned by [`AddressBook::iter_pages`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: slice::Chunks<'a, Record>,
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a [Record];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl std::iter::FusedIterator for Pages<'_> {}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}
