//! Generic validated field.
//!
//! A [`Field`] holds a single raw value together with the value it presents
//! to callers. The validation hook lives on the field's *kind*, a zero-sized
//! type implementing [`FieldKind`], so `Field<Phone>` and `Field<Birthday>`
//! share one implementation of construction, assignment, equality and serde.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Validation and presentation rules for one kind of field.
pub trait FieldKind {
    /// Kind name used in debug output and logs.
    const NAME: &'static str;

    /// Stored representation.
    type Raw;

    /// Representation handed out by [`Field::value`].
    type Value;

    /// Validate a raw value, producing its presented form.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the rejected value.
    fn validate(raw: &Self::Raw) -> Result<Self::Value, ValidationError>;
}

/// A value slot whose contents always satisfy `K`'s validation.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneField;
///
/// let mut phone = PhoneField::new("380501234567").unwrap();
/// assert_eq!(phone.value(), "+380501234567");
///
/// assert!(phone.set("not a number").is_err());
/// assert_eq!(phone.raw(), "380501234567");
/// ```
pub struct Field<K: FieldKind> {
    raw: K::Raw,
    value: K::Value,
}

impl<K: FieldKind> Field<K> {
    /// Create a new field, validating the initial value.
    ///
    /// # Errors
    ///
    /// Returns the kind's `ValidationError` if `raw` is rejected.
    pub fn new(raw: impl Into<K::Raw>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let value = K::validate(&raw)?;
        Ok(Self { raw, value })
    }

    /// Get the presented value.
    pub fn value(&self) -> &K::Value {
        &self.value
    }

    /// Get the stored raw value.
    pub fn raw(&self) -> &K::Raw {
        &self.raw
    }

    /// Replace the stored value if it passes validation.
    ///
    /// On error the field keeps its previous value.
    pub fn set(&mut self, raw: impl Into<K::Raw>) -> Result<(), ValidationError> {
        let raw = raw.into();
        match K::validate(&raw) {
            Ok(value) => {
                self.raw = raw;
                self.value = value;
                tracing::trace!(field = K::NAME, "Field value replaced");
                Ok(())
            }
            Err(e) => {
                tracing::debug!(field = K::NAME, error = %e, "Field assignment rejected");
                Err(e)
            }
        }
    }

    /// Convert into the underlying raw value.
    pub fn into_raw(self) -> K::Raw {
        self.raw
    }
}

impl<K> Clone for Field<K>
where
    K: FieldKind,
    K::Raw: Clone,
    K::Value: Clone,
{
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            value: self.value.clone(),
        }
    }
}

// Equality is decided by the raw value; the presented value is derived from it.
impl<K> PartialEq for Field<K>
where
    K: FieldKind,
    K::Raw: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K> Eq for Field<K>
where
    K: FieldKind,
    K::Raw: Eq,
{
}

impl<K> fmt::Debug for Field<K>
where
    K: FieldKind,
    K::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(value={:?})", K::NAME, self.value)
    }
}

impl<K> fmt::Display for Field<K>
where
    K: FieldKind,
    K::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Serde support - serialize as the raw value
impl<K> Serialize for Field<K>
where
    K: FieldKind,
    K::Raw: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from the raw value with validation
impl<'de, K> Deserialize<'de> for Field<K>
where
    K: FieldKind,
    K::Raw: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = K::Raw::deserialize(deserializer)?;
        Field::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Free-form name; accepts any string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Name;

impl FieldKind for Name {
    const NAME: &'static str = "Name";
    type Raw = String;
    type Value = String;

    fn validate(raw: &String) -> Result<String, ValidationError> {
        Ok(raw.clone())
    }
}

/// A contact's name.
pub type NameField = Field<Name>;
