//! Error type for fallible lookups and conversions.

use crate::value::Key;

/// Errors surfaced by attribute access, checked lookups, and value conversion.
///
/// Path lookups never produce these; they fall back to a default instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DictError {
    /// The key is absent from the map.
    #[error("key `{key}` not found")]
    NotFound { key: Key },
    /// A nested lookup reached a value that is not a map.
    #[error("cannot read `{key}` from a {found} value")]
    NotAMap { key: Key, found: &'static str },
    /// A value could not be converted into the dynamic value model.
    #[error("failed to convert value: {0}")]
    Conversion(String),
}

impl DictError {
    pub(crate) fn not_found(key: impl Into<Key>) -> Self {
        DictError::NotFound { key: key.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DictError::NotFound { .. })
    }
}
