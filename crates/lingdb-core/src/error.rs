//! Core error types.

use thiserror::Error;

/// Core errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A lookup did not resolve within an enumeration.
    ///
    /// Raised for unknown persisted values, unknown constant names and for
    /// stored scalars that match no symbol. The latter means the declared
    /// enumeration and the stored data have drifted apart.
    #[error("invalid value for {enumeration}: {value:?}")]
    InvalidEnumerationValue {
        /// Name of the enumeration.
        enumeration: String,
        /// The offending input.
        value: String,
    },

    /// Two symbols of one declaration share a persisted value.
    #[error("duplicate value {value:?} in {enumeration} (declared by {first} and {second})")]
    DuplicateValue {
        /// Name of the enumeration.
        enumeration: String,
        /// The repeated persisted value.
        value: String,
        /// Name of the symbol declared first.
        first: String,
        /// Name of the symbol declared second.
        second: String,
    },

    /// Two symbols of one declaration share a name.
    #[error("duplicate symbol name {name:?} in {enumeration}")]
    DuplicateName {
        /// Name of the enumeration.
        enumeration: String,
        /// The repeated symbol name.
        name: String,
    },
}

impl Error {
    pub(crate) fn invalid_value(enumeration: &str, value: impl ToString) -> Self {
        Error::InvalidEnumerationValue {
            enumeration: enumeration.to_string(),
            value: value.to_string(),
        }
    }

    /// Check if this error reports an unresolved enumeration lookup.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Error::InvalidEnumerationValue { .. })
    }
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
