//! A single named constant of an enumeration.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use super::scalar::EnumValue;
use crate::value::Value;

/// One immutable member of a declared [`Enumeration`](super::Enumeration).
///
/// Two symbols are equal when they belong to the same enumeration and carry
/// the same persisted value. Symbols of different enumerations are neither
/// equal nor ordered.
#[derive(Debug, Clone)]
pub struct Symbol<V> {
    enumeration: String,
    name: String,
    value: V,
    description: String,
    extra: Vec<String>,
    ordinal: usize,
}

impl<V: EnumValue> Symbol<V> {
    pub(crate) fn new(
        enumeration: &str,
        name: String,
        value: V,
        description: String,
        extra: Vec<String>,
        ordinal: usize,
    ) -> Self {
        Self {
            enumeration: enumeration.to_string(),
            name,
            value,
            description,
            extra,
            ordinal,
        }
    }

    /// Name of the owning enumeration.
    pub fn enumeration(&self) -> &str {
        &self.enumeration
    }

    /// Name of the constant, unique within the enumeration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Persisted value, unique within the enumeration.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Auxiliary values declared after the description.
    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    /// Position of the symbol in its declaration.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Persisted value as a storage scalar.
    pub fn to_value(&self) -> Value {
        self.value.to_value()
    }
}

impl<V: EnumValue> fmt::Display for Symbol<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<V: EnumValue> PartialEq for Symbol<V> {
    fn eq(&self, other: &Self) -> bool {
        self.enumeration == other.enumeration && self.value == other.value
    }
}

impl<V: EnumValue> Eq for Symbol<V> {}

impl<V: EnumValue> Hash for Symbol<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.enumeration.hash(state);
        self.value.hash(state);
    }
}

impl<V: EnumValue> PartialOrd for Symbol<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.enumeration != other.enumeration {
            return None;
        }
        Some(self.value.cmp(&other.value))
    }
}

impl<V: EnumValue> Serialize for Symbol<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}
