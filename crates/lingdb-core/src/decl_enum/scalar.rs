//! Types usable as persisted enumeration values.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::ScalarType;
use crate::value::Value;

/// A scalar type that can serve as the persisted value of a symbol.
///
/// The natural ordering of the type is the ordering of the symbols.
pub trait EnumValue:
    Ord + Hash + Clone + Debug + Display + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Column scalar type for this value type.
    const SCALAR_TYPE: ScalarType;

    /// Convert to a storage scalar.
    fn to_value(&self) -> Value;

    /// Parse from text exactly as given.
    fn from_text(text: &str) -> Option<Self>;

    /// Convert a non-null storage scalar, trimming surrounding whitespace from
    /// text.
    fn from_scalar(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Self::from_text(s.trim()),
            _ => None,
        }
    }
}

impl EnumValue for String {
    const SCALAR_TYPE: ScalarType = ScalarType::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl EnumValue for i64 {
    const SCALAR_TYPE: ScalarType = ScalarType::Int64;

    fn to_value(&self) -> Value {
        Value::Int64(*self)
    }

    fn from_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn from_scalar(value: &Value) -> Option<Self> {
        match value {
            Value::Int64(i) => Some(*i),
            Value::String(s) => Self::from_text(s.trim()),
            Value::Null => None,
        }
    }
}

impl EnumValue for i32 {
    const SCALAR_TYPE: ScalarType = ScalarType::Int32;

    fn to_value(&self) -> Value {
        Value::Int64((*self).into())
    }

    fn from_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn from_scalar(value: &Value) -> Option<Self> {
        match value {
            Value::Int64(i) => i32::try_from(*i).ok(),
            Value::String(s) => Self::from_text(s.trim()),
            Value::Null => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_values_are_trimmed_on_read() {
        assert_eq!(String::from_scalar(&Value::from(" m ")), Some("m".to_string()));
        assert_eq!(String::from_scalar(&Value::Int64(1)), None);
        assert_eq!(String::from_text(" m "), Some(" m ".to_string()));
    }

    #[test]
    fn test_integer_values() {
        assert_eq!(i64::from_scalar(&Value::Int64(7)), Some(7));
        assert_eq!(i64::from_scalar(&Value::from(" 7\n")), Some(7));
        assert_eq!(i32::from_scalar(&Value::Int64(i64::MAX)), None);
        assert_eq!(i32::from_text("x"), None);
        assert_eq!(3i32.to_value(), Value::Int64(3));
    }
}
