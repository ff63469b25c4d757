//! Column type definitions.

use serde::{Deserialize, Serialize};

/// Scalar types a persisted enumeration value can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// UTF-8 string.
    String,
}

impl ScalarType {
    /// Check if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ScalarType::Int32 | ScalarType::Int64)
    }

    /// SQL column type used for this scalar.
    pub fn sql_type(&self) -> &'static str {
        match self {
            ScalarType::Int32 | ScalarType::Int64 => "INTEGER",
            ScalarType::String => "TEXT",
        }
    }
}

/// Type of a column bound to a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// A required enumeration column.
    Enum {
        /// Name of the enum type (the check constraint name).
        name: String,
        /// Scalar type of the persisted values.
        scalar: ScalarType,
        /// Allowed persisted values, in ascending order.
        variants: Vec<String>,
    },
    /// An optional (nullable) enumeration column.
    OptionalEnum {
        /// Name of the enum type (the check constraint name).
        name: String,
        /// Scalar type of the persisted values.
        scalar: ScalarType,
        /// Allowed persisted values, in ascending order.
        variants: Vec<String>,
    },
}

impl FieldType {
    /// Create an enum field type.
    pub fn enum_type(name: impl Into<String>, scalar: ScalarType, variants: Vec<String>) -> Self {
        FieldType::Enum {
            name: name.into(),
            scalar,
            variants,
        }
    }

    /// Nullable variant of this type.
    pub fn optional(self) -> Self {
        match self {
            FieldType::Enum {
                name,
                scalar,
                variants,
            } => FieldType::OptionalEnum {
                name,
                scalar,
                variants,
            },
            optional => optional,
        }
    }

    /// Check if this type is nullable.
    pub fn is_nullable(&self) -> bool {
        matches!(self, FieldType::OptionalEnum { .. })
    }

    /// Name of the enum type.
    pub fn name(&self) -> &str {
        match self {
            FieldType::Enum { name, .. } | FieldType::OptionalEnum { name, .. } => name,
        }
    }

    /// Scalar type of the persisted values.
    pub fn scalar(&self) -> ScalarType {
        match self {
            FieldType::Enum { scalar, .. } | FieldType::OptionalEnum { scalar, .. } => *scalar,
        }
    }

    /// Allowed persisted values.
    pub fn variants(&self) -> &[String] {
        match self {
            FieldType::Enum { variants, .. } | FieldType::OptionalEnum { variants, .. } => variants,
        }
    }

    /// Column definition fragment, e.g. `TEXT NOT NULL`.
    pub fn column_sql(&self) -> String {
        if self.is_nullable() {
            self.scalar().sql_type().to_string()
        } else {
            format!("{} NOT NULL", self.scalar().sql_type())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_type_checks() {
        assert!(ScalarType::Int32.is_numeric());
        assert!(ScalarType::Int64.is_numeric());
        assert!(!ScalarType::String.is_numeric());
        assert_eq!(ScalarType::String.sql_type(), "TEXT");
    }

    #[test]
    fn test_enum_type() {
        let status = FieldType::enum_type(
            "ck_status",
            ScalarType::String,
            vec!["active".into(), "inactive".into()],
        );
        assert!(!status.is_nullable());
        assert_eq!(status.column_sql(), "TEXT NOT NULL");

        let optional = status.optional();
        assert!(optional.is_nullable());
        assert_eq!(optional.name(), "ck_status");
        assert_eq!(optional.variants().len(), 2);
        assert_eq!(optional.column_sql(), "TEXT");
    }
}
