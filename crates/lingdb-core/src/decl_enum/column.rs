//! Persistence adapter between symbols and storage scalars.

use tracing::warn;

use super::enumeration::Enumeration;
use super::scalar::EnumValue;
use super::symbol::Symbol;
use crate::catalog::{CheckConstraint, FieldType};
use crate::error::{Error, Result};
use crate::value::Value;

/// Derive the check constraint name for an enumeration identifier.
///
/// Every ASCII uppercase letter becomes an underscore followed by its
/// lowercase form, and the result is prefixed with `ck`. Migration tooling
/// keys constraint identity off this name, so it must stay stable.
///
/// ```
/// use lingdb_core::decl_enum::constraint_name;
///
/// assert_eq!(constraint_name("GrammaticalGender"), "ck_grammatical_gender");
/// ```
pub fn constraint_name(enumeration: &str) -> String {
    let mut name = String::with_capacity(enumeration.len() + 8);
    name.push_str("ck");
    for c in enumeration.chars() {
        if c.is_ascii_uppercase() {
            name.push('_');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

/// Column type bound to exactly one enumeration.
///
/// Writes a symbol as its persisted value and reads stored scalars back into
/// symbols of the bound enumeration.
#[derive(Debug, Clone)]
pub struct DeclEnumType<'a, V> {
    enumeration: &'a Enumeration<V>,
    name: String,
}

impl<'a, V: EnumValue> DeclEnumType<'a, V> {
    /// Bind a column type to an enumeration.
    pub fn new(enumeration: &'a Enumeration<V>) -> Self {
        Self {
            name: constraint_name(enumeration.name()),
            enumeration,
        }
    }

    /// Type (and check constraint) name, e.g. `ck_grammatical_gender`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound enumeration.
    pub fn enumeration(&self) -> &'a Enumeration<V> {
        self.enumeration
    }

    /// Allowed storage scalars, in ascending order.
    pub fn values(&self) -> Vec<Value> {
        self.enumeration.iter().map(Symbol::to_value).collect()
    }

    /// Convert a symbol for storage. `None` is stored as `NULL`.
    pub fn write(&self, symbol: Option<&Symbol<V>>) -> Value {
        match symbol {
            Some(symbol) => symbol.to_value(),
            None => Value::Null,
        }
    }

    /// Convert a stored scalar back into a symbol.
    ///
    /// `NULL` reads as `None`. Text is trimmed before the lookup. A scalar
    /// that matches no symbol means the stored data and the declaration have
    /// drifted apart and is reported as
    /// [`Error::InvalidEnumerationValue`].
    pub fn read(&self, value: &Value) -> Result<Option<&'a Symbol<V>>> {
        if value.is_null() {
            return Ok(None);
        }

        let found = V::from_scalar(value)
            .ok_or_else(|| Error::invalid_value(self.enumeration.name(), value))
            .and_then(|key| self.enumeration.from_value(&key));

        match found {
            Ok(symbol) => Ok(Some(symbol)),
            Err(err) => {
                warn!(
                    column_type = %self.name,
                    value = %value,
                    "Stored value does not match enumeration"
                );
                Err(err)
            }
        }
    }

    /// Column type descriptor for schema declarations.
    pub fn field_type(&self) -> FieldType {
        let variants = self
            .enumeration
            .iter()
            .map(|symbol| symbol.value().to_string())
            .collect();
        FieldType::enum_type(self.name.clone(), V::SCALAR_TYPE, variants)
    }

    /// Check constraint restricting `column` of `entity` to this enumeration.
    pub fn check_constraint(&self, entity: &str, column: &str) -> CheckConstraint {
        CheckConstraint::one_of(self.name.clone(), entity, column, &self.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScalarType;

    fn gender() -> Enumeration<String> {
        Enumeration::builder("Gender")
            .symbol("MALE", "m", "masculine")
            .symbol("FEMALE", "f", "feminine")
            .build()
            .unwrap()
    }

    #[test]
    fn test_constraint_name() {
        assert_eq!(constraint_name("GrammaticalGender"), "ck_grammatical_gender");
        assert_eq!(constraint_name("Gender"), "ck_gender");
        assert_eq!(constraint_name("IGTStatus"), "ck_i_g_t_status");
        assert_eq!(constraint_name("status"), "ckstatus");
        assert_eq!(
            constraint_name("GrammaticalGender"),
            constraint_name("GrammaticalGender")
        );
    }

    #[test]
    fn test_write_read_round_trip() {
        let gender = gender();
        let db_type = gender.db_type();
        assert_eq!(db_type.name(), "ck_gender");

        for symbol in &gender {
            let stored = db_type.write(Some(symbol));
            assert_eq!(db_type.read(&stored).unwrap(), Some(symbol));
        }
        assert_eq!(db_type.write(None), Value::Null);
        assert_eq!(db_type.read(&Value::Null).unwrap(), None);
    }

    #[test]
    fn test_read_trims_whitespace() {
        let gender = gender();
        let db_type = gender.db_type();
        let padded = db_type.read(&Value::from(" m ")).unwrap();
        let exact = db_type.read(&Value::from("m")).unwrap();
        assert_eq!(padded, exact);
        assert_eq!(padded.unwrap().name(), "MALE");
    }

    #[test]
    fn test_read_unknown_value_fails() {
        let gender = gender();
        let db_type = gender.db_type();
        let err = db_type.read(&Value::from("x")).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for Gender: \"x\"");
        assert!(db_type.read(&Value::Int64(1)).unwrap_err().is_invalid_value());
    }

    #[test]
    fn test_integer_enumeration() {
        let person: Enumeration<i32> = Enumeration::builder("Person")
            .symbol("FIRST", 1, "first person")
            .symbol("SECOND", 2, "second person")
            .build()
            .unwrap();
        let db_type = person.db_type();

        assert_eq!(db_type.write(person.get("SECOND")), Value::Int64(2));
        assert_eq!(
            db_type.read(&Value::Int64(1)).unwrap().map(|s| s.name()),
            Some("FIRST")
        );
        assert_eq!(
            db_type.read(&Value::from(" 2 ")).unwrap().map(|s| s.name()),
            Some("SECOND")
        );
        assert!(db_type.read(&Value::Int64(3)).is_err());
    }

    #[test]
    fn test_schema_descriptors() {
        let gender = gender();
        let db_type = gender.db_type();

        let field_type = db_type.field_type();
        assert_eq!(field_type.name(), "ck_gender");
        assert_eq!(field_type.scalar(), ScalarType::String);
        assert_eq!(field_type.variants(), ["f", "m"]);

        let check = db_type.check_constraint("speaker", "gender");
        assert_eq!(check.name, "ck_gender");
        assert_eq!(check.expression, "gender IN ('f', 'm')");
    }
}
