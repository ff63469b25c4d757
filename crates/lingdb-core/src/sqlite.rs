//! SQLite binding for storage scalars and symbols.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::decl_enum::{EnumValue, Symbol};
use crate::value::Value;

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Borrowed(ValueRef::Null),
            Value::Int64(i) => ToSqlOutput::Borrowed(ValueRef::Integer(*i)),
            Value::String(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

impl FromSql for Value {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Value::Null),
            ValueRef::Integer(i) => Ok(Value::Int64(i)),
            ValueRef::Text(_) => value.as_str().map(|s| Value::String(s.to_string())),
            ValueRef::Real(_) | ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}

impl<V: EnumValue> ToSql for Symbol<V> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = match self.to_value() {
            Value::Null => rusqlite::types::Value::Null,
            Value::Int64(i) => rusqlite::types::Value::Integer(i),
            Value::String(s) => rusqlite::types::Value::Text(s),
        };
        Ok(ToSqlOutput::Owned(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_value_round_trip_through_sqlite() {
        let conn = Connection::open_in_memory().unwrap();
        for value in [Value::Null, Value::Int64(42), Value::from("pl")] {
            let back: Value = conn
                .query_row("SELECT ?1", [&value], |row| row.get(0))
                .unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn test_real_columns_are_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        let result: rusqlite::Result<Value> = conn.query_row("SELECT 1.5", [], |row| row.get(0));
        assert!(result.is_err());
    }
}
