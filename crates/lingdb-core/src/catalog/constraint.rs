//! Check constraints restricting a column to a closed value set.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A check constraint (expression must evaluate to true).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConstraint {
    /// Constraint name.
    pub name: String,
    /// Entity (table) this constraint applies to.
    pub entity: String,
    /// Constrained column.
    pub column: String,
    /// Boolean SQL expression.
    pub expression: String,
}

impl CheckConstraint {
    /// Create a check constraint from a raw expression.
    pub fn new(
        name: impl Into<String>,
        entity: impl Into<String>,
        column: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            entity: entity.into(),
            column: column.into(),
            expression: expression.into(),
        }
    }

    /// Create a constraint allowing `column` to hold only the given values.
    pub fn one_of<'v>(
        name: impl Into<String>,
        entity: impl Into<String>,
        column: impl Into<String>,
        allowed: impl IntoIterator<Item = &'v Value>,
    ) -> Self {
        let column = column.into();
        let literals: Vec<String> = allowed.into_iter().map(Value::to_sql_literal).collect();
        let expression = format!("{} IN ({})", column, literals.join(", "));
        Self::new(name, entity, column, expression)
    }

    /// SQL fragment for use inside `CREATE TABLE`.
    pub fn to_sql(&self) -> String {
        format!("CONSTRAINT {} CHECK ({})", self.name, self.expression)
    }
}
