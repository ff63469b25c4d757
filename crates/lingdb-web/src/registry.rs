//! Enumerations published by the service.

use std::collections::BTreeMap;
use std::sync::Arc;

use lingdb_core::decl_enum::constraint_name;
use lingdb_core::{DeclEnum, EnumValue, Enumeration, Symbol, Value};
use serde::Serialize;
use tracing::{debug, warn};

/// One symbol, independent of the persisted value type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolEntry {
    /// Name of the constant.
    pub name: String,
    /// Persisted value.
    pub value: Value,
    /// Human-readable description.
    pub description: String,
    /// Auxiliary values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
}

impl<V: EnumValue> From<&Symbol<V>> for SymbolEntry {
    fn from(symbol: &Symbol<V>) -> Self {
        Self {
            name: symbol.name().to_string(),
            value: symbol.to_value(),
            description: symbol.description().to_string(),
            extra: symbol.extra().to_vec(),
        }
    }
}

/// Type-erased read access to an enumeration.
pub trait EnumerationView: Send + Sync {
    /// Name of the enumeration.
    fn name(&self) -> &str;

    /// Number of symbols.
    fn size(&self) -> usize;

    /// Symbols ordered by persisted value.
    fn entries(&self) -> Vec<SymbolEntry>;

    /// Look up a symbol by the textual form of its persisted value.
    fn lookup(&self, value: &str) -> lingdb_core::Result<SymbolEntry>;

    /// Check constraint name of columns bound to this enumeration.
    fn constraint_name(&self) -> String {
        constraint_name(self.name())
    }
}

impl<V: EnumValue> EnumerationView for Enumeration<V> {
    fn name(&self) -> &str {
        Enumeration::name(self)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> Vec<SymbolEntry> {
        self.iter().map(SymbolEntry::from).collect()
    }

    fn lookup(&self, value: &str) -> lingdb_core::Result<SymbolEntry> {
        self.from_string(value).map(SymbolEntry::from)
    }
}

/// Enumerations keyed by name.
#[derive(Clone, Default)]
pub struct EnumerationRegistry {
    enumerations: BTreeMap<String, Arc<dyn EnumerationView>>,
}

impl EnumerationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an enumeration. A previous one with the same name is replaced.
    pub fn register<V: EnumValue>(&mut self, enumeration: Enumeration<V>) -> &mut Self {
        let name = enumeration.name().to_string();
        debug!(enumeration = %name, symbols = enumeration.len(), "Registering enumeration");
        if self
            .enumerations
            .insert(name.clone(), Arc::new(enumeration))
            .is_some()
        {
            warn!(enumeration = %name, "Replaced previously registered enumeration");
        }
        self
    }

    /// Publish the enumeration backing a declared type.
    pub fn register_decl<E: DeclEnum>(&mut self) -> &mut Self {
        self.register(E::enumeration().clone())
    }

    /// Get an enumeration by name.
    pub fn get(&self, name: &str) -> Option<&dyn EnumerationView> {
        self.enumerations
            .get(name)
            .map(|e| e.as_ref() as &dyn EnumerationView)
    }

    /// Iterate enumerations ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &dyn EnumerationView> {
        self.enumerations
            .values()
            .map(|e| e.as_ref() as &dyn EnumerationView)
    }

    /// Number of registered enumerations.
    pub fn len(&self) -> usize {
        self.enumerations.len()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.enumerations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank() -> Enumeration<i64> {
        Enumeration::builder("Rank")
            .symbol("TWO", 2, "second")
            .symbol("ONE", 1, "first")
            .build()
            .unwrap()
    }

    #[test]
    fn test_view_entries_are_sorted() {
        let rank = rank();
        let view: &dyn EnumerationView = &rank;
        let values: Vec<_> = view.entries().into_iter().map(|e| e.value).collect();
        assert_eq!(values, vec![Value::Int64(1), Value::Int64(2)]);
        assert_eq!(view.constraint_name(), "ck_rank");
        assert_eq!(view.lookup("2").unwrap().name, "TWO");
        assert!(view.lookup("4").unwrap_err().is_invalid_value());
    }

    #[test]
    fn test_registry_replaces_by_name() {
        let mut registry = EnumerationRegistry::new();
        registry.register(rank());
        registry.register(
            Enumeration::<i64>::builder("Rank")
                .symbol("ONE", 1, "first")
                .build()
                .unwrap(),
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Rank").unwrap().size(), 1);
        assert!(registry.get("Missing").is_none());
    }
}
