//! Closed collections of symbols and their declaration builder.

use std::borrow::Borrow;
use std::collections::btree_map::{self, BTreeMap};
use std::collections::HashMap;
use std::fmt::Display;

use tracing::debug;

use super::column::DeclEnumType;
use super::scalar::EnumValue;
use super::symbol::Symbol;
use crate::error::{Error, Result};

/// A named, closed and immutable set of symbols.
#[derive(Debug, Clone)]
pub struct Enumeration<V> {
    name: String,
    /// Symbols in declaration order.
    symbols: Vec<Symbol<V>>,
    /// Persisted value -> index into `symbols`.
    by_value: BTreeMap<V, usize>,
    /// Symbol name -> index into `symbols`.
    by_name: HashMap<String, usize>,
}

impl<V: EnumValue> Enumeration<V> {
    /// Start declaring an enumeration called `name`.
    pub fn builder(name: impl Into<String>) -> EnumerationBuilder<V> {
        EnumerationBuilder {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Name of the enumeration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the enumeration has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Look up the symbol with the given persisted value.
    pub fn from_value<Q>(&self, value: &Q) -> Result<&Symbol<V>>
    where
        V: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        self.by_value
            .get(value)
            .map(|&index| &self.symbols[index])
            .ok_or_else(|| Error::invalid_value(&self.name, value))
    }

    /// Look up a symbol by the textual form of its persisted value.
    ///
    /// The text is taken as is; use [`DeclEnumType::read`] for stored data
    /// that may carry padding.
    pub fn from_string(&self, text: &str) -> Result<&Symbol<V>> {
        let value = V::from_text(text).ok_or_else(|| Error::invalid_value(&self.name, text))?;
        self.from_value(&value)
    }

    /// Check if a persisted value is part of this enumeration.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.by_value.contains_key(value)
    }

    /// Get a declared constant by name.
    pub fn get(&self, name: &str) -> Option<&Symbol<V>> {
        self.by_name.get(name).map(|&index| &self.symbols[index])
    }

    /// Get a declared constant by name, failing like a value lookup.
    pub fn by_name(&self, name: &str) -> Result<&Symbol<V>> {
        self.get(name)
            .ok_or_else(|| Error::invalid_value(&self.name, name))
    }

    /// All persisted values in ascending order.
    pub fn values(&self) -> Vec<V> {
        self.by_value.keys().cloned().collect()
    }

    /// Iterate symbols ordered by persisted value.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            symbols: &self.symbols,
            order: self.by_value.values(),
        }
    }

    /// Symbols in declaration order.
    pub fn declared(&self) -> &[Symbol<V>] {
        &self.symbols
    }

    /// Persistence adapter bound to this enumeration.
    pub fn db_type(&self) -> DeclEnumType<'_, V> {
        DeclEnumType::new(self)
    }
}

impl<'a, V: EnumValue> IntoIterator for &'a Enumeration<V> {
    type Item = &'a Symbol<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the symbols of an enumeration, ordered by persisted value.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    symbols: &'a [Symbol<V>],
    order: btree_map::Values<'a, V, usize>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Symbol<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.order.next().map(|&index| &self.symbols[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.order.next_back().map(|&index| &self.symbols[index])
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// Collects symbol declarations for one enumeration.
#[derive(Debug, Clone)]
pub struct EnumerationBuilder<V> {
    name: String,
    entries: Vec<Entry<V>>,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    name: String,
    value: V,
    description: String,
    extra: Vec<String>,
}

impl<V: EnumValue> EnumerationBuilder<V> {
    /// Declare a symbol.
    pub fn symbol(
        self,
        name: impl Into<String>,
        value: impl Into<V>,
        description: impl Into<String>,
    ) -> Self {
        self.symbol_with_extra(name, value, description, Vec::new())
    }

    /// Declare a symbol carrying auxiliary values.
    pub fn symbol_with_extra(
        mut self,
        name: impl Into<String>,
        value: impl Into<V>,
        description: impl Into<String>,
        extra: Vec<String>,
    ) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            value: value.into(),
            description: description.into(),
            extra,
        });
        self
    }

    /// Build the enumeration.
    ///
    /// Fails if two symbols share a persisted value or a name.
    pub fn build(self) -> Result<Enumeration<V>> {
        let mut symbols = Vec::with_capacity(self.entries.len());
        let mut by_value = BTreeMap::new();
        let mut by_name = HashMap::with_capacity(self.entries.len());

        for (ordinal, entry) in self.entries.into_iter().enumerate() {
            if by_name.contains_key(&entry.name) {
                return Err(Error::DuplicateName {
                    enumeration: self.name,
                    name: entry.name,
                });
            }
            if let Some(&previous) = by_value.get(&entry.value) {
                let first: &Symbol<V> = &symbols[previous];
                return Err(Error::DuplicateValue {
                    enumeration: self.name,
                    value: entry.value.to_string(),
                    first: first.name().to_string(),
                    second: entry.name,
                });
            }

            by_value.insert(entry.value.clone(), ordinal);
            by_name.insert(entry.name.clone(), ordinal);
            symbols.push(Symbol::new(
                &self.name,
                entry.name,
                entry.value,
                entry.description,
                entry.extra,
                ordinal,
            ));
        }

        debug!(enumeration = %self.name, symbols = symbols.len(), "Declared enumeration");

        Ok(Enumeration {
            name: self.name,
            symbols,
            by_value,
            by_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gender() -> Enumeration<String> {
        Enumeration::builder("Gender")
            .symbol("MALE", "m", "masculine")
            .symbol("FEMALE", "f", "feminine")
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_round_trip() {
        let gender = gender();
        for symbol in &gender {
            assert_eq!(gender.from_value(symbol.value().as_str()).unwrap(), symbol);
        }
        assert_eq!(gender.from_string("m").unwrap().name(), "MALE");
    }

    #[test]
    fn test_unknown_value() {
        let gender = gender();
        let err = gender.from_string("x").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidEnumerationValue {
                enumeration: "Gender".into(),
                value: "x".into(),
            }
        );
        assert!(gender.from_string(" m").is_err());
    }

    #[test]
    fn test_named_constants() {
        let gender = gender();
        let male = gender.get("MALE").unwrap();
        assert_eq!(male.value(), "m");
        assert_eq!(male.description(), "masculine");
        assert_eq!(male.enumeration(), "Gender");
        assert!(gender.get("NEUTER").is_none());
        assert!(gender.by_name("NEUTER").unwrap_err().is_invalid_value());
    }

    #[test]
    fn test_iteration_is_sorted_and_restartable() {
        let rank: Enumeration<i64> = Enumeration::builder("Rank")
            .symbol("TWO", 2, "second")
            .symbol("ONE", 1, "first")
            .symbol("THREE", 3, "third")
            .build()
            .unwrap();

        let names: Vec<_> = rank.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["ONE", "TWO", "THREE"]);
        let again: Vec<_> = rank.iter().map(|s| *s.value()).collect();
        assert_eq!(again, [1, 2, 3]);
        assert_eq!(rank.iter().rev().next().unwrap().name(), "THREE");
        assert_eq!(rank.iter().len(), 3);

        let declared: Vec<_> = rank.declared().iter().map(|s| s.name()).collect();
        assert_eq!(declared, ["TWO", "ONE", "THREE"]);
        assert_eq!(rank.values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_value_is_rejected() {
        let err = Enumeration::<String>::builder("Gender")
            .symbol("MALE", "m", "masculine")
            .symbol("MASCULINE", "m", "masculine")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateValue {
                enumeration: "Gender".into(),
                value: "m".into(),
                first: "MALE".into(),
                second: "MASCULINE".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let err = Enumeration::<String>::builder("Gender")
            .symbol("MALE", "m", "masculine")
            .symbol("MALE", "x", "other")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateName { name, .. } if name == "MALE"));
    }

    #[test]
    fn test_extra_values_keep_order() {
        let status: Enumeration<String> = Enumeration::builder("Status")
            .symbol_with_extra(
                "VERIFIED",
                "verified",
                "verified by an editor",
                vec!["green".into(), "check".into()],
            )
            .build()
            .unwrap();
        assert_eq!(status.get("VERIFIED").unwrap().extra(), ["green", "check"]);
    }
}
