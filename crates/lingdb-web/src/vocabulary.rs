//! Grammatical categories published by default.

use lingdb_core::decl_enum;

use crate::registry::EnumerationRegistry;

decl_enum! {
    /// Grammatical gender of a noun or agreement target.
    pub enum GrammaticalGender: String {
        Masculine = ("m", "masculine"),
        Feminine = ("f", "feminine"),
        Neuter = ("n", "neuter"),
    }
}

decl_enum! {
    /// Grammatical number.
    pub enum GrammaticalNumber: String {
        Singular = ("sg", "singular", "SG"),
        Dual = ("du", "dual", "DU"),
        Plural = ("pl", "plural", "PL"),
    }
}

decl_enum! {
    /// Grammatical person.
    pub enum Person: i32 {
        First = (1, "first person, includes the speaker", "1"),
        Second = (2, "second person, includes the addressee", "2"),
        Third = (3, "third person, neither speaker nor addressee", "3"),
    }
}

/// Registry holding the default grammatical categories.
pub fn default_registry() -> EnumerationRegistry {
    let mut registry = EnumerationRegistry::new();
    registry
        .register_decl::<GrammaticalGender>()
        .register_decl::<GrammaticalNumber>()
        .register_decl::<Person>();
    registry
}
