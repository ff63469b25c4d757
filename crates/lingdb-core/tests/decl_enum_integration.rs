//! Integration tests for declared enumerations.

use std::collections::BTreeSet;
use std::thread;

use lingdb_core::decl_enum;
use lingdb_core::decl_enum::{constraint_name, DeclEnum};
use lingdb_core::{Enumeration, Error, Value};

decl_enum! {
    /// Speaker gender as recorded in the metadata.
    pub enum Gender: String {
        Male = ("m", "masculine"),
        Female = ("f", "feminine"),
    }
}

decl_enum! {
    pub enum GrammaticalGender: String {
        Masculine = ("masc", "masculine"),
        Feminine = ("fem", "feminine"),
        Neuter = ("neut", "neuter"),
    }
}

#[test]
fn test_gender_scenario() {
    let values: BTreeSet<String> = Gender::values().into_iter().collect();
    let expected: BTreeSet<String> = ["f", "m"].iter().map(|s| s.to_string()).collect();
    assert_eq!(values, expected);

    assert_eq!(Gender::from_string("m").unwrap(), Gender::Male);

    let db_type = Gender::db_type();
    assert_eq!(db_type.write(Some(Gender::Male.symbol())), Value::from("m"));
    assert_eq!(
        db_type.read(&Value::from("f")).unwrap(),
        Some(Gender::Female.symbol())
    );
    assert!(matches!(
        db_type.read(&Value::from("x")),
        Err(Error::InvalidEnumerationValue { .. })
    ));
}

#[test]
fn test_symbols_are_shared_statics() {
    let first = Gender::Male.symbol();
    let second = Gender::enumeration().from_string("m").unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_every_symbol_round_trips() {
    for symbol in GrammaticalGender::enumeration() {
        let found = GrammaticalGender::enumeration()
            .from_value(symbol.value().as_str())
            .unwrap();
        assert_eq!(found, symbol);

        let db_type = GrammaticalGender::db_type();
        assert_eq!(db_type.read(&db_type.write(Some(symbol))).unwrap(), Some(symbol));
        assert_eq!(
            db_type
                .read(&Value::from(format!("  {}\t", symbol)))
                .unwrap(),
            Some(symbol)
        );
    }
}

#[test]
fn test_constraint_name_for_declared_type() {
    assert_eq!(GrammaticalGender::db_type().name(), "ck_grammatical_gender");
    assert_eq!(
        constraint_name(GrammaticalGender::enumeration().name()),
        GrammaticalGender::db_type().name()
    );
}

#[test]
fn test_iteration_order_is_by_value() {
    let ordered: Vec<_> = GrammaticalGender::sorted();
    assert_eq!(
        ordered,
        vec![
            GrammaticalGender::Feminine,
            GrammaticalGender::Masculine,
            GrammaticalGender::Neuter,
        ]
    );
    let again: Vec<_> = GrammaticalGender::enumeration()
        .iter()
        .map(|s| s.name())
        .collect();
    assert_eq!(again, ["Feminine", "Masculine", "Neuter"]);
}

#[test]
fn test_concurrent_reads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let raw = if i % 2 == 0 { " m" } else { "f " };
                Gender::from_stored(&Value::from(raw)).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 { Gender::Male } else { Gender::Female };
        assert_eq!(handle.join().unwrap(), Some(expected));
    }
}

#[test]
fn test_runtime_declared_enumeration() {
    let status: Enumeration<String> = Enumeration::builder("ValueSetStatus")
        .symbol("VERIFIED", "verified", "verified by an editor")
        .symbol("UNVERIFIED", "unverified", "not yet verified")
        .build()
        .unwrap();
    let db_type = status.db_type();

    assert_eq!(db_type.name(), "ck_value_set_status");
    assert_eq!(
        db_type.check_constraint("valueset", "status").expression,
        "status IN ('unverified', 'verified')"
    );
    assert_eq!(
        status.from_string("pending").unwrap_err().to_string(),
        "invalid value for ValueSetStatus: \"pending\""
    );
}
