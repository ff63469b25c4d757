//! LingDB Core - declarative enumerations, storage binding and reference data.
//!
//! This crate provides the building blocks that the LingDB web layer and
//! schema tooling share: closed symbolic enumerations bound to storage
//! columns, the glossing abbreviation table and a few text helpers.

pub mod catalog;
pub mod decl_enum;
pub mod error;
pub mod glossing;
#[cfg(feature = "sqlite")]
mod sqlite;
pub mod util;
pub mod value;

pub use catalog::{CheckConstraint, FieldType, ScalarType};
pub use decl_enum::{DeclEnum, DeclEnumType, EnumValue, Enumeration, EnumerationBuilder, Symbol};
pub use error::{Error, Result};
pub use glossing::LGR_ABBRS;
pub use util::{format_size, slug, summary, xmlchars};
pub use value::Value;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
