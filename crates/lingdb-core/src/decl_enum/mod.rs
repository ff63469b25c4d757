//! Declarative symbolic enumerations bound to storage columns.
//!
//! An [`Enumeration`] is a closed set of [`Symbol`]s, each carrying a
//! persisted value and a description. It is declared once, either through
//! [`Enumeration::builder`] or through the [`decl_enum!`](crate::decl_enum!)
//! macro which additionally generates a typed Rust enum whose variants are the
//! named constants. After declaration an enumeration is immutable and can be
//! shared freely between threads.
//!
//! [`DeclEnumType`] is the persistence adapter: it writes a symbol as its
//! persisted value and reads stored scalars back into symbols, failing with
//! [`Error::InvalidEnumerationValue`](crate::Error::InvalidEnumerationValue)
//! when the stored data no longer matches the declaration.

mod column;
mod enumeration;
mod scalar;
mod symbol;
mod typed;

pub use column::{constraint_name, DeclEnumType};
pub use enumeration::{Enumeration, EnumerationBuilder, Iter};
pub use scalar::EnumValue;
pub use symbol::Symbol;
pub use typed::DeclEnum;
