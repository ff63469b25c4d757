//! Column descriptors handed to external schema tooling.
//!
//! Nothing here talks to a database. These are plain descriptions of what an
//! enumeration column looks like so migrations can declare it.

mod constraint;
mod types;

pub use constraint::CheckConstraint;
pub use types::{FieldType, ScalarType};
