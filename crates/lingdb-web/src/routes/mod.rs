//! HTTP routes.

pub mod enumerations;
pub mod glossing;
pub mod health;
