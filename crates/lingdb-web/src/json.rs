//! JSON response types.

use serde::Serialize;

use crate::registry::{EnumerationView, SymbolEntry};

/// Generic success response wrapper.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    /// Success flag.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    /// Create a new success response.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Number of published enumerations.
    pub enumerations: usize,
}

/// Short description of a published enumeration.
#[derive(Debug, Serialize)]
pub struct EnumerationSummary {
    /// Enumeration name.
    pub name: String,
    /// Check constraint name of bound columns.
    pub constraint: String,
    /// Number of symbols.
    pub size: usize,
}

impl From<&dyn EnumerationView> for EnumerationSummary {
    fn from(enumeration: &dyn EnumerationView) -> Self {
        Self {
            name: enumeration.name().to_string(),
            constraint: enumeration.constraint_name(),
            size: enumeration.size(),
        }
    }
}

/// Full listing of an enumeration.
#[derive(Debug, Serialize)]
pub struct EnumerationDocument {
    /// Enumeration name.
    pub name: String,
    /// Check constraint name of bound columns.
    pub constraint: String,
    /// Request path the document was rendered for.
    pub path: String,
    /// Symbols ordered by persisted value.
    pub symbols: Vec<SymbolEntry>,
}

/// A single symbol together with its enumeration.
#[derive(Debug, Serialize)]
pub struct SymbolDocument {
    /// Enumeration name.
    pub enumeration: String,
    /// Request path the document was rendered for.
    pub path: String,
    /// The symbol.
    #[serde(flatten)]
    pub symbol: SymbolEntry,
}

/// A glossing abbreviation.
#[derive(Debug, Serialize)]
pub struct GlossEntry {
    /// Abbreviation as written in glosses.
    pub abbreviation: String,
    /// Meaning of the abbreviation.
    pub description: String,
}

impl From<(&str, &str)> for GlossEntry {
    fn from((abbreviation, description): (&str, &str)) -> Self {
        Self {
            abbreviation: abbreviation.to_string(),
            description: description.to_string(),
        }
    }
}
