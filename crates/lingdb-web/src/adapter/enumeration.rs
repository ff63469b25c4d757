//! Adapters for published enumerations and their symbols.

use lingdb_core::summary;

use super::{Index, Renderable, Representation, RequestContext};
use crate::error::AppError;
use crate::json::{EnumerationDocument, SymbolDocument};
use crate::registry::{EnumerationView, SymbolEntry};

/// JSON listing of an enumeration.
pub struct EnumerationJson<'a> {
    enumeration: &'a dyn EnumerationView,
}

impl<'a> EnumerationJson<'a> {
    /// Wrap an enumeration.
    pub fn new(enumeration: &'a dyn EnumerationView) -> Self {
        Self { enumeration }
    }
}

impl Renderable for EnumerationJson<'_> {
    fn mimetype(&self) -> &'static str {
        "application/json"
    }

    fn extension(&self) -> Option<&'static str> {
        Some("json")
    }

    fn render(&self, req: &RequestContext) -> Result<String, AppError> {
        let document = EnumerationDocument {
            name: self.enumeration.name().to_string(),
            constraint: self.enumeration.constraint_name(),
            path: req.path.clone(),
            symbols: self.enumeration.entries(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

impl Index for EnumerationJson<'_> {}

/// Plain text listing with shortened descriptions.
pub struct EnumerationText<'a> {
    enumeration: &'a dyn EnumerationView,
    description_length: usize,
}

impl<'a> EnumerationText<'a> {
    /// Wrap an enumeration; descriptions are cut to `description_length`.
    pub fn new(enumeration: &'a dyn EnumerationView, description_length: usize) -> Self {
        Self {
            enumeration,
            description_length,
        }
    }
}

impl Renderable for EnumerationText<'_> {
    fn extension(&self) -> Option<&'static str> {
        Some("txt")
    }

    fn render(&self, _req: &RequestContext) -> Result<String, AppError> {
        let entries = self.enumeration.entries();
        let width = entries
            .iter()
            .map(|entry| entry.value.to_string().chars().count())
            .max()
            .unwrap_or(0);

        let mut out = format!("{}\n", self.enumeration.name());
        for entry in &entries {
            out.push_str(&format!(
                "{:<width$}  {}\n",
                entry.value.to_string(),
                summary(&entry.description, self.description_length),
                width = width,
            ));
        }
        Ok(out)
    }
}

impl Index for EnumerationText<'_> {}

/// Tab separated listing, displayed inline by browsers.
pub struct EnumerationTsv<'a> {
    enumeration: &'a dyn EnumerationView,
}

impl<'a> EnumerationTsv<'a> {
    /// Wrap an enumeration.
    pub fn new(enumeration: &'a dyn EnumerationView) -> Self {
        Self { enumeration }
    }
}

impl Renderable for EnumerationTsv<'_> {
    fn mimetype(&self) -> &'static str {
        "text/tab-separated-values"
    }

    fn extension(&self) -> Option<&'static str> {
        Some("tsv")
    }

    fn send_mimetype(&self) -> Option<&'static str> {
        Some("text/plain")
    }

    fn render(&self, _req: &RequestContext) -> Result<String, AppError> {
        let mut out = String::from("value\tname\tdescription\n");
        for entry in self.enumeration.entries() {
            out.push_str(&format!(
                "{}\t{}\t{}\n",
                tsv_field(&entry.value.to_string()),
                tsv_field(&entry.name),
                tsv_field(&entry.description),
            ));
        }
        Ok(out)
    }
}

impl Index for EnumerationTsv<'_> {}

fn tsv_field(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}

/// JSON document for a single symbol.
pub struct SymbolJson<'a> {
    enumeration: &'a dyn EnumerationView,
    symbol: SymbolEntry,
}

impl<'a> SymbolJson<'a> {
    /// Wrap a symbol of `enumeration`.
    pub fn new(enumeration: &'a dyn EnumerationView, symbol: SymbolEntry) -> Self {
        Self {
            enumeration,
            symbol,
        }
    }
}

impl Renderable for SymbolJson<'_> {
    fn mimetype(&self) -> &'static str {
        "application/json"
    }

    fn extension(&self) -> Option<&'static str> {
        Some("json")
    }

    fn render(&self, req: &RequestContext) -> Result<String, AppError> {
        let document = SymbolDocument {
            enumeration: self.enumeration.name().to_string(),
            path: req.path.clone(),
            symbol: self.symbol.clone(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

impl Representation for SymbolJson<'_> {}

/// One-line plain text rendering of a symbol.
pub struct SymbolText {
    symbol: SymbolEntry,
}

impl SymbolText {
    /// Wrap a symbol.
    pub fn new(symbol: SymbolEntry) -> Self {
        Self { symbol }
    }
}

impl Renderable for SymbolText {
    fn extension(&self) -> Option<&'static str> {
        Some("txt")
    }

    fn render(&self, _req: &RequestContext) -> Result<String, AppError> {
        Ok(format!(
            "{} ({}): {}\n",
            self.symbol.value, self.symbol.name, self.symbol.description
        ))
    }
}

impl Representation for SymbolText {}
