//! Adapters for the glossing abbreviation table.

use html_escape::encode_text;

use super::{Index, Renderable, RequestContext};
use crate::error::AppError;
use crate::json::GlossEntry;

/// HTML table of abbreviations.
pub struct GlossingHtml<'a> {
    abbreviations: &'a [(&'a str, &'a str)],
}

impl<'a> GlossingHtml<'a> {
    /// Wrap an abbreviation table.
    pub fn new(abbreviations: &'a [(&'a str, &'a str)]) -> Self {
        Self { abbreviations }
    }
}

impl Renderable for GlossingHtml<'_> {
    fn mimetype(&self) -> &'static str {
        "text/html"
    }

    fn extension(&self) -> Option<&'static str> {
        Some("html")
    }

    fn render(&self, _req: &RequestContext) -> Result<String, AppError> {
        let mut out = String::from("<table class=\"table glossing-abbreviations\">\n");
        out.push_str("<thead><tr><th>Abbreviation</th><th>Meaning</th></tr></thead>\n<tbody>\n");
        for (abbr, description) in self.abbreviations {
            out.push_str(&format!(
                "<tr><th>{}</th><td>{}</td></tr>\n",
                encode_text(abbr),
                encode_text(description)
            ));
        }
        out.push_str("</tbody>\n</table>\n");
        Ok(out)
    }
}

impl Index for GlossingHtml<'_> {}

/// Tab separated abbreviation list.
pub struct GlossingText<'a> {
    abbreviations: &'a [(&'a str, &'a str)],
}

impl<'a> GlossingText<'a> {
    /// Wrap an abbreviation table.
    pub fn new(abbreviations: &'a [(&'a str, &'a str)]) -> Self {
        Self { abbreviations }
    }
}

impl Renderable for GlossingText<'_> {
    fn extension(&self) -> Option<&'static str> {
        Some("txt")
    }

    fn render(&self, _req: &RequestContext) -> Result<String, AppError> {
        Ok(self
            .abbreviations
            .iter()
            .map(|(abbr, description)| format!("{}\t{}\n", abbr, description))
            .collect())
    }
}

impl Index for GlossingText<'_> {}

/// JSON list of abbreviations.
pub struct GlossingJson<'a> {
    abbreviations: &'a [(&'a str, &'a str)],
}

impl<'a> GlossingJson<'a> {
    /// Wrap an abbreviation table.
    pub fn new(abbreviations: &'a [(&'a str, &'a str)]) -> Self {
        Self { abbreviations }
    }
}

impl Renderable for GlossingJson<'_> {
    fn mimetype(&self) -> &'static str {
        "application/json"
    }

    fn extension(&self) -> Option<&'static str> {
        Some("json")
    }

    fn render(&self, _req: &RequestContext) -> Result<String, AppError> {
        let entries: Vec<GlossEntry> = self
            .abbreviations
            .iter()
            .map(|&entry| GlossEntry::from(entry))
            .collect();
        Ok(serde_json::to_string(&entries)?)
    }
}

impl Index for GlossingJson<'_> {}
