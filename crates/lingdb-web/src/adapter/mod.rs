//! Adapters rendering domain objects into alternate representations.
//!
//! An adapter wraps one object and knows how to render it for one media
//! type. Handlers collect the candidate adapters for an object and let
//! [`negotiate`] pick one by the requested file extension.
//!
//! Two kinds of adapters exist, mirroring the two kinds of pages:
//! [`Representation`] for a single object and [`Index`] for listings.

mod enumeration;
mod glossing;

pub use enumeration::{EnumerationJson, EnumerationText, EnumerationTsv, SymbolJson, SymbolText};
pub use glossing::{GlossingHtml, GlossingJson, GlossingText};

use std::collections::BTreeMap;

use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Request data handed to adapters while rendering.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Request path.
    pub path: String,
    /// Query parameters.
    pub params: BTreeMap<String, String>,
}

impl RequestContext {
    /// Create a request context.
    pub fn new(path: impl Into<String>, params: BTreeMap<String, String>) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// Requested format (`?format=`), if any.
    pub fn format(&self) -> Option<&str> {
        self.params.get("format").map(String::as_str)
    }
}

/// Character set implied by a mimetype.
///
/// Textual and XML-based formats (including KML) are sent as UTF-8; others
/// carry no charset parameter.
pub fn charset_for(mimetype: &str) -> Option<&'static str> {
    if mimetype.starts_with("text/") || mimetype.contains("xml") || mimetype.contains("kml") {
        Some("utf-8")
    } else {
        None
    }
}

/// Base behaviour of all adapters.
pub trait Renderable {
    /// Media type of the rendered document.
    fn mimetype(&self) -> &'static str {
        "text/plain"
    }

    /// File extension selecting this adapter.
    fn extension(&self) -> Option<&'static str> {
        None
    }

    /// Media type to announce instead of [`mimetype`](Self::mimetype), e.g.
    /// to have browsers display a download format inline.
    fn send_mimetype(&self) -> Option<&'static str> {
        None
    }

    /// Character set of the rendered document.
    fn charset(&self) -> Option<&'static str> {
        charset_for(self.mimetype())
    }

    /// Render the adapted object.
    fn render(&self, req: &RequestContext) -> Result<String, AppError>;

    /// Value of the `Content-Type` header.
    fn content_type(&self) -> String {
        let mut content_type = self.send_mimetype().unwrap_or(self.mimetype()).to_string();
        if let Some(charset) = self.charset() {
            content_type.push_str("; charset=");
            content_type.push_str(charset);
        }
        content_type
    }

    /// Render into a complete response.
    fn render_to_response(&self, req: &RequestContext) -> Result<Response, AppError> {
        let body = self.render(req)?;
        Ok(([(header::CONTENT_TYPE, self.content_type())], body).into_response())
    }
}

/// Adapter rendering a single object.
pub trait Representation: Renderable {}

/// Adapter rendering a listing.
pub trait Index: Renderable {}

/// Pick the adapter for the requested format.
///
/// Without a format the first candidate wins.
pub fn negotiate<A: Renderable + ?Sized>(
    candidates: Vec<Box<A>>,
    format: Option<&str>,
) -> Result<Box<A>, AppError> {
    match format {
        None => candidates
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Internal("no adapter available".to_string())),
        Some(format) => candidates
            .into_iter()
            .find(|adapter| adapter.extension() == Some(format))
            .ok_or_else(|| AppError::NotFound(format!("format {:?} is not available", format))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl std::fmt::Debug for dyn Index {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Index").field("mimetype", &self.mimetype()).finish()
        }
    }

    struct Plain;

    impl Renderable for Plain {
        fn extension(&self) -> Option<&'static str> {
            Some("txt")
        }

        fn render(&self, req: &RequestContext) -> Result<String, AppError> {
            Ok(format!("rendered {}", req.path))
        }
    }

    impl Index for Plain {}

    struct Bibtex;

    impl Renderable for Bibtex {
        fn mimetype(&self) -> &'static str {
            "text/x-bibtex"
        }

        fn extension(&self) -> Option<&'static str> {
            Some("bib")
        }

        fn send_mimetype(&self) -> Option<&'static str> {
            Some("text/plain")
        }

        fn render(&self, _req: &RequestContext) -> Result<String, AppError> {
            Ok("@book{x}".to_string())
        }
    }

    impl Index for Bibtex {}

    #[test]
    fn test_charset_for() {
        assert_eq!(charset_for("text/html"), Some("utf-8"));
        assert_eq!(charset_for("application/xml"), Some("utf-8"));
        assert_eq!(charset_for("application/vnd.google-earth.kml+xml"), Some("utf-8"));
        assert_eq!(charset_for("application/json"), None);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(Plain.content_type(), "text/plain; charset=utf-8");
        assert_eq!(Bibtex.content_type(), "text/plain; charset=utf-8");
    }

    #[test]
    fn test_render_to_response() {
        let req = RequestContext::new("/x", BTreeMap::new());
        let response = Plain.render_to_response(&req).unwrap();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_negotiate() {
        let candidates = || -> Vec<Box<dyn Index>> {
            vec![Box::new(Plain) as Box<dyn Index>, Box::new(Bibtex)]
        };

        let chosen = negotiate(candidates(), None).unwrap();
        assert_eq!(chosen.extension(), Some("txt"));

        let chosen = negotiate(candidates(), Some("bib")).unwrap();
        assert_eq!(chosen.mimetype(), "text/x-bibtex");

        let err = negotiate(candidates(), Some("pdf")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_request_format() {
        let mut params = BTreeMap::new();
        params.insert("format".to_string(), "json".to_string());
        assert_eq!(RequestContext::new("/", params).format(), Some("json"));
        assert_eq!(RequestContext::default().format(), None);
    }
}
