//! Glossing abbreviation endpoints.

use std::collections::BTreeMap;

use axum::extract::{Path, Query};
use axum::http::Uri;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use lingdb_core::glossing::{self, LGR_ABBRS};

use crate::adapter::{negotiate, GlossingHtml, GlossingJson, GlossingText, Index, RequestContext};
use crate::error::AppError;
use crate::json::{GlossEntry, SuccessResponse};
use crate::AppState;

/// Glossing routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/glossing", get(list_abbreviations))
        .route("/glossing/:abbr", get(get_abbreviation))
}

/// Render the abbreviation table in the requested format.
async fn list_abbreviations(
    Query(params): Query<BTreeMap<String, String>>,
    uri: Uri,
) -> Result<Response, AppError> {
    let req = RequestContext::new(uri.path(), params);
    let candidates: Vec<Box<dyn Index>> = vec![
        Box::new(GlossingHtml::new(LGR_ABBRS)),
        Box::new(GlossingText::new(LGR_ABBRS)),
        Box::new(GlossingJson::new(LGR_ABBRS)),
    ];
    negotiate(candidates, req.format())?.render_to_response(&req)
}

/// Meaning of a single abbreviation.
async fn get_abbreviation(
    Path(abbr): Path<String>,
) -> Result<Json<SuccessResponse<GlossEntry>>, AppError> {
    let description = glossing::lookup(&abbr)
        .ok_or_else(|| AppError::NotFound(format!("{:?} is not a standard abbreviation", abbr)))?;
    Ok(Json(SuccessResponse::new(GlossEntry::from((
        abbr.as_str(),
        description,
    )))))
}
