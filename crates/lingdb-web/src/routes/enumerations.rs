//! Enumeration endpoints.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use tracing::debug;

use crate::adapter::{
    negotiate, EnumerationJson, EnumerationText, EnumerationTsv, Index, Representation,
    RequestContext, SymbolJson, SymbolText,
};
use crate::error::AppError;
use crate::json::{EnumerationSummary, SuccessResponse};
use crate::registry::EnumerationView;
use crate::AppState;

/// Enumeration routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/enumerations", get(list_enumerations))
        .route("/enumerations/:name", get(get_enumeration))
        .route("/enumerations/:name/:value", get(get_symbol))
}

fn find<'a>(state: &'a AppState, name: &str) -> Result<&'a dyn EnumerationView, AppError> {
    state
        .registry
        .get(name)
        .ok_or_else(|| AppError::NotFound(format!("enumeration {:?} is not published", name)))
}

/// List published enumerations.
async fn list_enumerations(
    State(state): State<AppState>,
) -> Json<SuccessResponse<Vec<EnumerationSummary>>> {
    let summaries = state.registry.iter().map(EnumerationSummary::from).collect();
    Json(SuccessResponse::new(summaries))
}

/// Render one enumeration in the requested format.
async fn get_enumeration(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<BTreeMap<String, String>>,
    uri: Uri,
) -> Result<Response, AppError> {
    let enumeration = find(&state, &name)?;
    let req = RequestContext::new(uri.path(), params);
    debug!(enumeration = %name, format = ?req.format(), "Rendering enumeration");

    let candidates: Vec<Box<dyn Index + '_>> = vec![
        Box::new(EnumerationJson::new(enumeration)),
        Box::new(EnumerationText::new(
            enumeration,
            state.config.description_length,
        )),
        Box::new(EnumerationTsv::new(enumeration)),
    ];
    negotiate(candidates, req.format())?.render_to_response(&req)
}

/// Render a single symbol, looked up by persisted value.
async fn get_symbol(
    State(state): State<AppState>,
    Path((name, value)): Path<(String, String)>,
    Query(params): Query<BTreeMap<String, String>>,
    uri: Uri,
) -> Result<Response, AppError> {
    let enumeration = find(&state, &name)?;
    let symbol = enumeration.lookup(&value)?;
    let req = RequestContext::new(uri.path(), params);

    let candidates: Vec<Box<dyn Representation + '_>> = vec![
        Box::new(SymbolJson::new(enumeration, symbol.clone())),
        Box::new(SymbolText::new(symbol)),
    ];
    negotiate(candidates, req.format())?.render_to_response(&req)
}
