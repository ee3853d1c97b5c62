//! HTTP routes for the quote API.

use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::AppState;

use super::requests::{QuoteQuery, QuoteRequest};
use super::responses::QuoteResponse;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/quote", get(quote_from_query).post(quote_from_json))
}

/// GET /api/quote?width=&height=&material=&install=
async fn quote_from_query(
    State(state): State<AppState>,
    Query(query): Query<QuoteQuery>,
) -> Json<QuoteResponse> {
    let input = query.to_input(&state.config.quote_defaults);
    let result = input.compute();
    tracing::debug!(area = %result.area_sq_ft, total = %result.total_cost, "quote computed");
    Json(QuoteResponse::new(&input, &result))
}

/// POST /api/quote
///
/// Reads the body itself so a malformed one still yields a quote.
async fn quote_from_json(State(state): State<AppState>, body: Bytes) -> Json<QuoteResponse> {
    let input = QuoteRequest::from_body(&body).to_input(&state.config.quote_defaults);
    let result = input.compute();
    tracing::debug!(area = %result.area_sq_ft, total = %result.total_cost, "quote computed");
    Json(QuoteResponse::new(&input, &result))
}
