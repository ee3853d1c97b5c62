//! JSON REST API: wallpapers, bookings and health
//!
//! Extractor rejections are taken as `Result`s and answered with the usual
//! `{error_type, message}` body.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::cache::load_catalogue;
use crate::db;
use crate::error::ApiResult;
use crate::models::{Booking, BookingRange, NewBooking, NewWallpaper, Wallpaper};
use crate::AppState;

/// GET /api/wallpapers
pub async fn list_wallpapers(State(state): State<AppState>) -> ApiResult<Json<Vec<Wallpaper>>> {
    let wallpapers = load_catalogue(&state.cache, &state.db).await?;
    Ok(Json((*wallpapers).clone()))
}

/// POST /api/wallpapers
pub async fn create_wallpaper(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewWallpaper>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = payload?;
    let wallpaper = body.validate()?;
    let created = db::create_wallpaper(&state.db, &wallpaper).await?;
    state.cache.invalidate_catalogue().await;
    tracing::info!(wallpaper_id = %created.id, title = %created.title, "Wallpaper created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/wallpapers/:id
pub async fn delete_wallpaper(
    State(state): State<AppState>,
    path: std::result::Result<Path<Uuid>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    db::delete_wallpaper(&state.db, id).await?;
    state.cache.invalidate_catalogue().await;
    tracing::info!(wallpaper_id = %id, "Wallpaper deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewBooking>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = payload?;
    let booking = body.validate()?;
    let created = db::create_booking(&state.db, &booking).await?;
    tracing::info!(booking_id = %created.id, date = %created.date, "Booking received");

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/bookings?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn list_bookings(
    State(state): State<AppState>,
    query: std::result::Result<Query<BookingRange>, QueryRejection>,
) -> ApiResult<Json<Vec<Booking>>> {
    let Query(range) = query?;
    let bookings = db::get_bookings(&state.db, &range).await?;
    Ok(Json(bookings))
}

/// GET /healthz
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "cache": state.cache.stats(),
    }))
}
