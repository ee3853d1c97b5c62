//! Route handlers

pub mod admin;
pub mod api;
pub mod pages;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::AppState;

/// Pages, admin screens and the JSON API (the quote API lives in [`crate::quote`])
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/book", post(pages::book))
        .route("/admin", get(admin::panel))
        .route("/admin/wallpapers", post(admin::create_wallpaper))
        .route("/admin/wallpapers/:id/delete", post(admin::delete_wallpaper))
        .route("/admin/calendar", get(admin::bookings_calendar))
        .route(
            "/api/wallpapers",
            get(api::list_wallpapers).post(api::create_wallpaper),
        )
        .route("/api/wallpapers/:id", delete(api::delete_wallpaper))
        .route(
            "/api/bookings",
            get(api::list_bookings).post(api::create_booking),
        )
        .route("/healthz", get(api::health))
}
