//! Book My Wallpaper web service.
//!
//! Server-rendered marketing site (catalogue, instant quote calculator,
//! consultation booking), an admin panel with a bookings calendar, and the
//! JSON API behind them.

pub mod cache;
pub mod calendar;
pub mod catalogue;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod quote;
pub mod routes;
pub mod validation;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

pub use cache::AppCache;
pub use config::Config;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: AppCache,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: PgPool, cache: AppCache, config: Config) -> Self {
        Self {
            db,
            cache,
            config: Arc::new(config),
        }
    }
}

/// Full application router with middleware
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(routes::router())
        .merge(quote::router())
        .nest_service("/static", static_files)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
