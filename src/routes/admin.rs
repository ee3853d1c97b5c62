//! Admin handlers: catalogue management and bookings calendar

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::cache::load_catalogue;
use crate::calendar::{self, month_grid, MonthCursor, BOOKINGS_PER_CELL, WEEKDAY_LABELS};
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{BookingRange, NewWallpaper, Wallpaper, WallpaperForm};
use crate::quote::format_rupees_exact;
use crate::AppState;

/// Catalogue row in the admin list
pub struct AdminWallpaper {
    pub id: String,
    pub title: String,
    pub style: String,
    pub color: String,
    pub room: String,
    pub img: String,
    pub price_display: String,
}

impl From<&Wallpaper> for AdminWallpaper {
    fn from(w: &Wallpaper) -> Self {
        Self {
            id: w.id.to_string(),
            title: w.title.clone(),
            style: w.style.clone(),
            color: w.color.clone(),
            room: w.room.clone(),
            img: w.img.clone(),
            price_display: format_rupees_exact(w.price),
        }
    }
}

/// Admin panel template
#[derive(Template)]
#[template(path = "admin.html")]
struct AdminTemplate {
    title: String,
    base_url: String,
    year: i32,
    wallpapers: Vec<AdminWallpaper>,
    form: WallpaperForm,
    error: Option<String>,
}

/// Admin panel page
pub async fn panel(State(state): State<AppState>) -> Result<Html<String>> {
    render_panel(&state, WallpaperForm::default(), None).await
}

/// POST /admin/wallpapers
pub async fn create_wallpaper(
    State(state): State<AppState>,
    Form(form): Form<WallpaperForm>,
) -> Result<Response> {
    let wallpaper = match NewWallpaper::from(form.clone()).validate() {
        Ok(w) => w,
        Err(e) => {
            let message = format!("Failed to create wallpaper: {}", e);
            let page = render_panel(&state, form, Some(message)).await?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    match db::create_wallpaper(&state.db, &wallpaper).await {
        Ok(created) => {
            state.cache.invalidate_catalogue().await;
            tracing::info!(wallpaper_id = %created.id, title = %created.title, "Wallpaper created");
            Ok(Redirect::to("/admin").into_response())
        }
        Err(e) => {
            tracing::error!("Failed to store wallpaper: {}", e);
            let message = Some("Failed to create wallpaper".to_string());
            let page = render_panel(&state, form, message).await?;
            Ok((StatusCode::INTERNAL_SERVER_ERROR, page).into_response())
        }
    }
}

/// POST /admin/wallpapers/:id/delete
pub async fn delete_wallpaper(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response> {
    match db::delete_wallpaper(&state.db, id).await {
        Ok(()) => {
            state.cache.invalidate_catalogue().await;
            tracing::info!(wallpaper_id = %id, "Wallpaper deleted");
            Ok(Redirect::to("/admin").into_response())
        }
        Err(AppError::NotFound) => {
            let message = Some("Delete failed".to_string());
            let page = render_panel(&state, WallpaperForm::default(), message).await?;
            Ok((StatusCode::NOT_FOUND, page).into_response())
        }
        Err(e) => Err(e),
    }
}

async fn render_panel(
    state: &AppState,
    form: WallpaperForm,
    error: Option<String>,
) -> Result<Html<String>> {
    let loaded = load_catalogue(&state.cache, &state.db).await;
    let (wallpapers, error): (Vec<AdminWallpaper>, Option<String>) = match loaded {
        Ok(items) => (items.iter().map(AdminWallpaper::from).collect(), error),
        Err(AppError::Database(e)) => {
            tracing::warn!("Failed to load wallpapers: {}", e);
            (Vec::new(), error.or_else(|| Some("Failed to load wallpapers".to_string())))
        }
        Err(e) => return Err(e),
    };

    let template = AdminTemplate {
        title: "Admin Panel • Book My Wallpaper".to_string(),
        base_url: state.config.backend_url.clone(),
        year: Utc::now().year(),
        wallpapers,
        form,
        error,
    };

    Ok(Html(template.render()?))
}

/// Calendar query string
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub month: Option<String>,
}

/// One day cell in the rendered calendar
pub struct CalendarCell {
    pub day: u32,
    pub in_month: bool,
    pub count: usize,
    pub entries: Vec<String>,
    pub more: usize,
}

/// Bookings calendar template
#[derive(Template)]
#[template(path = "calendar.html")]
struct CalendarTemplate {
    title: String,
    base_url: String,
    year: i32,
    month_title: String,
    previous_month: String,
    next_month: String,
    weekdays: Vec<&'static str>,
    weeks: Vec<Vec<CalendarCell>>,
    error: Option<String>,
}

/// GET /admin/calendar?month=YYYY-MM
pub async fn bookings_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Html<String>> {
    let today = Utc::now().date_naive();
    let cursor = query
        .month
        .as_deref()
        .and_then(MonthCursor::parse)
        .unwrap_or_else(|| MonthCursor::containing(today));

    let range = BookingRange {
        start: Some(cursor.first_day()),
        end: Some(cursor.last_day()),
    };

    let (by_date, error) = match db::get_bookings(&state.db, &range).await {
        Ok(bookings) => (calendar::group_by_date(bookings), None),
        Err(e) => {
            tracing::warn!("Failed to load bookings for {}: {}", cursor.key(), e);
            (Default::default(), Some("Failed to load bookings".to_string()))
        }
    };

    let weeks: Vec<Vec<CalendarCell>> = month_grid(cursor)
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|cell| {
                    let day_bookings = by_date.get(&cell.date).map(Vec::as_slice).unwrap_or(&[]);
                    CalendarCell {
                        day: cell.date.day(),
                        in_month: cell.in_month,
                        count: day_bookings.len(),
                        entries: day_bookings
                            .iter()
                            .take(BOOKINGS_PER_CELL)
                            .map(|b| format!("{} — {}", b.name, b.phone))
                            .collect(),
                        more: day_bookings.len().saturating_sub(BOOKINGS_PER_CELL),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();

    let template = CalendarTemplate {
        title: "Bookings Calendar • Book My Wallpaper".to_string(),
        base_url: state.config.backend_url.clone(),
        year: today.year(),
        month_title: cursor.title(),
        previous_month: cursor.previous().key(),
        next_month: cursor.next().key(),
        weekdays: WEEKDAY_LABELS.to_vec(),
        weeks,
        error,
    };

    Ok(Html(template.render()?))
}
