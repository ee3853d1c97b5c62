//! Public site handlers: landing page and booking form

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;

use crate::cache::load_catalogue;
use crate::catalogue::{self, filter_wallpapers, CatalogueFilter, CatalogueQuery, PriceBand};
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{NewBooking, Wallpaper};
use crate::quote::{format_area, format_rupees, requests::QuoteQuery};
use crate::AppState;

/// Landing page query string: catalogue filter, calculator inputs, booking flag
#[derive(Debug, Default, Deserialize)]
pub struct LandingQuery {
    pub q: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub room: Option<String>,
    pub price: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub material: Option<String>,
    pub install: Option<String>,
    pub booked: Option<String>,
}

impl LandingQuery {
    fn catalogue(&self) -> CatalogueQuery {
        CatalogueQuery {
            q: self.q.clone(),
            style: self.style.clone(),
            color: self.color.clone(),
            room: self.room.clone(),
            price: self.price.clone(),
        }
    }

    fn quote(&self) -> QuoteQuery {
        QuoteQuery {
            width: self.width.clone(),
            height: self.height.clone(),
            material: self.material.clone(),
            install: self.install.clone(),
        }
    }
}

/// `<option>` in a filter dropdown
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

fn options(values: &[&str], selected: &str) -> Vec<SelectOption> {
    std::iter::once(catalogue::ALL)
        .chain(values.iter().copied())
        .map(|value| SelectOption {
            value: value.to_string(),
            selected: value == selected,
        })
        .collect()
}

/// Catalogue card
pub struct WallpaperCard {
    pub title: String,
    pub style: String,
    pub color: String,
    pub room: String,
    pub img: String,
    pub price_display: String,
}

impl From<&Wallpaper> for WallpaperCard {
    fn from(w: &Wallpaper) -> Self {
        Self {
            title: w.title.clone(),
            style: w.style.clone(),
            color: w.color.clone(),
            room: w.room.clone(),
            img: w.img.clone(),
            price_display: format_rupees(w.price),
        }
    }
}

/// Calculator inputs echoed back plus the computed estimate
pub struct QuoteView {
    pub width: String,
    pub height: String,
    pub material: String,
    pub install: String,
    pub area_display: String,
    pub material_cost_display: String,
    pub install_cost_display: String,
    pub total_display: String,
}

impl QuoteView {
    fn new(query: &QuoteQuery, state: &AppState) -> Self {
        let defaults = &state.config.quote_defaults;
        let input = query.to_input(defaults);
        let result = input.compute();

        Self {
            width: query.width.clone().unwrap_or_default(),
            height: query.height.clone().unwrap_or_default(),
            material: query
                .material
                .clone()
                .unwrap_or_else(|| defaults.material_unit_price.to_string()),
            install: query
                .install
                .clone()
                .unwrap_or_else(|| defaults.install_unit_price.to_string()),
            area_display: format_area(result.area_sq_ft),
            material_cost_display: format_rupees(result.material_cost),
            install_cost_display: format_rupees(result.install_cost),
            total_display: format_rupees(result.total_cost),
        }
    }
}

/// Booking form state
#[derive(Default)]
pub struct BookingView {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub address: String,
    pub error: Option<String>,
    pub submitted: bool,
}

/// Landing page template
#[derive(Template)]
#[template(path = "index.html")]
struct LandingTemplate {
    title: String,
    base_url: String,
    year: i32,
    filter: CatalogueFilter,
    style_options: Vec<SelectOption>,
    color_options: Vec<SelectOption>,
    room_options: Vec<SelectOption>,
    price_options: Vec<SelectOption>,
    cards: Vec<WallpaperCard>,
    catalogue_error: Option<String>,
    quote: QuoteView,
    booking: BookingView,
}

/// Homepage handler
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<LandingQuery>,
) -> Result<Html<String>> {
    let booking = BookingView {
        submitted: query.booked.is_some(),
        ..Default::default()
    };
    render_landing(&state, &query, booking).await
}

/// POST /book
pub async fn book(
    State(state): State<AppState>,
    Form(form): Form<NewBooking>,
) -> Result<Response> {
    let failed = |form: &NewBooking, message: String| BookingView {
        name: form.name.clone(),
        phone: form.phone.clone(),
        email: form.email.clone().unwrap_or_default(),
        date: form.date.clone(),
        address: form.address.clone(),
        error: Some(message),
        submitted: false,
    };

    let booking = match form.validate() {
        Ok(booking) => booking,
        Err(e) => {
            let view = failed(&form, format!("Failed to submit booking: {}", e));
            let page = render_landing(&state, &LandingQuery::default(), view).await?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    match db::create_booking(&state.db, &booking).await {
        Ok(created) => {
            tracing::info!(booking_id = %created.id, date = %created.date, "Booking received");
            Ok(Redirect::to("/?booked=1#booking").into_response())
        }
        Err(e) => {
            tracing::error!("Failed to store booking: {}", e);
            let view = failed(&form, "Failed to submit booking".to_string());
            let page = render_landing(&state, &LandingQuery::default(), view).await?;
            Ok((StatusCode::INTERNAL_SERVER_ERROR, page).into_response())
        }
    }
}

async fn render_landing(
    state: &AppState,
    query: &LandingQuery,
    booking: BookingView,
) -> Result<Html<String>> {
    let filter = CatalogueFilter::from(&query.catalogue());

    // Database failures only blank the catalogue; calculator and booking form still render
    let loaded = load_catalogue(&state.cache, &state.db).await;
    let (cards, catalogue_error): (Vec<WallpaperCard>, Option<String>) = match loaded {
        Ok(items) => (
            filter_wallpapers(&items, &filter)
                .into_iter()
                .map(WallpaperCard::from)
                .collect(),
            None,
        ),
        Err(AppError::Database(e)) => {
            tracing::warn!("Failed to load catalogue: {}", e);
            (Vec::new(), Some("Failed to load wallpapers".to_string()))
        }
        Err(e) => return Err(e),
    };

    let price_labels: Vec<&str> = PriceBand::ALL_BANDS[1..].iter().map(|b| b.label()).collect();

    let template = LandingTemplate {
        title: "Book My Wallpaper • Hyderabad".to_string(),
        base_url: state.config.backend_url.clone(),
        year: Utc::now().year(),
        style_options: options(&catalogue::STYLES, &filter.style),
        color_options: options(&catalogue::COLORS, &filter.color),
        room_options: options(&catalogue::ROOMS, &filter.room),
        price_options: options(&price_labels, filter.price.label()),
        filter,
        cards,
        catalogue_error,
        quote: QuoteView::new(&query.quote(), state),
        booking,
    };

    Ok(Html(template.render()?))
}
