//! Wallpaper catalogue models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::quote::parse_amount;
use crate::validation::{validate_price, validate_required, ValidationResult};

/// Wallpaper design from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Wallpaper {
    pub id: Uuid,
    pub title: String,
    pub style: String,
    pub color: String,
    pub room: String,
    /// Price per sq.ft
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub img: String,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/wallpapers`; `price` may be a number or numeric string.
#[derive(Debug, Clone, Deserialize)]
pub struct NewWallpaper {
    pub title: String,
    pub style: String,
    pub color: String,
    pub room: String,
    pub price: Decimal,
    pub img: String,
}

/// Admin panel form; every field arrives as text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WallpaperForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub img: String,
}

impl From<WallpaperForm> for NewWallpaper {
    fn from(form: WallpaperForm) -> Self {
        Self {
            price: parse_amount(&form.price),
            title: form.title,
            style: form.style,
            color: form.color,
            room: form.room,
            img: form.img,
        }
    }
}

impl NewWallpaper {
    /// Trim text fields and check every field is present.
    pub fn validate(self) -> ValidationResult<NewWallpaper> {
        Ok(NewWallpaper {
            title: validate_required("title", &self.title)?,
            style: validate_required("style", &self.style)?,
            color: validate_required("color", &self.color)?,
            room: validate_required("room", &self.room)?,
            price: validate_price(self.price)?,
            img: validate_required("img", &self.img)?,
        })
    }
}
