//! Database models

pub mod booking;
pub mod wallpaper;

pub use booking::{Booking, BookingRange, NewBooking, ValidBooking};
pub use wallpaper::{NewWallpaper, Wallpaper, WallpaperForm};
