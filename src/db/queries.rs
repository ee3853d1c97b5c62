//! Database queries for the catalogue and bookings

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Booking, BookingRange, NewWallpaper, ValidBooking, Wallpaper};

/// Get all wallpapers, newest first
pub async fn get_wallpapers(pool: &PgPool) -> Result<Vec<Wallpaper>> {
    let wallpapers = sqlx::query_as::<_, Wallpaper>(
        r#"
        SELECT id, title, style, color, room, price, img, created_at
        FROM wallpapers
        ORDER BY created_at DESC, title
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(wallpapers)
}

/// Insert a validated wallpaper
pub async fn create_wallpaper(pool: &PgPool, wallpaper: &NewWallpaper) -> Result<Wallpaper> {
    let created = sqlx::query_as::<_, Wallpaper>(
        r#"
        INSERT INTO wallpapers (id, title, style, color, room, price, img)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, title, style, color, room, price, img, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&wallpaper.title)
    .bind(&wallpaper.style)
    .bind(&wallpaper.color)
    .bind(&wallpaper.room)
    .bind(wallpaper.price)
    .bind(&wallpaper.img)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// Delete a wallpaper by id
pub async fn delete_wallpaper(pool: &PgPool, id: Uuid) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM wallpapers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    Ok(())
}

/// Insert a validated booking request
pub async fn create_booking(pool: &PgPool, booking: &ValidBooking) -> Result<Booking> {
    let created = sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (id, name, phone, email, date, address)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, phone, email, date, address, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&booking.name)
    .bind(&booking.phone)
    .bind(&booking.email)
    .bind(booking.date)
    .bind(&booking.address)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// Get bookings within an inclusive date range; open bounds are unrestricted
pub async fn get_bookings(pool: &PgPool, range: &BookingRange) -> Result<Vec<Booking>> {
    let bookings = sqlx::query_as::<_, Booking>(
        r#"
        SELECT id, name, phone, email, date, address, created_at
        FROM bookings
        WHERE ($1::date IS NULL OR date >= $1)
          AND ($2::date IS NULL OR date <= $2)
        ORDER BY date, created_at
        "#,
    )
    .bind(range.start)
    .bind(range.end)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}
