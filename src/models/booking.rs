//! Consultation booking models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validation::{
    validate_date, validate_email, validate_phone, validate_required, ValidationResult,
};

/// Booking request from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub date: NaiveDate,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

/// Booking submission, from `POST /api/bookings` or the landing page form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBooking {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub address: String,
}

/// A booking that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBooking {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub date: NaiveDate,
    pub address: String,
}

impl NewBooking {
    /// Check fields in form order; the first failure wins.
    pub fn validate(&self) -> ValidationResult<ValidBooking> {
        Ok(ValidBooking {
            name: validate_required("name", &self.name)?,
            phone: validate_phone(&self.phone)?,
            email: validate_email(self.email.as_deref())?,
            date: validate_date(&self.date)?,
            address: validate_required("address", &self.address)?,
        })
    }
}

/// Inclusive date window for `GET /api/bookings`.
#[derive(Debug, Default, Deserialize)]
pub struct BookingRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    fn sample() -> NewBooking {
        NewBooking {
            name: "Ravi Kumar".to_string(),
            phone: "9876543210".to_string(),
            email: Some("".to_string()),
            date: "2026-11-02".to_string(),
            address: "Gachibowli".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_minimal_booking() {
        let valid = sample().validate().unwrap();
        assert_eq!(valid.email, None);
        assert_eq!(valid.date, NaiveDate::from_ymd_opt(2026, 11, 2).unwrap());
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let mut booking = sample();
        booking.name = String::new();
        booking.phone = "123".to_string();
        assert_eq!(
            booking.validate().unwrap_err(),
            ValidationError::Required { field: "name" }
        );
    }

    #[test]
    fn test_validate_rejects_bad_phone_and_date() {
        let mut booking = sample();
        booking.phone = "12345".to_string();
        assert_eq!(booking.validate().unwrap_err(), ValidationError::InvalidPhone);

        let mut booking = sample();
        booking.date = "tomorrow".to_string();
        assert_eq!(booking.validate().unwrap_err(), ValidationError::InvalidDate);
    }

    #[test]
    fn test_new_booking_missing_keys_default_to_blank() {
        let booking: NewBooking = serde_json::from_str(r#"{"name": "Ravi"}"#).unwrap();
        assert_eq!(booking.phone, "");
        assert!(booking.email.is_none());
    }
}
