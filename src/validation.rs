//! Input validation for wallpaper and booking submissions.
//!
//! Shared by the JSON API and the HTML form handlers so both reject the
//! same input with the same message.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A rejected field. The message is shown to the visitor as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} is too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },

    #[error("Phone must be a 10-digit number")]
    InvalidPhone,

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Date must be in YYYY-MM-DD format")]
    InvalidDate,

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error("{field} must be less than {max}")]
    TooLarge { field: &'static str, max: Decimal },

    #[error("{field} allows at most {places} decimal places")]
    TooPrecise { field: &'static str, places: u32 },
}

const MAX_TEXT_LEN: usize = 500;

/// Exclusive upper bound of the `NUMERIC(12, 2)` price column.
pub const PRICE_LIMIT: Decimal = dec!(10000000000);

/// Decimal places the price column stores.
pub const PRICE_PLACES: u32 = 2;

/// Trimmed, non-empty text.
pub fn validate_required(field: &'static str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }

    Ok(value.to_string())
}

/// Exactly ten ASCII digits, no separators.
pub fn validate_phone(value: &str) -> ValidationResult<String> {
    let phone = validate_required("phone", value)?;

    if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(phone)
}

/// Optional email; blank means absent.
pub fn validate_email(value: Option<&str>) -> ValidationResult<Option<String>> {
    let email = match value.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(email) => email,
    };

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(Some(email.to_string()))
}

/// ISO `YYYY-MM-DD` date.
pub fn validate_date(value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required { field: "date" });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

/// Non-negative price that fits the catalogue's price column unchanged.
pub fn validate_price(value: Decimal) -> ValidationResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::Negative { field: "price" });
    }

    if value >= PRICE_LIMIT {
        return Err(ValidationError::TooLarge {
            field: "price",
            max: PRICE_LIMIT,
        });
    }

    let value = value.normalize();
    if value.scale() > PRICE_PLACES {
        return Err(ValidationError::TooPrecise {
            field: "price",
            places: PRICE_PLACES,
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_required_trims() {
        assert_eq!(validate_required("name", "  Asha ").unwrap(), "Asha");
        assert_eq!(
            validate_required("name", "   "),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[test]
    fn test_validate_required_too_long() {
        let long = "a".repeat(MAX_TEXT_LEN + 1);
        assert!(matches!(
            validate_required("address", &long),
            Err(ValidationError::TooLong { field: "address", .. })
        ));
    }

    #[test]
    fn test_validate_phone() {
        assert_eq!(validate_phone("9876543210").unwrap(), "9876543210");
        assert_eq!(validate_phone(" 9876543210 ").unwrap(), "9876543210");
        assert_eq!(validate_phone("987654321"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("98765432100"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("98765-43210"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("+919876543"), Err(ValidationError::InvalidPhone));
        assert_eq!(
            validate_phone(""),
            Err(ValidationError::Required { field: "phone" })
        );
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(None).unwrap(), None);
        assert_eq!(validate_email(Some("  ")).unwrap(), None);
        assert_eq!(
            validate_email(Some("you@example.com")).unwrap(),
            Some("you@example.com".to_string())
        );
        assert_eq!(validate_email(Some("nope")), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(Some("@example.com")), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(Some("a b@c.d")), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(
            validate_date("2026-10-16").unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
        assert_eq!(validate_date("16/10/2026"), Err(ValidationError::InvalidDate));
        assert_eq!(validate_date("2026-02-30"), Err(ValidationError::InvalidDate));
        assert_eq!(validate_date(""), Err(ValidationError::Required { field: "date" }));
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(dec!(0)).unwrap(), dec!(0));
        assert_eq!(validate_price(dec!(149.99)).unwrap(), dec!(149.99));
        assert_eq!(
            validate_price(dec!(-1)),
            Err(ValidationError::Negative { field: "price" })
        );
    }

    #[test]
    fn test_validate_price_fits_column() {
        assert_eq!(validate_price(dec!(9999999999.99)).unwrap(), dec!(9999999999.99));
        assert_eq!(
            validate_price(dec!(10000000000)),
            Err(ValidationError::TooLarge {
                field: "price",
                max: PRICE_LIMIT
            })
        );
        assert_eq!(
            validate_price(Decimal::MAX),
            Err(ValidationError::TooLarge {
                field: "price",
                max: PRICE_LIMIT
            })
        );
    }

    #[test]
    fn test_validate_price_decimal_places() {
        assert_eq!(validate_price(dec!(150.500)).unwrap(), dec!(150.5));
        assert_eq!(
            validate_price(dec!(149.999)),
            Err(ValidationError::TooPrecise {
                field: "price",
                places: 2
            })
        );
        assert_eq!(
            ValidationError::TooPrecise { field: "price", places: 2 }.to_string(),
            "price allows at most 2 decimal places"
        );
    }
}
