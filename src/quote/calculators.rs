//! Core quote calculation functions.
//!
//! Pure functions for quote math - no database access. Safe to call on
//! every request (or every keystroke) since nothing is cached or stored.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Wallpaper material price per sq.ft used when the caller supplies none.
pub const DEFAULT_MATERIAL_UNIT_PRICE: Decimal = dec!(150);

/// Installation price per sq.ft used when the caller supplies none.
pub const DEFAULT_INSTALL_UNIT_PRICE: Decimal = dec!(40);

/// Round to specified decimal places, halves away from zero.
///
/// For the non-negative amounts the calculator produces this is the same as
/// "round half up", so `150.5` becomes `151`.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use bookmywallpaper_web::quote::round_money;
///
/// assert_eq!(round_money(dec!(150.5), 0), dec!(151));
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse user-entered numeric text, falling back to zero.
///
/// Reads the longest leading number (optional sign, digits, fraction and
/// exponent) after any leading whitespace and ignores whatever follows it,
/// so `"12ft"` is 12. Text with no numeric prefix yields zero. Numbers too
/// large for `Decimal` saturate to `Decimal::MAX` (or `MIN` when negative),
/// numbers too small round down to zero. Never fails.
pub fn parse_amount(text: &str) -> Decimal {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || !int_digits.is_empty() {
            frac_digits = &s[frac_start..frac_end];
            pos = frac_end;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Decimal::ZERO;
    }

    let exponent = parse_exponent(&s[pos..]).unwrap_or(0);
    let magnitude = scale_digits(int_digits, frac_digits, exponent);
    if negative && !magnitude.is_zero() {
        -magnitude
    } else {
        magnitude
    }
}

/// Most significant digits a `Decimal` mantissa can always hold.
const MAX_SIGNIFICANT_DIGITS: usize = 28;

/// Largest scale `Decimal` supports.
const MAX_SCALE: i64 = 28;

/// `int_digits.frac_digits × 10^exponent` as a non-negative decimal.
///
/// Digits past what `Decimal` can represent are truncated, and values above
/// `Decimal::MAX` saturate to it.
fn scale_digits(int_digits: &str, frac_digits: &str, exponent: i64) -> Decimal {
    let all_digits = format!("{int_digits}{frac_digits}");
    let digits = all_digits.trim_start_matches('0');
    let significant = digits.trim_end_matches('0');
    if significant.is_empty() {
        return Decimal::ZERO;
    }

    let mut kept = &significant[..significant.len().min(MAX_SIGNIFICANT_DIGITS)];
    let mut exponent = exponent
        .saturating_sub(frac_digits.len() as i64)
        .saturating_add((digits.len() - kept.len()) as i64);

    // Leading digit position; Decimal::MAX is just under 10^29
    if exponent.saturating_add(kept.len() as i64 - 1) > MAX_SCALE {
        return Decimal::MAX;
    }

    if exponent < -MAX_SCALE {
        let dropped = usize::try_from(-MAX_SCALE - exponent).unwrap_or(usize::MAX);
        if dropped >= kept.len() {
            return Decimal::ZERO;
        }
        kept = &kept[..kept.len() - dropped];
        exponent = -MAX_SCALE;
    }

    let Ok(mantissa) = kept.parse::<i128>() else {
        return Decimal::ZERO;
    };

    if exponent < 0 {
        Decimal::try_from_i128_with_scale(mantissa, (-exponent) as u32).unwrap_or(Decimal::ZERO)
    } else {
        mantissa
            .checked_mul(10i128.pow(exponent as u32))
            .and_then(|value| Decimal::try_from_i128_with_scale(value, 0).ok())
            .unwrap_or(Decimal::MAX)
    }
}

/// Exponent suffix such as `e3` or `E-2`; absurdly long exponents saturate.
fn parse_exponent(rest: &str) -> Option<i64> {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return None;
    }

    let mut pos = 1;
    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let digits_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos == digits_start {
        return None;
    }

    let exponent = rest[digits_start..pos].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -exponent } else { exponent })
}

/// Wall dimensions and unit prices for one quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteInput {
    pub width_feet: Decimal,
    pub height_feet: Decimal,
    pub material_unit_price: Decimal,
    pub install_unit_price: Decimal,
}

impl QuoteInput {
    /// Build an input from raw form text.
    ///
    /// Missing dimensions are zero. Missing unit prices take the given
    /// defaults; unit prices that are present but blank or malformed are zero.
    pub fn from_text(
        width: Option<&str>,
        height: Option<&str>,
        material: Option<&str>,
        install: Option<&str>,
        defaults: &QuoteDefaults,
    ) -> Self {
        Self {
            width_feet: width.map(parse_amount).unwrap_or(Decimal::ZERO),
            height_feet: height.map(parse_amount).unwrap_or(Decimal::ZERO),
            material_unit_price: material
                .map(parse_amount)
                .unwrap_or(defaults.material_unit_price),
            install_unit_price: install
                .map(parse_amount)
                .unwrap_or(defaults.install_unit_price),
        }
    }

    pub fn compute(&self) -> QuoteResult {
        compute_quote(
            self.width_feet,
            self.height_feet,
            self.material_unit_price,
            self.install_unit_price,
        )
    }
}

/// Unit prices a fresh calculator starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteDefaults {
    pub material_unit_price: Decimal,
    pub install_unit_price: Decimal,
}

impl Default for QuoteDefaults {
    fn default() -> Self {
        Self {
            material_unit_price: DEFAULT_MATERIAL_UNIT_PRICE,
            install_unit_price: DEFAULT_INSTALL_UNIT_PRICE,
        }
    }
}

/// Cost breakdown derived from a [`QuoteInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteResult {
    /// Wall area in sq.ft, unrounded.
    pub area_sq_ft: Decimal,
    /// Material cost in whole rupees.
    pub material_cost: Decimal,
    /// Installation cost in whole rupees.
    pub install_cost: Decimal,
    /// Always `material_cost + install_cost`.
    pub total_cost: Decimal,
}

/// Calculate a wallpaper quote.
///
/// Each cost is rounded to whole currency units before the two are added,
/// so the total is never re-rounded on its own. Negative inputs are clamped
/// to zero; arithmetic saturates instead of overflowing.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use bookmywallpaper_web::quote::compute_quote;
///
/// let quote = compute_quote(dec!(10), dec!(8), dec!(150), dec!(40));
/// assert_eq!(quote.area_sq_ft, dec!(80));
/// assert_eq!(quote.total_cost, dec!(15200));
/// ```
pub fn compute_quote(
    width_feet: Decimal,
    height_feet: Decimal,
    material_unit_price: Decimal,
    install_unit_price: Decimal,
) -> QuoteResult {
    let width = width_feet.max(Decimal::ZERO);
    let height = height_feet.max(Decimal::ZERO);
    let material_price = material_unit_price.max(Decimal::ZERO);
    let install_price = install_unit_price.max(Decimal::ZERO);

    let area_sq_ft = width.saturating_mul(height);
    let material_cost = round_money(area_sq_ft.saturating_mul(material_price), 0);
    let install_cost = round_money(area_sq_ft.saturating_mul(install_price), 0);

    QuoteResult {
        area_sq_ft,
        material_cost,
        install_cost,
        total_cost: material_cost.saturating_add(install_cost),
    }
}
