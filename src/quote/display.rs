//! Display formatting for quote figures.

use rust_decimal::Decimal;

use super::calculators::round_money;

/// The only currency the business quotes in.
pub const CURRENCY: &str = "INR";
pub const CURRENCY_SYMBOL: &str = "₹";

/// Area with exactly two decimals, e.g. `80.00`.
pub fn format_area(area: Decimal) -> String {
    format!("{:.2}", round_money(area, 2))
}

/// Whole rupees with thousands separators, e.g. `₹12,000`.
pub fn format_rupees(amount: Decimal) -> String {
    let rounded = round_money(amount, 0);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!("{}{}{}", sign, CURRENCY_SYMBOL, group_thousands(&digits))
}

/// Rupees with paise, e.g. `₹149.50`.
pub fn format_rupees_exact(amount: Decimal) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, round_money(amount, 2))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
