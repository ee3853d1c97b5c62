//! Response DTOs for quote API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{QuoteInput, QuoteResult};
use super::display::{format_area, CURRENCY};

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn inr(amount: Decimal) -> Self {
        Self {
            amount,
            currency: CURRENCY.to_string(),
        }
    }
}

/// Response for quote calculation
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub area_sq_ft: Decimal,
    pub area_display: String,
    pub material_unit_price: MoneyResponse,
    pub install_unit_price: MoneyResponse,
    pub material_cost: MoneyResponse,
    pub install_cost: MoneyResponse,
    pub total_cost: MoneyResponse,
}

impl QuoteResponse {
    pub fn new(input: &QuoteInput, result: &QuoteResult) -> Self {
        Self {
            area_sq_ft: result.area_sq_ft,
            area_display: format_area(result.area_sq_ft),
            material_unit_price: MoneyResponse::inr(input.material_unit_price),
            install_unit_price: MoneyResponse::inr(input.install_unit_price),
            material_cost: MoneyResponse::inr(result.material_cost),
            install_cost: MoneyResponse::inr(result.install_cost),
            total_cost: MoneyResponse::inr(result.total_cost),
        }
    }
}
