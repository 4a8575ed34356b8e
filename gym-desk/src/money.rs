//! Money calculation utilities using rust_decimal for precision
//!
//! Calculations run on `Decimal` and are converted back to `f64` for the
//! member model, rounded to 2 decimal places (half away from zero).

use rust_decimal::prelude::*;

/// Rounding precision for monetary values
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round a Decimal to 2 decimal places
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_else(|| {
        tracing::error!(value = %value, "Decimal not representable as f64, defaulting to zero");
        0.0
    })
}

/// Format an amount with 2 decimals, rounding half away from zero
pub fn format_money(value: f64) -> String {
    format!("{:.2}", round_money(to_decimal(value)))
}

/// Format a value as a whole number, rounding half away from zero
pub fn format_whole(value: f64) -> String {
    let whole = to_decimal(value).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{whole:.0}")
}
