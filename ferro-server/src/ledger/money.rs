//! Money calculation utilities using rust_decimal for precision
//!
//! Models store `f64` (the document is plain JSON); every computation
//! converts to `Decimal`, rounds at the documented points, and converts
//! back. Nothing is rounded before the computation it belongs to.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert a stored f64 amount into a Decimal
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Round a Decimal amount to 2 places (half away from zero) and store as f64
pub fn round_money(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Line subtotal: unit price × quantity, rounded once at the end
pub fn line_subtotal(unit_price: f64, quantity: i64) -> f64 {
    round_money(to_decimal(unit_price) * Decimal::from(quantity))
}

/// Add two stored amounts, rounding the result
pub fn add_money(a: f64, b: f64) -> f64 {
    round_money(to_decimal(a) + to_decimal(b))
}

/// Sum stored amounts, rounding once at the end
pub fn sum_money<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    round_money(values.into_iter().map(to_decimal).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_subtotal_rounds_half_up() {
        // 3 × 0.335 = 1.005 → 1.01
        assert_eq!(line_subtotal(0.335, 3), 1.01);
        assert_eq!(line_subtotal(10.0, 3), 30.0);
    }

    #[test]
    fn test_sum_money_avoids_float_drift() {
        // Classic binary float trap: 0.1 + 0.2
        assert_eq!(sum_money([0.1, 0.2]), 0.3);
        assert_eq!(sum_money([30.0, 45.5]), 75.5);
    }

    #[test]
    fn test_add_money() {
        assert_eq!(add_money(0.0, 30.0), 30.0);
        assert_eq!(add_money(30.0, 45.5), 75.5);
    }

    #[test]
    fn test_sum_money_empty_is_zero() {
        assert_eq!(sum_money([]), 0.0);
    }
}
