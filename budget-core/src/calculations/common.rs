//! Common utility functions for budget calculations.
//!
//! This module provides shared functionality used by both engines, including
//! rounding and the "valid positive number" test applied to user input.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(16.0815)), dec!(16.08));
/// assert_eq!(round_half_up(dec!(16.085)), dec!(16.09));
/// assert_eq!(round_half_up(dec!(-16.085)), dec!(-16.09)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the value only if it is present and strictly positive.
///
/// Absent, zero and negative inputs are all treated as "not entered".
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::calculations::common::positive;
///
/// assert_eq!(positive(Some(dec!(12.5))), Some(dec!(12.5)));
/// assert_eq!(positive(Some(dec!(0))), None);
/// assert_eq!(positive(None), None);
/// ```
pub fn positive(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| *v > Decimal::ZERO)
}

/// Months in a year, as a decimal.
pub(crate) fn months_per_year() -> Decimal {
    Decimal::from(12)
}
