//! Shared helpers for money arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole grosze (two decimal places), halves away from zero.
///
/// Calculators keep full precision; this is applied only when presenting.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ryczalt_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(420.86142)), dec!(420.86));
/// assert_eq!(round_half_up(dec!(4629.475620)), dec!(4629.48));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two amounts.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
