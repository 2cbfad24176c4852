//! Fixed contribution and tax rates, thresholds in PLN.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Pension contribution (składka emerytalna).
pub const EMERYTALNE_RATE: Decimal = dec!(0.1952);

/// Disability contribution (składka rentowa).
pub const RENTOWE_RATE: Decimal = dec!(0.08);

/// Accident contribution (składka wypadkowa).
pub const WYPADKOWE_RATE: Decimal = dec!(0.0167);

/// Labour Fund (Fundusz Pracy); not due during the preferential phase.
pub const FUNDUSZ_PRACY_RATE: Decimal = dec!(0.0245);

pub const HEALTH_INSURANCE_RATE: Decimal = dec!(0.09);

/// Share of the health contribution that may be deducted from revenue.
pub const HEALTH_INSURANCE_DEDUCTION_RATE: Decimal = dec!(0.50);

/// Ryczałt rate for IT services.
pub const RYCZALT_RATE: Decimal = dec!(0.12);

/// Upper bound (inclusive) of the low health bracket.
pub const HEALTH_BRACKET_LOW: Decimal = dec!(60000);

/// Upper bound (inclusive) of the middle health bracket.
pub const HEALTH_BRACKET_HIGH: Decimal = dec!(300000);
