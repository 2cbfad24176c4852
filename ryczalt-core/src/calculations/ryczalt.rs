//! Flat-rate income tax (ryczałt od przychodów ewidencjonowanych).
//!
//! The tax base is monthly revenue less the social contribution and half of
//! the health contribution, clamped at zero:
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | deductible health = health × 50% |
//! | 2    | taxable = max(0, revenue − social − line 1) |
//! | 3    | tax = line 2 × 12% |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::max;
use crate::calculations::rates::{HEALTH_INSURANCE_DEDUCTION_RATE, RYCZALT_RATE};

/// Intermediate and final values of the flat-rate tax for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RyczaltResult {
    pub deductible_health: Decimal,

    /// Never negative.
    pub taxable: Decimal,

    pub tax: Decimal,
}

/// Computes the monthly ryczałt.
///
/// `health_insurance` is the full monthly contribution, not a share of it.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ryczalt_core::calculations::calculate_ryczalt;
///
/// let result = calculate_ryczalt(dec!(1000), dec!(600), dec!(200));
///
/// assert_eq!(result.deductible_health, dec!(100));
/// assert_eq!(result.taxable, dec!(300));
/// assert_eq!(result.tax, dec!(36.0));
/// ```
pub fn calculate_ryczalt(
    revenue: Decimal,
    zus_social: Decimal,
    health_insurance: Decimal,
) -> RyczaltResult {
    let deductible_health = health_insurance * HEALTH_INSURANCE_DEDUCTION_RATE;
    let base = revenue - zus_social - deductible_health;
    if base < Decimal::ZERO {
        warn!(
            revenue = %revenue,
            zus_social = %zus_social,
            deductible_health = %deductible_health,
            "Deductions exceed revenue; taxable base clamped to zero"
        );
    }
    let taxable = max(base, Decimal::ZERO);

    RyczaltResult {
        deductible_health,
        taxable,
        tax: taxable * RYCZALT_RATE,
    }
}
