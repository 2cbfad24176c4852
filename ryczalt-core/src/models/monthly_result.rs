use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{YearMonth, ZusPhase};

/// One month of the breakdown. Amounts are kept unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyResult {
    pub period: YearMonth,
    pub hours: u32,
    pub phase: ZusPhase,
    pub revenue: Decimal,
    pub zus_social: Decimal,
    pub health_insurance: Decimal,
    pub tax: Decimal,

    /// `revenue - zus_social - health_insurance - tax`; may be negative.
    pub net: Decimal,
}

impl MonthlyResult {
    pub fn year(&self) -> i32 {
        self.period.year()
    }

    pub fn month(&self) -> u32 {
        self.period.month()
    }
}
