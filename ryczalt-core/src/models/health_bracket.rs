use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::rates::{HEALTH_BRACKET_HIGH, HEALTH_BRACKET_LOW};

/// Health-insurance bracket selected by full-year revenue.
///
/// | Annual revenue (PLN)   | Bracket |
/// |------------------------|---------|
/// | up to 60 000           | `Low`   |
/// | 60 000.01 – 300 000    | `Mid`   |
/// | above 300 000          | `High`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBracket {
    Low,
    Mid,
    High,
}

impl HealthBracket {
    pub fn for_annual_revenue(annual_revenue: Decimal) -> Self {
        if annual_revenue <= HEALTH_BRACKET_LOW {
            Self::Low
        } else if annual_revenue <= HEALTH_BRACKET_HIGH {
            Self::Mid
        } else {
            Self::High
        }
    }
}
