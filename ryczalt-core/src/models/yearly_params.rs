use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{HealthBracket, ZusPhase};

/// Errors reported by [`YearlyParams::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum YearlyParamsError {
    #[error("{field} for {year} must be positive, got {value}")]
    NonPositiveBase {
        year: i32,
        field: &'static str,
        value: Decimal,
    },

    #[error("health bases for {year} must not decrease from low to high")]
    DecreasingHealthBases { year: i32 },
}

/// Contribution bases for one calendar year, all in PLN.
///
/// Each base is multiplied by the matching rate: the social bases by the
/// phase's contribution rate and the health bases by the health rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyParams {
    pub year: i32,

    /// Social base during the preferential phase (30% of minimum wage).
    pub pref_base: Decimal,

    /// Social base after the preferential phase (60% of forecast average wage).
    pub full_base: Decimal,

    /// Health base for annual revenue up to 60 000 PLN.
    pub health_base_low: Decimal,

    /// Health base for annual revenue up to 300 000 PLN.
    pub health_base_mid: Decimal,

    /// Health base for annual revenue above 300 000 PLN.
    pub health_base_high: Decimal,
}

impl YearlyParams {
    pub fn social_base(
        &self,
        phase: ZusPhase,
    ) -> Decimal {
        match phase {
            ZusPhase::Preferential => self.pref_base,
            ZusPhase::Full => self.full_base,
        }
    }

    pub fn health_base(
        &self,
        bracket: HealthBracket,
    ) -> Decimal {
        match bracket {
            HealthBracket::Low => self.health_base_low,
            HealthBracket::Mid => self.health_base_mid,
            HealthBracket::High => self.health_base_high,
        }
    }

    /// Checks that every base is positive and the health ladder is non-decreasing.
    pub fn validate(&self) -> Result<(), YearlyParamsError> {
        let bases = [
            ("pref_base", self.pref_base),
            ("full_base", self.full_base),
            ("health_base_low", self.health_base_low),
            ("health_base_mid", self.health_base_mid),
            ("health_base_high", self.health_base_high),
        ];
        for (field, value) in bases {
            if value <= Decimal::ZERO {
                return Err(YearlyParamsError::NonPositiveBase {
                    year: self.year,
                    field,
                    value,
                });
            }
        }
        if self.health_base_low > self.health_base_mid
            || self.health_base_mid > self.health_base_high
        {
            return Err(YearlyParamsError::DecreasingHealthBases { year: self.year });
        }
        Ok(())
    }
}
