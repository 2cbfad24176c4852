use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::YearMonth;
use crate::calculations::rates;

/// Last month (inclusive) billed on the preferential social-contribution base.
pub const PREFERENTIAL_CUTOFF: YearMonth = YearMonth::from_parts(2027, 3);

/// Social-contribution regime in force for a given month.
///
/// The phase depends on the calendar alone. Revenue and prior contributions
/// play no part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZusPhase {
    /// Reduced base available to new businesses ("mały ZUS" / preferencyjny).
    Preferential,
    /// Standard base, including the Labour Fund contribution.
    Full,
}

impl ZusPhase {
    /// Selects the phase for `period`.
    ///
    /// ```
    /// use ryczalt_core::{YearMonth, ZusPhase};
    ///
    /// let june = YearMonth::new(2026, 6).unwrap();
    /// let april = YearMonth::new(2027, 4).unwrap();
    ///
    /// assert_eq!(ZusPhase::for_period(june), ZusPhase::Preferential);
    /// assert_eq!(ZusPhase::for_period(april), ZusPhase::Full);
    /// ```
    pub fn for_period(period: YearMonth) -> Self {
        if period <= PREFERENTIAL_CUTOFF {
            Self::Preferential
        } else {
            Self::Full
        }
    }

    /// Combined social-contribution rate applied to this phase's base.
    pub fn contribution_rate(&self) -> Decimal {
        let pension_disability_accident =
            rates::EMERYTALNE_RATE + rates::RENTOWE_RATE + rates::WYPADKOWE_RATE;
        match self {
            Self::Preferential => pension_disability_accident,
            Self::Full => pension_disability_accident + rates::FUNDUSZ_PRACY_RATE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preferential => "preferential",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for ZusPhase {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
