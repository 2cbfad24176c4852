//! Social and health contributions (ZUS).

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::rates::HEALTH_INSURANCE_RATE;
use crate::tables::{LookupError, YearlyParamsTable};
use crate::{HealthBracket, ZusPhase};

/// Computes monthly ZUS contributions from the yearly parameter table.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ryczalt_core::calculations::ZusCalculator;
/// use ryczalt_core::tables::YearlyParamsTable;
/// use ryczalt_core::ZusPhase;
///
/// let params = YearlyParamsTable::builtin();
/// let zus = ZusCalculator::new(&params);
///
/// // 1441.80 PLN x 29.19%
/// assert_eq!(zus.social(2026, ZusPhase::Preferential).unwrap(), dec!(420.86142));
/// // High bracket: 15852.70 PLN x 9%
/// assert_eq!(zus.health(2026, dec!(359664)).unwrap(), dec!(1426.743));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ZusCalculator<'a> {
    params: &'a YearlyParamsTable,
}

impl<'a> ZusCalculator<'a> {
    pub fn new(params: &'a YearlyParamsTable) -> Self {
        Self { params }
    }

    /// Monthly social contribution: the phase's base times the phase's rate.
    ///
    /// # Errors
    ///
    /// [`LookupError::MissingYearlyParams`] when `year` has no parameter row.
    pub fn social(
        &self,
        year: i32,
        phase: ZusPhase,
    ) -> Result<Decimal, LookupError> {
        let params = self.params.get(year)?;
        Ok(params.social_base(phase) * phase.contribution_rate())
    }

    /// Monthly health contribution for a year with the given full-year revenue.
    ///
    /// The same amount is due in every month of the year; it is not pro-rated.
    ///
    /// # Errors
    ///
    /// [`LookupError::MissingYearlyParams`] when `year` has no parameter row.
    pub fn health(
        &self,
        year: i32,
        annual_revenue: Decimal,
    ) -> Result<Decimal, LookupError> {
        let params = self.params.get(year)?;
        let bracket = HealthBracket::for_annual_revenue(annual_revenue);
        debug!(year, %annual_revenue, ?bracket, "selected health bracket");
        Ok(params.health_base(bracket) * HEALTH_INSURANCE_RATE)
    }
}
