//! Revenue from billable hours.
//!
//! Hours come from the [`WorkingHoursTable`]; the hourly rate blends a PLN
//! rate with a USD rate converted at a fixed exchange rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::YearMonth;
use crate::tables::{LookupError, WorkingHoursTable};

/// Billing rates for one hour of work.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ryczalt_core::calculations::HourlyRate;
///
/// let rate = HourlyRate::default();
/// assert_eq!(rate.blended(), dec!(177.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HourlyRate {
    /// Part of the rate invoiced in PLN.
    pub pln: Decimal,

    /// Part of the rate invoiced in USD.
    pub usd: Decimal,

    /// PLN per USD used to convert the USD part.
    pub usd_pln: Decimal,
}

impl Default for HourlyRate {
    fn default() -> Self {
        Self {
            pln: dec!(100.0),
            usd: dec!(22.0),
            usd_pln: dec!(3.5),
        }
    }
}

impl HourlyRate {
    /// Total rate per hour in PLN.
    pub fn blended(&self) -> Decimal {
        self.pln + self.usd * self.usd_pln
    }
}

/// Computes monthly and annual revenue from the working-hours calendar.
#[derive(Debug, Clone)]
pub struct RevenueEngine<'a> {
    hours: &'a WorkingHoursTable,
    blended_rate: Decimal,
}

impl<'a> RevenueEngine<'a> {
    pub fn new(
        hours: &'a WorkingHoursTable,
        rate: &HourlyRate,
    ) -> Self {
        Self {
            hours,
            blended_rate: rate.blended(),
        }
    }

    pub fn blended_rate(&self) -> Decimal {
        self.blended_rate
    }

    /// Billable hours and revenue for a single month.
    pub fn month(
        &self,
        period: YearMonth,
    ) -> Result<(u32, Decimal), LookupError> {
        let hours = self.hours.hours(period)?;
        Ok((hours, Decimal::from(hours) * self.blended_rate))
    }

    /// Revenue over all twelve months of `year`.
    pub fn annual(
        &self,
        year: i32,
    ) -> Result<Decimal, LookupError> {
        let mut total = Decimal::ZERO;
        for period in YearMonth::months_of(year) {
            let (_, revenue) = self.month(period)?;
            total += revenue;
        }
        debug!(year, annual_revenue = %total, "computed annual revenue");
        Ok(total)
    }
}
