//! Monthly breakdown driver.
//!
//! The report is built in two passes:
//!
//! 1. Full-year revenue for every year the range touches. Partially displayed
//!    years still use all twelve months, because the health bracket is an
//!    annual decision.
//! 2. One [`MonthlyResult`] per month of the range, grouped by year, with
//!    per-year subtotals and a grand total.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::calculations::{HourlyRate, RevenueEngine, ZusCalculator, calculate_ryczalt};
use crate::tables::{LookupError, TaxTables};
use crate::{HealthBracket, MonthlyResult, Totals, YearMonth, ZusPhase};

/// First month shown when no range is configured.
pub const DEFAULT_START: YearMonth = YearMonth::from_parts(2026, 2);

/// Last month shown when no range is configured.
pub const DEFAULT_END: YearMonth = YearMonth::from_parts(2029, 12);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("report range starts at {start} but ends earlier, at {end}")]
    InvalidRange { start: YearMonth, end: YearMonth },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Inclusive span of displayed months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRange {
    start: YearMonth,
    end: YearMonth,
}

impl Default for ReportRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl ReportRange {
    pub fn new(
        start: YearMonth,
        end: YearMonth,
    ) -> Result<Self, ReportError> {
        if start > end {
            return Err(ReportError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> YearMonth {
        self.start
    }

    pub fn end(&self) -> YearMonth {
        self.end
    }

    /// Calendar years touched by the range.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start.year()..=self.end.year()
    }

    /// Displayed months of `year`, clipped to the range.
    pub fn months_in(
        &self,
        year: i32,
    ) -> impl Iterator<Item = YearMonth> {
        let first = self.start.max(YearMonth::first_of(year));
        let last = self.end.min(YearMonth::last_of(year));
        YearMonth::range_inclusive(first, last)
    }

    pub fn len(&self) -> usize {
        YearMonth::range_inclusive(self.start, self.end).count()
    }

    /// Always false; a range holds at least one month.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Displayed months of one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSection {
    pub year: i32,

    /// Revenue over all twelve months, displayed or not.
    pub annual_revenue: Decimal,

    pub bracket: HealthBracket,
    pub rows: Vec<MonthlyResult>,
    pub subtotal: Totals,
}

/// The complete breakdown for a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub range: ReportRange,

    /// Blended PLN rate per hour used for every month.
    pub hourly_rate: Decimal,

    pub years: Vec<YearSection>,
    pub totals: Totals,
}

impl Report {
    /// Every monthly row in calendar order.
    pub fn rows(&self) -> impl Iterator<Item = &MonthlyResult> + '_ {
        self.years.iter().flat_map(|section| section.rows.iter())
    }
}

/// Builds the monthly breakdown for `range`.
///
/// # Errors
///
/// [`ReportError::Lookup`] when a touched year lacks a month of working hours
/// or a displayed year lacks contribution parameters. Nothing is returned
/// for a partially computed range.
///
/// # Example
///
/// ```
/// use ryczalt_core::calculations::HourlyRate;
/// use ryczalt_core::report::{ReportRange, build_report};
/// use ryczalt_core::tables::TaxTables;
/// use ryczalt_core::YearMonth;
///
/// let range = ReportRange::new(
///     YearMonth::new(2026, 2).unwrap(),
///     YearMonth::new(2026, 12).unwrap(),
/// )
/// .unwrap();
///
/// let report = build_report(&TaxTables::builtin(), &HourlyRate::default(), range).unwrap();
///
/// assert_eq!(report.rows().count(), 11);
/// assert_eq!(report.totals.hours, 1872);
/// ```
pub fn build_report(
    tables: &TaxTables,
    rate: &HourlyRate,
    range: ReportRange,
) -> Result<Report, ReportError> {
    let revenue = RevenueEngine::new(&tables.working_hours, rate);
    let zus = ZusCalculator::new(&tables.yearly_params);

    // Pass 1: full-year revenue decides each year's health bracket.
    let mut annual_revenues = BTreeMap::new();
    for year in range.years() {
        annual_revenues.insert(year, revenue.annual(year)?);
    }
    debug!(years = annual_revenues.len(), "annual revenue pass complete");

    // Pass 2: monthly rows.
    let mut years = Vec::new();
    let mut totals = Totals::default();
    for (year, annual_revenue) in annual_revenues {
        let health_insurance = zus.health(year, annual_revenue)?;

        let mut rows = Vec::new();
        for period in range.months_in(year) {
            let (hours, month_revenue) = revenue.month(period)?;
            let phase = ZusPhase::for_period(period);
            let zus_social = zus.social(year, phase)?;
            let ryczalt = calculate_ryczalt(month_revenue, zus_social, health_insurance);
            let net = month_revenue - zus_social - health_insurance - ryczalt.tax;

            let row = MonthlyResult {
                period,
                hours,
                phase,
                revenue: month_revenue,
                zus_social,
                health_insurance,
                tax: ryczalt.tax,
                net,
            };
            totals.add(&row);
            rows.push(row);
        }

        let subtotal: Totals = rows.iter().collect();
        years.push(YearSection {
            year,
            annual_revenue,
            bracket: HealthBracket::for_annual_revenue(annual_revenue),
            rows,
            subtotal,
        });
    }

    info!(
        start = %range.start(),
        end = %range.end(),
        months = range.len(),
        "report built"
    );

    Ok(Report {
        range,
        hourly_rate: revenue.blended_rate(),
        years,
        totals,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::YearlyParams;

    fn period(
        year: i32,
        month: u32,
    ) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn range(
        start: YearMonth,
        end: YearMonth,
    ) -> ReportRange {
        ReportRange::new(start, end).unwrap()
    }

    fn builtin_report(range: ReportRange) -> Report {
        build_report(&TaxTables::builtin(), &HourlyRate::default(), range).unwrap()
    }

    // =========================================================================
    // ReportRange tests
    // =========================================================================

    #[test]
    fn range_rejects_end_before_start() {
        let result = ReportRange::new(period(2027, 1), period(2026, 12));

        assert_eq!(
            result,
            Err(ReportError::InvalidRange {
                start: period(2027, 1),
                end: period(2026, 12),
            })
        );
    }

    #[test]
    fn range_accepts_single_month() {
        let r = range(period(2026, 5), period(2026, 5));

        assert_eq!(r.len(), 1);
    }

    #[test]
    fn default_range_is_feb_2026_to_dec_2029() {
        let r = ReportRange::default();

        assert_eq!(r.start(), period(2026, 2));
        assert_eq!(r.end(), period(2029, 12));
        assert_eq!(r.len(), 47);
    }

    #[test]
    fn months_in_clips_first_and_last_year() {
        let r = range(period(2026, 11), period(2028, 2));

        assert_eq!(r.months_in(2026).count(), 2);
        assert_eq!(r.months_in(2027).count(), 12);
        assert_eq!(r.months_in(2028).count(), 2);
        assert_eq!(r.months_in(2029).count(), 0);
    }

    // =========================================================================
    // build_report tests
    // =========================================================================

    #[test]
    fn partial_year_produces_one_section() {
        let report = builtin_report(range(period(2026, 2), period(2026, 12)));

        assert_eq!(report.years.len(), 1);
        assert_eq!(report.rows().count(), 11);
    }

    #[test]
    fn grand_total_hours_match_calendar() {
        let tables = TaxTables::builtin();
        let report = builtin_report(range(period(2026, 2), period(2026, 12)));

        let expected: u32 = (2..=12)
            .map(|m| tables.working_hours.hours(period(2026, m)).unwrap())
            .sum();

        assert_eq!(report.totals.hours, expected);
        assert_eq!(report.totals.hours, 1872);
    }

    #[test]
    fn partial_year_bracket_uses_full_year_revenue() {
        let report = builtin_report(range(period(2026, 2), period(2026, 12)));
        let section = &report.years[0];

        let displayed: Decimal = section.rows.iter().map(|r| r.revenue).sum();

        assert_eq!(section.annual_revenue, dec!(359664));
        assert!(displayed < section.annual_revenue);
        assert_eq!(section.bracket, HealthBracket::High);
    }

    #[test]
    fn full_year_revenue_equals_annual_figure() {
        let report = builtin_report(range(period(2027, 1), period(2027, 12)));
        let section = &report.years[0];

        let summed: Decimal = section.rows.iter().map(|r| r.revenue).sum();

        assert_eq!(summed, section.annual_revenue);
    }

    #[test]
    fn first_month_values() {
        let report = builtin_report(range(period(2026, 2), period(2026, 2)));
        let row = report.rows().next().unwrap();

        assert_eq!(
            row,
            &MonthlyResult {
                period: period(2026, 2),
                hours: 160,
                phase: ZusPhase::Preferential,
                revenue: dec!(28320.0),
                zus_social: dec!(420.861420),
                health_insurance: dec!(1426.7430),
                tax: dec!(3262.29204960),
                net: dec!(23210.10353040),
            }
        );
    }

    #[test]
    fn phase_switches_after_march_2027() {
        let report = builtin_report(range(period(2027, 3), period(2027, 4)));
        let rows: Vec<&MonthlyResult> = report.rows().collect();

        assert_eq!(rows[0].phase, ZusPhase::Preferential);
        assert_eq!(rows[0].zus_social, dec!(433.486095));
        assert_eq!(rows[1].phase, ZusPhase::Full);
        assert_eq!(rows[1].zus_social, dec!(1841.941584));
    }

    #[test]
    fn health_is_constant_within_each_year() {
        let report = builtin_report(ReportRange::default());

        for section in &report.years {
            let first = section.rows[0].health_insurance;
            assert!(
                section.rows.iter().all(|r| r.health_insurance == first),
                "health varies within {}",
                section.year
            );
        }
    }

    #[test]
    fn net_identity_holds_for_every_row() {
        let report = builtin_report(ReportRange::default());

        for row in report.rows() {
            assert_eq!(
                row.net,
                row.revenue - row.zus_social - row.health_insurance - row.tax,
                "{}",
                row.period
            );
        }
    }

    #[test]
    fn subtotals_add_up_to_grand_total() {
        let report = builtin_report(ReportRange::default());

        let hours: u32 = report.years.iter().map(|s| s.subtotal.hours).sum();
        let net: Decimal = report.years.iter().map(|s| s.subtotal.net).sum();

        assert_eq!(hours, report.totals.hours);
        assert_eq!(net, report.totals.net);
    }

    #[test]
    fn eleven_month_totals() {
        let report = builtin_report(range(period(2026, 2), period(2026, 12)));

        assert_eq!(
            report.totals,
            Totals {
                hours: 1872,
                revenue: dec!(331344),
                zus_social: dec!(4629.475620),
                health_insurance: dec!(15694.1730),
                tax: dec!(38264.09254560),
                net: dec!(272756.25883440),
            }
        );
    }

    #[test]
    fn low_revenue_year_uses_low_bracket() {
        let report = build_report(
            &TaxTables::builtin(),
            &HourlyRate {
                pln: dec!(20),
                usd: dec!(0),
                usd_pln: dec!(3.5),
            },
            range(period(2026, 1), period(2026, 1)),
        )
        .unwrap();

        // 2032 h x 20 PLN = 40 640 PLN
        assert_eq!(report.years[0].bracket, HealthBracket::Low);
        assert_eq!(report.totals.health_insurance, dec!(5284.20) * dec!(0.09));
    }

    #[test]
    fn negative_net_when_contributions_exceed_revenue() {
        let mut tables = TaxTables::builtin();
        tables.working_hours.insert(period(2026, 8), 0);

        let report = build_report(
            &tables,
            &HourlyRate::default(),
            range(period(2026, 8), period(2026, 8)),
        )
        .unwrap();
        let row = report.rows().next().unwrap();

        assert_eq!(row.tax, Decimal::ZERO);
        assert!(row.net < Decimal::ZERO);
        assert_eq!(row.net, -(row.zus_social + row.health_insurance));
    }

    #[test]
    fn missing_hours_outside_display_window_still_fail() {
        let mut tables = TaxTables::default();
        tables.yearly_params = crate::tables::YearlyParamsTable::builtin();
        tables.working_hours.insert(period(2026, 2), 160);

        let result = build_report(
            &tables,
            &HourlyRate::default(),
            range(period(2026, 2), period(2026, 2)),
        );

        assert_eq!(
            result,
            Err(ReportError::Lookup(LookupError::MissingWorkingHours(period(
                2026, 1
            ))))
        );
    }

    #[test]
    fn missing_yearly_params_fail() {
        let mut tables = TaxTables::builtin();
        for p in YearMonth::months_of(2030) {
            tables.working_hours.insert(p, 160);
        }

        let result = build_report(
            &tables,
            &HourlyRate::default(),
            range(period(2030, 1), period(2030, 3)),
        );

        assert_eq!(
            result,
            Err(ReportError::Lookup(LookupError::MissingYearlyParams(2030)))
        );
    }

    #[test]
    fn extra_year_can_be_added() {
        let mut tables = TaxTables::builtin();
        for p in YearMonth::months_of(2030) {
            tables.working_hours.insert(p, 168);
        }
        tables.yearly_params.insert(YearlyParams {
            year: 2030,
            ..tables.yearly_params.get(2029).unwrap().clone()
        });

        let report = build_report(
            &tables,
            &HourlyRate::default(),
            range(period(2029, 12), period(2030, 1)),
        )
        .unwrap();

        assert_eq!(report.years.len(), 2);
        assert_eq!(report.rows().count(), 2);
    }
}
