//! Polish business-day calendar.
//!
//! Recomputes billable hours from first principles so the curated
//! [`WorkingHoursTable`] can be checked: every weekday that is not a public
//! holiday counts as eight hours.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::YearMonth;
use crate::tables::WorkingHoursTable;

pub const HOURS_PER_DAY: u32 = 8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("year {0} is outside the supported calendar range")]
    OutOfRange(i32),
}

/// A month whose recorded hours differ from the computed calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMismatch {
    pub period: YearMonth,
    pub recorded: u32,
    pub computed: u32,
}

/// Easter Sunday in the Gregorian calendar (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).ok_or(CalendarError::OutOfRange(year))
}

/// Statutory non-working days in Poland for `year`.
pub fn polish_public_holidays(year: i32) -> Result<BTreeSet<NaiveDate>, CalendarError> {
    let date = |month: u32, day: u32| {
        NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::OutOfRange(year))
    };
    let after_easter = |easter: NaiveDate, days: u64| {
        easter
            .checked_add_days(Days::new(days))
            .ok_or(CalendarError::OutOfRange(year))
    };

    let easter = easter_sunday(year)?;

    Ok(BTreeSet::from([
        date(1, 1)?,
        date(1, 6)?,
        easter,
        after_easter(easter, 1)?,
        date(5, 1)?,
        date(5, 3)?,
        after_easter(easter, 49)?, // Pentecost
        after_easter(easter, 60)?, // Corpus Christi
        date(8, 15)?,
        date(11, 1)?,
        date(11, 11)?,
        date(12, 25)?,
        date(12, 26)?,
    ]))
}

/// Weekdays in `period` that are not public holidays.
pub fn business_days(period: YearMonth) -> Result<u32, CalendarError> {
    let holidays = polish_public_holidays(period.year())?;
    let mut day = NaiveDate::from_ymd_opt(period.year(), period.month(), 1)
        .ok_or(CalendarError::OutOfRange(period.year()))?;

    let mut count = 0;
    while day.month() == period.month() {
        let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
        if !weekend && !holidays.contains(&day) {
            count += 1;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    Ok(count)
}

pub fn business_hours(period: YearMonth) -> Result<u32, CalendarError> {
    Ok(business_days(period)? * HOURS_PER_DAY)
}

/// Compares every entry of `table` with the computed calendar.
pub fn audit(table: &WorkingHoursTable) -> Result<Vec<CalendarMismatch>, CalendarError> {
    let mut mismatches = Vec::new();
    for (period, recorded) in table.iter() {
        let computed = business_hours(period)?;
        if computed != recorded {
            warn!(%period, recorded, computed, "working hours differ from calendar");
            mismatches.push(CalendarMismatch {
                period,
                recorded,
                computed,
            });
        }
    }
    debug!(
        checked = table.len(),
        mismatches = mismatches.len(),
        "calendar audit finished"
    );
    Ok(mismatches)
}
