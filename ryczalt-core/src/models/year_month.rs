use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when constructing or parsing a [`YearMonth`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum YearMonthError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("invalid period '{0}', expected YYYY-MM")]
    Malformed(String),
}

/// A calendar month, ordered by year first and month second.
///
/// ```
/// use ryczalt_core::YearMonth;
///
/// let period: YearMonth = "2026-02".parse().unwrap();
/// assert_eq!(period.year(), 2026);
/// assert_eq!(period.month(), 2);
/// assert_eq!(period.to_string(), "2026-02");
/// assert!(period < YearMonth::new(2026, 3).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(
        year: i32,
        month: u32,
    ) -> Result<Self, YearMonthError> {
        if !(1..=12).contains(&month) {
            return Err(YearMonthError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Builds a period from values already known to be in range.
    pub(crate) const fn from_parts(
        year: i32,
        month: u32,
    ) -> Self {
        Self { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// January of the given year.
    pub fn first_of(year: i32) -> Self {
        Self { year, month: 1 }
    }

    /// December of the given year.
    pub fn last_of(year: i32) -> Self {
        Self { year, month: 12 }
    }

    /// The month immediately after this one, rolling over into January.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Every month from `start` to `end`, both inclusive. Empty when `start > end`.
    pub fn range_inclusive(
        start: YearMonth,
        end: YearMonth,
    ) -> impl Iterator<Item = YearMonth> {
        std::iter::successors(Some(start), |current| Some(current.next()))
            .take_while(move |current| *current <= end)
    }

    /// All twelve months of `year`.
    pub fn months_of(year: i32) -> impl Iterator<Item = YearMonth> {
        Self::range_inclusive(Self::first_of(year), Self::last_of(year))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let malformed = || YearMonthError::Malformed(s.to_string());

        let (year, month) = trimmed.split_once('-').ok_or_else(malformed)?;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;

        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
