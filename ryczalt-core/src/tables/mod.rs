//! Compiled-in reference data: billable hours per month and contribution
//! bases per year.

mod working_hours;
mod yearly_params;

use thiserror::Error;

use crate::YearMonth;

pub use working_hours::WorkingHoursTable;
pub use yearly_params::YearlyParamsTable;

/// A requested row is absent from one of the static tables.
///
/// Both variants are configuration errors: the report cannot be produced
/// without the missing data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no working hours recorded for {0}")]
    MissingWorkingHours(YearMonth),

    #[error("no contribution parameters for year {0}")]
    MissingYearlyParams(i32),
}

/// Both tables the report needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxTables {
    pub working_hours: WorkingHoursTable,
    pub yearly_params: YearlyParamsTable,
}

impl TaxTables {
    pub fn builtin() -> Self {
        Self {
            working_hours: WorkingHoursTable::builtin(),
            yearly_params: YearlyParamsTable::builtin(),
        }
    }
}
