mod health_bracket;
mod monthly_result;
mod totals;
mod year_month;
mod yearly_params;
mod zus_phase;

pub use health_bracket::HealthBracket;
pub use monthly_result::MonthlyResult;
pub use totals::Totals;
pub use year_month::{YearMonth, YearMonthError};
pub use yearly_params::{YearlyParams, YearlyParamsError};
pub use zus_phase::{PREFERENTIAL_CUTOFF, ZusPhase};
