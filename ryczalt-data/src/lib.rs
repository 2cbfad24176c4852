//! CSV loaders that extend or override the compiled-in tables.

mod error;
mod working_hours;
mod yearly_params;

pub use error::LoaderError;
pub use working_hours::{WorkingHoursLoader, WorkingHoursRecord};
pub use yearly_params::{YearlyParamsLoader, YearlyParamsRecord};
