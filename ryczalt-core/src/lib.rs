//! Monthly ZUS and ryczałt breakdown for a Polish sole proprietorship.

pub mod calculations;
pub mod calendar;
pub mod models;
pub mod report;
pub mod tables;

pub use models::*;
pub use report::{Report, ReportError, ReportRange, YearSection, build_report};
pub use tables::{LookupError, TaxTables};
