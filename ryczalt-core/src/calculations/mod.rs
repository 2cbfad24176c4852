//! Calculation steps of the monthly ryczałt breakdown.
//!
//! Each step is a small, pure function or calculator over the static tables:
//! revenue from hours, social and health contributions from the yearly
//! parameters, and the flat-rate tax from the three of them.

pub mod common;
pub mod rates;
pub mod revenue;
pub mod ryczalt;
pub mod zus;

pub use revenue::{HourlyRate, RevenueEngine};
pub use ryczalt::{RyczaltResult, calculate_ryczalt};
pub use zus::ZusCalculator;
