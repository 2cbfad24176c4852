use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::MonthlyResult;

/// Running sums over a sequence of [`MonthlyResult`] rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub hours: u32,
    pub revenue: Decimal,
    pub zus_social: Decimal,
    pub health_insurance: Decimal,
    pub tax: Decimal,
    pub net: Decimal,
}

impl Totals {
    pub fn add(
        &mut self,
        row: &MonthlyResult,
    ) {
        self.hours += row.hours;
        self.revenue += row.revenue;
        self.zus_social += row.zus_social;
        self.health_insurance += row.health_insurance;
        self.tax += row.tax;
        self.net += row.net;
    }
}

impl<'a> FromIterator<&'a MonthlyResult> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a MonthlyResult>>(rows: I) -> Self {
        let mut totals = Totals::default();
        for row in rows {
            totals.add(row);
        }
        totals
    }
}
