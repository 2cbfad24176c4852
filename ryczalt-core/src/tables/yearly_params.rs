use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::LookupError;
use crate::YearlyParams;

/// Contribution bases per year. Rows after 2026 are ~3% growth forecasts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearlyParamsTable {
    params: BTreeMap<i32, YearlyParams>,
}

fn row(
    year: i32,
    [pref_base, full_base, health_base_low, health_base_mid, health_base_high]: [Decimal; 5],
) -> YearlyParams {
    YearlyParams {
        year,
        pref_base,
        full_base,
        health_base_low,
        health_base_mid,
        health_base_high,
    }
}

impl YearlyParamsTable {
    /// The compiled-in parameters for 2025 through 2029.
    pub fn builtin() -> Self {
        // Health bases are 60% / 100% / 180% of the reference average wage.
        let rows = [
            row(
                2025,
                [dec!(1399.80), dec!(5203.80), dec!(5129.51), dec!(8549.18), dec!(15388.52)],
            ),
            row(
                2026,
                [dec!(1441.80), dec!(5652.00), dec!(5284.20), dec!(8807.06), dec!(15852.70)],
            ),
            row(
                2027,
                [dec!(1485.05), dec!(5821.56), dec!(5442.73), dec!(9071.27), dec!(16328.28)],
            ),
            row(
                2028,
                [dec!(1529.60), dec!(5996.21), dec!(5606.01), dec!(9343.41), dec!(16818.13)],
            ),
            row(
                2029,
                [dec!(1575.49), dec!(6176.10), dec!(5774.19), dec!(9623.71), dec!(17322.67)],
            ),
        ];
        Self {
            params: rows.into_iter().map(|p| (p.year, p)).collect(),
        }
    }

    /// Parameters for `year`.
    ///
    /// # Errors
    ///
    /// [`LookupError::MissingYearlyParams`] when the year is not in the table.
    pub fn get(
        &self,
        year: i32,
    ) -> Result<&YearlyParams, LookupError> {
        self.params
            .get(&year)
            .ok_or(LookupError::MissingYearlyParams(year))
    }

    /// Adds or replaces the row for `params.year`. Returns the previous row, if any.
    pub fn insert(
        &mut self,
        params: YearlyParams,
    ) -> Option<YearlyParams> {
        self.params.insert(params.year, params)
    }

    /// Rows in year order.
    pub fn iter(&self) -> impl Iterator<Item = &YearlyParams> + '_ {
        self.params.values()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_has_five_years() {
        let table = YearlyParamsTable::builtin();

        let years: Vec<i32> = table.iter().map(|p| p.year).collect();

        assert_eq!(years, vec![2025, 2026, 2027, 2028, 2029]);
    }

    #[test]
    fn builtin_rows_are_valid() {
        for params in YearlyParamsTable::builtin().iter() {
            assert_eq!(params.validate(), Ok(()), "year {}", params.year);
        }
    }

    #[test]
    fn get_returns_row_for_year() {
        let table = YearlyParamsTable::builtin();

        let params = table.get(2028).unwrap();

        assert_eq!(params.pref_base, dec!(1529.60));
        assert_eq!(params.health_base_high, dec!(16818.13));
    }

    #[test]
    fn get_fails_for_missing_year() {
        let table = YearlyParamsTable::builtin();

        assert_eq!(table.get(2030), Err(LookupError::MissingYearlyParams(2030)));
    }

    #[test]
    fn insert_adds_new_year() {
        let mut table = YearlyParamsTable::builtin();
        let params_2030 = YearlyParams {
            year: 2030,
            ..table.get(2029).unwrap().clone()
        };

        let previous = table.insert(params_2030);

        assert_eq!(previous, None);
        assert_eq!(table.len(), 6);
        assert!(table.get(2030).is_ok());
    }
}
