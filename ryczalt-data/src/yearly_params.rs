use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use ryczalt_core::YearlyParams;
use ryczalt_core::tables::YearlyParamsTable;
use serde::Deserialize;
use tracing::{debug, info};

use crate::LoaderError;

/// A single record from a yearly-parameters CSV file. All bases are PLN.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct YearlyParamsRecord {
    pub year: i32,
    pub pref_base: Decimal,
    pub full_base: Decimal,
    pub health_base_low: Decimal,
    pub health_base_mid: Decimal,
    pub health_base_high: Decimal,
}

impl From<&YearlyParamsRecord> for YearlyParams {
    fn from(record: &YearlyParamsRecord) -> Self {
        YearlyParams {
            year: record.year,
            pref_base: record.pref_base,
            full_base: record.full_base,
            health_base_low: record.health_base_low,
            health_base_mid: record.health_base_mid,
            health_base_high: record.health_base_high,
        }
    }
}

/// Loader for per-year contribution bases.
///
/// ```csv
/// year,pref_base,full_base,health_base_low,health_base_mid,health_base_high
/// 2030,1622.75,6361.38,5947.42,9912.42,17842.35
/// ```
pub struct YearlyParamsLoader;

impl YearlyParamsLoader {
    pub fn parse<R: Read>(reader: R) -> Result<Vec<YearlyParamsRecord>, LoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: YearlyParamsRecord = result?;
            records.push(record);
        }

        debug!(count = records.len(), "parsed yearly-parameter records");
        Ok(records)
    }

    pub fn parse_file(path: &Path) -> Result<Vec<YearlyParamsRecord>, LoaderError> {
        let file = File::open(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(file)
    }

    /// Validate every record, then insert them into `table`, replacing
    /// years already present. Returns the number of rows applied.
    pub fn apply(
        table: &mut YearlyParamsTable,
        records: &[YearlyParamsRecord],
    ) -> Result<usize, LoaderError> {
        let mut validated = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let params = YearlyParams::from(record);
            params
                .validate()
                .map_err(|source| LoaderError::InvalidParams {
                    row: index + 2,
                    source,
                })?;
            validated.push(params);
        }

        let applied = validated.len();
        for params in validated {
            let year = params.year;
            if table.insert(params).is_some() {
                debug!(year, "overrode yearly parameters");
            }
        }

        info!(applied, "loaded yearly parameters");
        Ok(applied)
    }
}
