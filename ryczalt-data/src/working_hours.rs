use std::fs::File;
use std::io::Read;
use std::path::Path;

use ryczalt_core::YearMonth;
use ryczalt_core::tables::WorkingHoursTable;
use serde::Deserialize;
use tracing::{debug, info};

use crate::LoaderError;

/// 31 days x 24 hours.
pub const MAX_MONTHLY_HOURS: u32 = 744;

/// A single record from a working-hours CSV file.
///
/// - `year`: calendar year (e.g. 2030)
/// - `month`: 1-12
/// - `hours`: billable hours in that month
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WorkingHoursRecord {
    pub year: i32,
    pub month: u32,
    pub hours: u32,
}

/// Loader for monthly working hours.
///
/// ```csv
/// year,month,hours
/// 2030,1,160
/// 2030,2,160
/// ```
pub struct WorkingHoursLoader;

impl WorkingHoursLoader {
    /// Parse records from any CSV reader. Headers are matched by name.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<WorkingHoursRecord>, LoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: WorkingHoursRecord = result?;
            records.push(record);
        }

        debug!(count = records.len(), "parsed working-hours records");
        Ok(records)
    }

    /// Parse records from a file on disk.
    pub fn parse_file(path: &Path) -> Result<Vec<WorkingHoursRecord>, LoaderError> {
        let file = File::open(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(file)
    }

    /// Insert records into `table`, replacing months already present.
    ///
    /// All records are validated before the table is touched, so a bad row
    /// leaves the table unchanged. Returns the number of rows applied.
    pub fn apply(
        table: &mut WorkingHoursTable,
        records: &[WorkingHoursRecord],
    ) -> Result<usize, LoaderError> {
        let mut validated = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            // Row numbers are 1-based and skip the header line.
            let row = index + 2;
            let period = YearMonth::new(record.year, record.month)
                .map_err(|source| LoaderError::InvalidPeriod { row, source })?;
            if record.hours > MAX_MONTHLY_HOURS {
                return Err(LoaderError::TooManyHours {
                    row,
                    hours: record.hours,
                    max: MAX_MONTHLY_HOURS,
                });
            }
            validated.push((period, record.hours));
        }

        let mut replaced = 0;
        for (period, hours) in &validated {
            if let Some(previous) = table.insert(*period, *hours) {
                debug!(%period, previous, hours, "overrode working hours");
                replaced += 1;
            }
        }

        info!(applied = validated.len(), replaced, "loaded working hours");
        Ok(validated.len())
    }
}
