use std::path::PathBuf;

use ryczalt_core::{YearMonthError, YearlyParamsError};
use thiserror::Error;

/// Errors that can occur when loading table rows from CSV.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row}: {source}")]
    InvalidPeriod {
        row: usize,
        #[source]
        source: YearMonthError,
    },

    #[error("row {row}: {hours} hours exceeds the {max} hours in a month")]
    TooManyHours { row: usize, hours: u32, max: u32 },

    #[error("row {row}: {source}")]
    InvalidParams {
        row: usize,
        #[source]
        source: YearlyParamsError,
    },
}

impl From<csv::Error> for LoaderError {
    fn from(err: csv::Error) -> Self {
        LoaderError::CsvParse(err.to_string())
    }
}
