//! Report settings.
//!
//! Settings are layered: compiled-in defaults, then an optional TOML file,
//! then command-line overrides.
//!
//! ```toml
//! [range]
//! start = "2026-02"
//! end = "2029-12"
//!
//! [rates]
//! pln = 100.0
//! usd = 22.0
//! usd_pln = 3.5
//!
//! [data]
//! working_hours_csv = "hours_2030.csv"
//! yearly_params_csv = "params_2030.csv"
//! ```
//!
//! Relative paths under `[data]` are resolved against the settings file's
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use ryczalt_core::calculations::HourlyRate;
use ryczalt_core::report::{DEFAULT_END, DEFAULT_START};
use ryczalt_core::{ReportError, ReportRange, YearMonth};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeSettings {
    pub start: YearMonth,
    pub end: YearMonth,
}

impl Default for RangeSettings {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

/// Optional CSV files merged over the compiled-in tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataSettings {
    pub working_hours_csv: Option<PathBuf>,
    pub yearly_params_csv: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub range: RangeSettings,
    pub rates: HourlyRate,
    pub data: DataSettings,
}

/// Values given on the command line; `None` keeps the layered value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub start: Option<YearMonth>,
    pub end: Option<YearMonth>,
    pub rate_pln: Option<Decimal>,
    pub rate_usd: Option<Decimal>,
    pub usd_pln: Option<Decimal>,
    pub working_hours_csv: Option<PathBuf>,
    pub yearly_params_csv: Option<PathBuf>,
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads a TOML settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings = Self::from_toml_str(&text)?;

        if let Some(base) = path.parent() {
            settings.data.resolve_relative_to(base);
        }
        debug!(path = %path.display(), "loaded settings file");
        Ok(settings)
    }

    pub fn apply(
        &mut self,
        overrides: SettingsOverrides,
    ) {
        if let Some(start) = overrides.start {
            self.range.start = start;
        }
        if let Some(end) = overrides.end {
            self.range.end = end;
        }
        if let Some(pln) = overrides.rate_pln {
            self.rates.pln = pln;
        }
        if let Some(usd) = overrides.rate_usd {
            self.rates.usd = usd;
        }
        if let Some(usd_pln) = overrides.usd_pln {
            self.rates.usd_pln = usd_pln;
        }
        if overrides.working_hours_csv.is_some() {
            self.data.working_hours_csv = overrides.working_hours_csv;
        }
        if overrides.yearly_params_csv.is_some() {
            self.data.yearly_params_csv = overrides.yearly_params_csv;
        }
    }

    pub fn report_range(&self) -> Result<ReportRange, ReportError> {
        ReportRange::new(self.range.start, self.range.end)
    }
}

impl DataSettings {
    fn resolve_relative_to(
        &mut self,
        base: &Path,
    ) {
        for path in [&mut self.working_hours_csv, &mut self.yearly_params_csv]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
