use std::io::Write;

use anyhow::{Context, Result};
use ryczalt_core::{Report, TaxTables, build_report, calendar};
use ryczalt_data::{WorkingHoursLoader, YearlyParamsLoader};
use tracing::info;

use crate::config::{DataSettings, Settings};
use crate::render::{self, RenderOptions};

/// Built-in tables with any configured CSV rows merged over them.
pub fn load_tables(data: &DataSettings) -> Result<TaxTables> {
    let mut tables = TaxTables::builtin();

    if let Some(path) = &data.working_hours_csv {
        info!(path = %path.display(), "loading working hours");
        let records = WorkingHoursLoader::parse_file(path)
            .with_context(|| format!("Failed to parse working hours: {}", path.display()))?;
        WorkingHoursLoader::apply(&mut tables.working_hours, &records)
            .with_context(|| format!("Invalid working hours in {}", path.display()))?;
    }

    if let Some(path) = &data.yearly_params_csv {
        info!(path = %path.display(), "loading yearly parameters");
        let records = YearlyParamsLoader::parse_file(path)
            .with_context(|| format!("Failed to parse yearly parameters: {}", path.display()))?;
        YearlyParamsLoader::apply(&mut tables.yearly_params, &records)
            .with_context(|| format!("Invalid yearly parameters in {}", path.display()))?;
    }

    Ok(tables)
}

/// Builds the report described by `settings` and writes it to `out`.
pub fn run_report<W: Write>(
    settings: &Settings,
    options: RenderOptions,
    out: &mut W,
) -> Result<Report> {
    let tables = load_tables(&settings.data)?;
    let range = settings.report_range().context("Invalid report range")?;

    let report =
        build_report(&tables, &settings.rates, range).context("Failed to build report")?;
    render::render(&report, options, out).context("Failed to write report")?;

    Ok(report)
}

/// Checks the working-hours table against the computed calendar.
/// Returns the number of mismatching months.
pub fn run_audit<W: Write>(
    settings: &Settings,
    out: &mut W,
) -> Result<usize> {
    let tables = load_tables(&settings.data)?;
    let mismatches =
        calendar::audit(&tables.working_hours).context("Failed to compute calendar")?;
    render::render_audit(tables.working_hours.len(), &mismatches, out)
        .context("Failed to write audit")?;

    Ok(mismatches.len())
}
