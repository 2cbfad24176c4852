//! Text and CSV output for a [`Report`].

use std::io::{self, Write};

use clap::ValueEnum;
use ryczalt_core::calendar::CalendarMismatch;
use ryczalt_core::{MonthlyResult, Report, Totals};
use serde::Serialize;
use thiserror::Error;

use crate::utils::{fixed2, format_amount};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width text table.
    #[default]
    Table,
    /// Comma-separated values, one record per month plus a total.
    Csv,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,

    /// Print a per-year subtotal before each year separator (table only).
    pub subtotals: bool,
}

pub fn render<W: Write>(
    report: &Report,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), RenderError> {
    match options.format {
        OutputFormat::Table => render_table(report, options.subtotals, out)?,
        OutputFormat::Csv => render_csv(report, out)?,
    }
    Ok(())
}

fn header() -> String {
    format!(
        "{:<10} {:>5} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Month", "Hours", "Revenue", "ZUS Social", "Health Ins", "Ryczałt", "Net"
    )
}

fn table_line(
    label: &str,
    hours: u32,
    amounts: [String; 5],
) -> String {
    let [revenue, zus_social, health, tax, net] = amounts;
    format!("{label:<10} {hours:>5} {revenue:>12} {zus_social:>12} {health:>12} {tax:>12} {net:>12}")
}

fn month_line(row: &MonthlyResult) -> String {
    table_line(
        &row.period.to_string(),
        row.hours,
        [
            format_amount(row.revenue),
            format_amount(row.zus_social),
            format_amount(row.health_insurance),
            format_amount(row.tax),
            format_amount(row.net),
        ],
    )
}

fn totals_line(
    label: &str,
    totals: &Totals,
) -> String {
    table_line(
        label,
        totals.hours,
        [
            format_amount(totals.revenue),
            format_amount(totals.zus_social),
            format_amount(totals.health_insurance),
            format_amount(totals.tax),
            format_amount(totals.net),
        ],
    )
}

/// Writes the fixed-width table: header, one line per month, a separator
/// after each year and a closing `TOTAL` line.
pub fn render_table<W: Write>(
    report: &Report,
    subtotals: bool,
    out: &mut W,
) -> io::Result<()> {
    let header = header();
    let separator = "-".repeat(header.chars().count());

    writeln!(out, "{header}")?;
    writeln!(out, "{separator}")?;

    for section in &report.years {
        for row in &section.rows {
            writeln!(out, "{}", month_line(row))?;
        }
        if subtotals {
            writeln!(
                out,
                "{}",
                totals_line(&format!("{} total", section.year), &section.subtotal)
            )?;
        }
        writeln!(out, "{separator}")?;
    }

    writeln!(out, "{}", totals_line("TOTAL", &report.totals))
}

#[derive(Debug, Serialize)]
struct CsvRecord {
    month: String,
    hours: u32,
    phase: String,
    revenue: String,
    zus_social: String,
    health_insurance: String,
    tax: String,
    net: String,
}

impl From<&MonthlyResult> for CsvRecord {
    fn from(row: &MonthlyResult) -> Self {
        Self {
            month: row.period.to_string(),
            hours: row.hours,
            phase: row.phase.to_string(),
            revenue: fixed2(row.revenue),
            zus_social: fixed2(row.zus_social),
            health_insurance: fixed2(row.health_insurance),
            tax: fixed2(row.tax),
            net: fixed2(row.net),
        }
    }
}

impl From<&Totals> for CsvRecord {
    fn from(totals: &Totals) -> Self {
        Self {
            month: "TOTAL".to_string(),
            hours: totals.hours,
            phase: String::new(),
            revenue: fixed2(totals.revenue),
            zus_social: fixed2(totals.zus_social),
            health_insurance: fixed2(totals.health_insurance),
            tax: fixed2(totals.tax),
            net: fixed2(totals.net),
        }
    }
}

/// Writes one CSV record per month and a final `TOTAL` record.
pub fn render_csv<W: Write>(
    report: &Report,
    out: &mut W,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    for row in report.rows() {
        writer.serialize(CsvRecord::from(row))?;
    }
    writer.serialize(CsvRecord::from(&report.totals))?;
    writer.flush()?;
    Ok(())
}

/// Writes the calendar audit outcome, one line per mismatching month.
pub fn render_audit<W: Write>(
    checked: usize,
    mismatches: &[CalendarMismatch],
    out: &mut W,
) -> io::Result<()> {
    if mismatches.is_empty() {
        return writeln!(out, "All {checked} months match the Polish business-day calendar.");
    }
    writeln!(out, "{:<10} {:>8} {:>8}", "Month", "Recorded", "Computed")?;
    for mismatch in mismatches {
        writeln!(
            out,
            "{:<10} {:>8} {:>8}",
            mismatch.period.to_string(),
            mismatch.recorded,
            mismatch.computed
        )?;
    }
    writeln!(out, "{} of {checked} months differ.", mismatches.len())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ryczalt_core::calculations::HourlyRate;
    use ryczalt_core::{ReportRange, TaxTables, YearMonth, build_report};

    use super::*;

    fn report(
        start: (i32, u32),
        end: (i32, u32),
    ) -> Report {
        let range = ReportRange::new(
            YearMonth::new(start.0, start.1).unwrap(),
            YearMonth::new(end.0, end.1).unwrap(),
        )
        .unwrap();
        build_report(&TaxTables::builtin(), &HourlyRate::default(), range).unwrap()
    }

    fn table_output(
        report: &Report,
        subtotals: bool,
    ) -> String {
        let mut out = Vec::new();
        render_table(report, subtotals, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn header_is_81_columns_wide() {
        assert_eq!(header().chars().count(), 81);
    }

    #[test]
    fn month_line_formats_money_columns() {
        let report = report((2026, 2), (2026, 2));

        let line = month_line(report.rows().next().unwrap());

        assert_eq!(
            line,
            "2026-02      160    28,320.00       420.86     1,426.74     3,262.29    23,210.10"
        );
    }

    #[test]
    fn separator_follows_each_year() {
        let output = table_output(&report((2026, 12), (2027, 1)), false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[3].starts_with("----"));
        assert!(lines[5].starts_with("----"));
        assert!(lines[6].starts_with("TOTAL"));
    }

    #[test]
    fn subtotals_precede_year_separator() {
        let output = table_output(&report((2026, 12), (2027, 1)), true);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 9);
        assert!(lines[3].starts_with("2026 total"));
        assert!(lines[6].starts_with("2027 total"));
    }

    #[test]
    fn csv_has_header_months_and_total() {
        let mut out = Vec::new();
        render_csv(&report((2027, 3), (2027, 4)), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "month,hours,phase,revenue,zus_social,health_insurance,tax,net"
        );
        assert!(lines[1].starts_with("2027-03,176,preferential,31152.00,433.49,"));
        assert!(lines[2].starts_with("2027-04,176,full,31152.00,1841.94,"));
        assert!(lines[3].starts_with("TOTAL,352,,62304.00,"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn audit_reports_clean_calendar() {
        let mut out = Vec::new();
        render_audit(48, &[], &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "All 48 months match the Polish business-day calendar.\n"
        );
    }

    #[test]
    fn audit_lists_mismatches() {
        let mismatches = vec![CalendarMismatch {
            period: YearMonth::new(2028, 4).unwrap(),
            recorded: 160,
            computed: 152,
        }];
        let mut out = Vec::new();
        render_audit(48, &mismatches, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("2028-04         160      152"));
        assert!(output.ends_with("1 of 48 months differ.\n"));
    }
}
