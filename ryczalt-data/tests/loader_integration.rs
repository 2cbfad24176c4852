//! Integration tests that load the on-disk fixtures and run a report over
//! the extended tables.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use ryczalt_core::calculations::HourlyRate;
use ryczalt_core::{HealthBracket, ReportRange, TaxTables, YearMonth, build_report, calendar};
use ryczalt_data::{LoaderError, WorkingHoursLoader, YearlyParamsLoader};

const HOURS_2030: &str = include_str!("../test-data/working_hours_2030.csv");
const PARAMS_2030: &str = include_str!("../test-data/yearly_params_2030.csv");

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join(name)
}

fn tables_with_2030() -> TaxTables {
    let mut tables = TaxTables::builtin();

    let hours = WorkingHoursLoader::parse(HOURS_2030.as_bytes()).expect("hours fixture parses");
    WorkingHoursLoader::apply(&mut tables.working_hours, &hours).expect("hours fixture applies");

    let params = YearlyParamsLoader::parse(PARAMS_2030.as_bytes()).expect("params fixture parses");
    YearlyParamsLoader::apply(&mut tables.yearly_params, &params)
        .expect("params fixture applies");

    tables
}

#[test]
fn test_fixture_files_load_from_disk() {
    let hours = WorkingHoursLoader::parse_file(&fixture("working_hours_2030.csv")).unwrap();
    let params = YearlyParamsLoader::parse_file(&fixture("yearly_params_2030.csv")).unwrap();

    assert_eq!(hours.len(), 12);
    assert_eq!(params.len(), 1);
}

#[test]
fn test_missing_file_reports_path() {
    let path = fixture("does_not_exist.csv");

    let result = WorkingHoursLoader::parse_file(&path);

    match result {
        Err(LoaderError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_loaded_calendar_matches_computed_holidays() {
    let tables = tables_with_2030();

    let mismatches = calendar::audit(&tables.working_hours).unwrap();

    assert!(mismatches.is_empty(), "{mismatches:?}");
}

#[test]
fn test_report_runs_over_loaded_year() {
    let tables = tables_with_2030();
    let range = ReportRange::new(
        YearMonth::new(2030, 1).unwrap(),
        YearMonth::new(2030, 12).unwrap(),
    )
    .unwrap();

    let report = build_report(&tables, &HourlyRate::default(), range).unwrap();
    let section = &report.years[0];

    assert_eq!(report.totals.hours, 2008);
    assert_eq!(section.annual_revenue, dec!(355416));
    assert_eq!(section.bracket, HealthBracket::High);
    assert_eq!(section.rows[0].health_insurance, dec!(17842.35) * dec!(0.09));
    assert_eq!(section.rows[0].zus_social, dec!(6361.38) * dec!(0.3164));
}
