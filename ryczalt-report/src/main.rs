use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use ryczalt_core::YearMonth;
use ryczalt_report::{OutputFormat, RenderOptions, Settings, SettingsOverrides, app, logging};
use tracing::debug;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Monthly ZUS and ryczałt breakdown for a Polish sole proprietorship.
///
/// Prints revenue, social and health contributions, flat-rate tax and net
/// income for every month of the requested range.
#[derive(Debug, Parser)]
#[command(name = "ryczalt", version, about)]
struct Cli {
    /// TOML settings file (`[range]`, `[rates]`, `[data]`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,ryczalt_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the monthly breakdown (default).
    Report(ReportArgs),

    /// Compare the working-hours table with the Polish business-day calendar.
    AuditCalendar(DataArgs),
}

#[derive(Debug, Default, Args)]
struct DataArgs {
    /// CSV of `year,month,hours` rows merged over the built-in calendar.
    #[arg(long)]
    hours_csv: Option<PathBuf>,

    /// CSV of yearly contribution bases merged over the built-in table.
    #[arg(long)]
    params_csv: Option<PathBuf>,
}

#[derive(Debug, Default, Args)]
struct ReportArgs {
    /// First month to print (YYYY-MM).
    #[arg(long)]
    from: Option<YearMonth>,

    /// Last month to print (YYYY-MM).
    #[arg(long)]
    to: Option<YearMonth>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Print a subtotal line for each year.
    #[arg(long, default_value_t = false)]
    subtotals: bool,

    /// Hourly rate invoiced in PLN.
    #[arg(long)]
    rate_pln: Option<Decimal>,

    /// Hourly rate invoiced in USD.
    #[arg(long)]
    rate_usd: Option<Decimal>,

    /// PLN per USD.
    #[arg(long)]
    usd_pln: Option<Decimal>,

    #[command(flatten)]
    data: DataArgs,
}

impl ReportArgs {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            start: self.from,
            end: self.to,
            rate_pln: self.rate_pln,
            rate_usd: self.rate_usd,
            usd_pln: self.usd_pln,
            ..self.data.overrides()
        }
    }
}

impl DataArgs {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            working_hours_csv: self.hours_csv.clone(),
            yearly_params_csv: self.params_csv.clone(),
            ..SettingsOverrides::default()
        }
    }
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings: {}", path.display())),
        None => Ok(Settings::default()),
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let mut settings = load_settings(cli.config.as_ref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let command = cli
        .command
        .unwrap_or_else(|| Command::Report(ReportArgs::default()));

    let code = match command {
        Command::Report(args) => {
            settings.apply(args.overrides());
            debug!(?settings, "running report");
            let options = RenderOptions {
                format: args.format,
                subtotals: args.subtotals,
            };
            app::run_report(&settings, options, &mut out)?;
            ExitCode::SUCCESS
        }
        Command::AuditCalendar(args) => {
            settings.apply(args.overrides());
            let mismatches = app::run_audit(&settings, &mut out)?;
            if mismatches == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    };

    out.flush()?;
    Ok(code)
}
