//! StockLens CLI: the dashboard's numbers as plain text.
//!
//! Commands:
//! - `report`: title, summary metrics, latest derived values, recent-data table
//! - `span`: per-source row counts, merged size, duplicate dates, inconsistent rows,
//!   first/last date

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stocklens_core::config::parse_flag_date;
use stocklens_core::display::{format_optional, ABSENT};
use stocklens_core::{
    profiling, ConfigOverrides, DashboardConfig, DisplayModel, TimeSeriesPipeline,
};

#[derive(Parser)]
#[command(name = "stocklens", about = "StockLens CLI: stock trend report from two CSV sources")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print summary metrics, latest derived values and the recent-data table.
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Start date (YYYY-MM-DD). Defaults to the first record.
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to the last record.
        #[arg(long)]
        end: Option<String>,

        /// Leave out the moving average.
        #[arg(long, default_value_t = false)]
        no_ma: bool,

        /// Leave out daily return and volatility.
        #[arg(long, default_value_t = false)]
        no_risk: bool,
    },
    /// Describe the merged dataset.
    Span {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Dashboard TOML file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Training CSV (overrides the config file).
    #[arg(long)]
    training: Option<PathBuf>,

    /// Testing CSV (overrides the config file).
    #[arg(long)]
    testing: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Report {
            source,
            start,
            end,
            no_ma,
            no_risk,
        } => {
            let overrides = ConfigOverrides {
                training: source.training,
                testing: source.testing,
                start_date: start.as_deref().map(parse_flag_date).transpose()?,
                end_date: end.as_deref().map(parse_flag_date).transpose()?,
                hide_moving_average: no_ma,
                hide_risk_analysis: no_risk,
            };
            run_report(source.config, &overrides)
        }
        Commands::Span { source } => {
            let overrides = ConfigOverrides {
                training: source.training,
                testing: source.testing,
                ..ConfigOverrides::default()
            };
            run_span(source.config, &overrides)
        }
    }
}

/// Diagnostics go to stderr so stdout stays the report. `RUST_LOG` overrides
/// the default level; `STOCKLENS_PROFILE=1` raises it to show timings.
fn init_logging() {
    profiling::init();
    let default = if profiling::is_enabled() { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load(
    config_path: Option<PathBuf>,
    overrides: &ConfigOverrides,
) -> Result<(DashboardConfig, TimeSeriesPipeline)> {
    let mut config = DashboardConfig::load_or_default(config_path.as_deref())
        .context("failed to load dashboard config")?;
    config.apply(overrides);

    let pipeline = TimeSeriesPipeline::load(&config.sources)
        .context("failed to load price data")?
        .with_metrics(config.metrics)?;
    Ok((config, pipeline))
}

fn run_report(config_path: Option<PathBuf>, overrides: &ConfigOverrides) -> Result<()> {
    let (config, pipeline) = load(config_path, overrides)?;
    let view = config.view.resolve(pipeline.span());
    let model = pipeline.render(&view);
    print!("{}", format_report(&config, &model));
    Ok(())
}

fn run_span(config_path: Option<PathBuf>, overrides: &ConfigOverrides) -> Result<()> {
    let (_, pipeline) = load(config_path, overrides)?;
    print!("{}", format_span(&pipeline));
    Ok(())
}

fn format_report(config: &DashboardConfig, model: &DisplayModel) -> String {
    let mut out = String::new();
    let view = &model.view;

    let _ = writeln!(out, "=== {} ===", config.display.title);
    let _ = writeln!(out, "{}", config.display.caption);
    let _ = writeln!(
        out,
        "Window:         {} to {} ({} records)",
        fmt_date(view.start_date),
        fmt_date(view.end_date),
        model.len()
    );
    for warning in model.warnings() {
        let _ = writeln!(out, "WARNING: {warning}");
    }

    let rounded = model.summary.map(|s| s.rounded());
    let _ = writeln!(out);
    let _ = writeln!(out, "--- Summary ---");
    let _ = writeln!(out, "Latest Price:   {}", dollars(rounded.map(|s| s.latest)));
    let _ = writeln!(out, "Highest Price:  {}", dollars(rounded.map(|s| s.highest)));
    let _ = writeln!(out, "Lowest Price:   {}", dollars(rounded.map(|s| s.lowest)));

    if model.moving_average.is_some() || model.risk.is_some() {
        let last = model.preview.last();
        let _ = writeln!(out);
        let _ = writeln!(out, "--- Latest Derived Values ---");
        if model.moving_average.is_some() {
            let _ = writeln!(
                out,
                "{:<16}{}",
                format!("MA{}:", model.moving_average_window),
                format_optional(last.and_then(|r| r.moving_average), 2)
            );
        }
        if model.risk.is_some() {
            let _ = writeln!(
                out,
                "Daily Return:   {}",
                format_optional(last.and_then(|r| r.daily_return), 4)
            );
            let _ = writeln!(
                out,
                "Volatility:     {}",
                format_optional(last.and_then(|r| r.volatility), 4)
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--- Recent Data ---");
    out.push_str(&format_table(&model.preview_columns(), &model.preview_cells()));
    out
}

fn format_span(pipeline: &TimeSeriesPipeline) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Dataset ===");
    for source in pipeline.sources() {
        let _ = writeln!(out, "{:<40} {:>8} rows", source.label, source.rows);
    }
    let _ = writeln!(out, "Merged:         {} rows", pipeline.len());
    let _ = writeln!(out, "Duplicate dates: {}", pipeline.duplicate_dates());
    let _ = writeln!(out, "Inconsistent:   {} rows", pipeline.inconsistent_records());
    match pipeline.span() {
        Some((first, last)) => {
            let _ = writeln!(out, "First date:     {}", fmt_date(first));
            let _ = writeln!(out, "Last date:      {}", fmt_date(last));
        }
        None => {
            let _ = writeln!(out, "First date:     {ABSENT}");
            let _ = writeln!(out, "Last date:      {ABSENT}");
        }
    }
    let _ = writeln!(out, "Fingerprint:    {}", pipeline.fingerprint());
    out
}

/// Left-aligned text table; an empty body prints a single note.
fn format_table(columns: &[String], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "(no rows in selected range)\n".to_string();
    }
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|s| s.chars().count())
                .chain(std::iter::once(c.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    let _ = writeln!(out, "{}", line(columns));
    for row in rows {
        let _ = writeln!(out, "{}", line(row.as_slice()));
    }
    out
}

fn dollars(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => ABSENT.to_string(),
    }
}

fn fmt_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
