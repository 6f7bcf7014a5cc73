//! StockLens dashboard binary.
//!
//! Loads both CSV sources before touching the terminal, so load errors print
//! normally and exit non-zero. Diagnostics are only written when `--log-file`
//! is given; stderr would draw over the dashboard.

use std::fs::File;
use std::io::{self, stdout};
use std::sync::Mutex;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use stocklens_core::config::parse_flag_date;
use stocklens_core::{profiling, ConfigOverrides, DashboardConfig, TimeSeriesPipeline};
use stocklens_tui::{input, ui, AppState};

#[derive(Parser)]
#[command(name = "stocklens-tui", about = "StockLens terminal dashboard")]
struct Cli {
    /// Dashboard TOML file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Training CSV (overrides the config file).
    #[arg(long)]
    training: Option<PathBuf>,

    /// Testing CSV (overrides the config file).
    #[arg(long)]
    testing: Option<PathBuf>,

    /// Initial start date (YYYY-MM-DD). Defaults to the first record.
    #[arg(long)]
    start: Option<String>,

    /// Initial end date (YYYY-MM-DD). Defaults to the last record.
    #[arg(long)]
    end: Option<String>,

    /// Start with the moving-average overlay hidden.
    #[arg(long, default_value_t = false)]
    no_ma: bool,

    /// Start with the risk panels hidden.
    #[arg(long, default_value_t = false)]
    no_risk: bool,

    /// Append diagnostics to this file (level from `RUST_LOG`, default info).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    let mut app = build_app(cli)?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    profiling::init();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    tracing::info!(path = %path.display(), "dashboard logging started");
    Ok(())
}

fn build_app(cli: Cli) -> Result<AppState> {
    let mut config = DashboardConfig::load_or_default(cli.config.as_deref())
        .context("failed to load dashboard config")?;
    config.apply(&ConfigOverrides {
        training: cli.training,
        testing: cli.testing,
        start_date: cli.start.as_deref().map(parse_flag_date).transpose()?,
        end_date: cli.end.as_deref().map(parse_flag_date).transpose()?,
        hide_moving_average: cli.no_ma,
        hide_risk_analysis: cli.no_risk,
    });

    let pipeline = TimeSeriesPipeline::load(&config.sources)
        .context("failed to load price data")?
        .with_metrics(config.metrics)?;
    let view = config.view.resolve(pipeline.span());

    Ok(AppState::new(pipeline, config.display, view))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Redraw on resize too; nothing else changes without input.
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
