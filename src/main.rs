//! CLI entry point for the mailroom package statistics tool.
//!
//! Reads the 2023-24 and 2024-25 package-log exports, prints per-year
//! monthly, weekly and daily counts, and writes the count tables plus the
//! merged daily and carrier breakdowns as CSV.

use anyhow::{Context, Result};
use clap::Parser;
use mailroom_stats::config::{DEFAULT_CLEAN_DIR, DEFAULT_DATA_DIR, PipelineConfig};
use mailroom_stats::output::print_json;
use mailroom_stats::pipeline;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "mailroom_stats")]
#[command(about = "Summarize mailroom package volumes by month, week, day and carrier", long_about = None)]
struct Cli {
    /// Directory holding packages_2324.csv / packages_2425.csv; per-year count tables are written here
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Directory the merged day-indexed tables are written to
    #[arg(long, default_value = DEFAULT_CLEAN_DIR)]
    clean_dir: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    let _file_guard = init_logging()?;

    let cli = Cli::parse();
    let config = PipelineConfig::new(cli.data_dir, cli.clean_dir);
    info!(?config, "Starting mailroom pipeline");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = pipeline::run(&config, &mut out).context("Mailroom pipeline failed")?;

    print_json(&summary)?;
    Ok(())
}

/// Colored stderr logs filtered by `RUST_LOG`, plus a daily-rolling JSON log
/// at `LOG_FILE_PATH` filtered by `RUST_LOG_JSON`.
///
/// The returned guard flushes the file writer when dropped.
fn init_logging() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/mailroom_stats.log".to_string());
    let log_path = Path::new(&log_file_path);
    let log_dir = log_path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = log_path
        .file_name()
        .unwrap_or(OsStr::new("mailroom_stats.log"));

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, log_file_name));

    let console = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_file = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(file_writer)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(console)
        .with(json_file)
        .init();
    Ok(guard)
}
