//! CLI entry point for the route fares tool.
//!
//! Loads a ticket document, keeps the tickets flying one route in either
//! direction, and prints the shortest flight per carrier together with the
//! gap between the mean and median price.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use route_fares::{
    analyzers::analyzer::analyze, config::RouteConfig, output, parser::load_tickets,
};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "route_fares")]
#[command(about = "Flight duration and price statistics for a single route", long_about = None)]
struct Cli {
    /// Ticket document to read
    #[arg(short, long, value_name = "FILE", default_value = "tickets.json")]
    input: PathBuf,

    /// JSON config file with a `route` entry
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Origin airport code (overrides the config file)
    #[arg(long)]
    origin: Option<String>,

    /// Destination airport code (overrides the config file)
    #[arg(long)]
    destination: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/route_fares.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("route_fares.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    run(cli, &mut std::io::stdout().lock())
}

/// Loads, analyzes and reports one route, writing the report to `out`.
///
/// A ticket load failure writes one diagnostic line and returns
/// [`ExitCode::FAILURE`]; other failures propagate as errors.
fn run(cli: Cli, out: &mut impl Write) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => RouteConfig::load(path)?,
        None => RouteConfig::default(),
    }
    .with_overrides(cli.origin, cli.destination);

    info!(input = %cli.input.display(), route = %config.route, "Starting run");

    let list = match load_tickets(&cli.input) {
        Ok(list) => list,
        Err(e) => {
            error!(error = %e, "Failed to load tickets");
            writeln!(out, "Failed to read tickets: {e}")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = analyze(&list, &config.route);

    match cli.format {
        Format::Text => write!(out, "{}", output::render_text(&report))?,
        Format::Json => writeln!(out, "{}", output::render_json(&report)?)?,
    }

    Ok(ExitCode::SUCCESS)
}
