//! Contact-tracing CLI: load the population and meeting log, propagate
//! infection risk, write the tiered recommendation report.
//!
//! # Responsibility
//! - Wire the file collaborators around `spreadtrace_core`.
//! - Map pipeline failures to distinct exit codes.

use clap::{Parser, ValueEnum};
use log::info;
use spreadtrace_cli::loader;
use spreadtrace_cli::report_writer::{self, ReportFormat};
use spreadtrace_core::{
    build_recommendations, core_version, default_log_level, init_logging, ContactGraph,
    PropagationEngine, SortKey, TraceConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_LOAD_ERROR: u8 = 3;
const EXIT_CONFIG_ERROR: u8 = 4;
const EXIT_REPORT_ERROR: u8 = 5;

#[derive(Parser)]
#[command(name = "spreadtrace")]
#[command(about = "Propagate infection risk through a meeting log and emit tiered recommendations")]
#[command(version)]
struct Cli {
    /// Population file: one `name id age status` record per line
    people_file: PathBuf,

    /// Meeting log: one `id1 id2 distance duration` record per line
    meetings_file: PathBuf,

    /// Output report path
    output_file: PathBuf,

    /// TOML file overriding risk parameters and tier thresholds
    #[arg(long)]
    params: Option<PathBuf>,

    /// Report encoding
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Row order; input order when omitted
    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Enable file logging into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level for `--log-dir`
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Id,
    Name,
    Age,
    Risk,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Id => SortKey::Id,
            SortArg::Name => SortKey::Name,
            SortArg::Age => SortKey::Age,
            SortArg::Risk => SortKey::Risk,
        }
    }
}

struct Failure {
    code: u8,
    message: String,
}

fn fail(code: u8, message: impl Into<String>) -> Failure {
    Failure {
        code,
        message: message.into(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("spreadtrace: {}", failure.message);
            ExitCode::from(failure.code)
        }
    }
}

fn run(cli: Cli) -> Result<(), Failure> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &log_dir.to_string_lossy())
            .map_err(|err| fail(EXIT_CONFIG_ERROR, err.to_string()))?;
    }
    info!("event=trace_start core={}", core_version());

    let config = match &cli.params {
        Some(path) => loader::load_params(path)
            .map_err(|err| fail(EXIT_CONFIG_ERROR, format!("{}: {err}", path.display())))?,
        None => TraceConfig::default(),
    };

    let mut graph = ContactGraph::new();
    loader::load_people(&mut graph, &cli.people_file).map_err(|err| {
        fail(
            EXIT_LOAD_ERROR,
            format!("{}: {err}", cli.people_file.display()),
        )
    })?;
    loader::load_meetings(&mut graph, &cli.meetings_file).map_err(|err| {
        fail(
            EXIT_LOAD_ERROR,
            format!("{}: {err}", cli.meetings_file.display()),
        )
    })?;

    let stats = PropagationEngine::new(config.risk).propagate(&mut graph);
    info!(
        "event=trace_propagated seed={:?} edges={} truncated={}",
        stats.seed, stats.edges_traversed, stats.depth_truncated
    );

    let rows = build_recommendations(&graph, &config.tiers, cli.sort.map(SortKey::from));
    report_writer::write_report(&rows, cli.format.into(), &cli.output_file).map_err(|err| {
        fail(
            EXIT_REPORT_ERROR,
            format!("{}: {err}", cli.output_file.display()),
        )
    })?;

    Ok(())
}
