//! CLI entry point for the student toppers tool.
//!
//! Grades a CSV of student test scores and reports the overall topper and
//! the topper of each university.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use student_toppers::{
    GradingPolicy, IngestMode, analyze,
    output::{log_report, save_report, write_json, write_summary},
};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "student_toppers")]
#[command(about = "Grade student test scores and find the toppers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a CSV file and print the overall and per-university toppers
    Rank {
        /// CSV file with a header row, then first name, last name,
        /// university and four test scores per row
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// JSON grading policy to use instead of the built-in one
        #[arg(short, long)]
        policy: Option<PathBuf>,

        /// Output format for stdout
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Also save the report as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip malformed rows and list them instead of aborting
        #[arg(long, default_value_t = false)]
        collect_errors: bool,
    },
    /// Print the built-in grading policy as JSON
    Policy,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/student_toppers.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("student_toppers.log"));

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

    match cli.command {
        Commands::Rank {
            input,
            policy,
            format,
            output,
            collect_errors,
        } => {
            // The returned error is the run's only diagnostic.
            rank(&input, policy.as_deref(), format, output.as_deref(), collect_errors)?;
        }
        Commands::Policy => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &GradingPolicy::default())?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

/// Runs the grading pipeline on `input` and renders the report.
fn rank(
    input: &Path,
    policy_path: Option<&Path>,
    format: Format,
    output: Option<&Path>,
    collect_errors: bool,
) -> Result<()> {
    let policy = match policy_path {
        Some(path) => {
            info!(policy = %path.display(), "Loading grading policy");
            GradingPolicy::load(path)?
        }
        None => GradingPolicy::default(),
    };

    let mode = if collect_errors {
        IngestMode::CollectErrors
    } else {
        IngestMode::FailFast
    };

    let report = analyze(input, &policy, mode)
        .with_context(|| format!("failed to grade {}", input.display()))?;
    log_report(&report);

    let stdout = std::io::stdout().lock();
    match format {
        Format::Text => write_summary(stdout, &report)?,
        Format::Json => write_json(stdout, &report)?,
    }

    if let Some(path) = output {
        save_report(path, &report)
            .with_context(|| format!("failed to save report to {}", path.display()))?;
        info!(path = %path.display(), "Report saved");
    }

    Ok(())
}
