//! Rendering and persistence for grading reports.
//!
//! Supports a plain-text summary, pretty JSON, and a debug log dump.

use anyhow::Result;
use tracing::debug;

use crate::analyzers::types::{GradedStudent, Report};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Logs a report using Rust's debug pretty-print format.
pub fn log_report(report: &Report) {
    debug!("{:#?}", report);
}

fn describe(student: &GradedStudent) -> String {
    format!(
        "{} ({}) final score {:.2}, grade {}",
        student.student.full_name(),
        student.student.university,
        student.final_score,
        student.grade
    )
}

/// Writes a human-readable summary of `report`.
pub fn write_summary<W: Write>(mut out: W, report: &Report) -> Result<()> {
    match &report.overall_topper {
        Some(topper) => writeln!(out, "Overall topper: {}", describe(topper))?,
        None => writeln!(out, "Overall topper: none (no students graded)")?,
    }

    if !report.toppers_by_university.is_empty() {
        writeln!(out, "Toppers by university:")?;
        for (university, topper) in &report.toppers_by_university {
            writeln!(
                out,
                "  {}: {} final score {:.2}, grade {}",
                university,
                topper.student.full_name(),
                topper.final_score,
                topper.grade
            )?;
        }
    }

    if !report.rejected.is_empty() {
        writeln!(out, "Rejected rows ({}):", report.rejected.len())?;
        for reason in &report.rejected {
            writeln!(out, "  {reason}")?;
        }
    }

    Ok(())
}

/// Writes `report` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut out: W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Saves `report` as JSON at `path`, replacing any existing file.
pub fn save_report(path: impl AsRef<Path>, report: &Report) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Saving JSON report");

    let mut writer = BufWriter::new(File::create(path)?);
    write_json(&mut writer, report)?;
    writer.flush()?;

    Ok(())
}
