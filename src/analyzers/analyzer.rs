use crate::analyzers::aggregate::{overall_topper, toppers_by_university};
use crate::analyzers::config::GradingPolicy;
use crate::analyzers::grade::{grade_students, grade_students_lenient};
use crate::analyzers::types::{GradedStudent, Report, Student};
use crate::error::GradingError;
use crate::parser::{read_students, read_students_lenient};
use std::path::Path;
use tracing::{info, warn};

/// How bad rows are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IngestMode {
    /// Abort the whole run on the first malformed row or ungradable score.
    #[default]
    FailFast,
    /// Skip bad rows and list them in [`Report::rejected`].
    CollectErrors,
}

/// Reads, grades and ranks the students in the CSV file at `path`.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display(), mode = ?mode))]
pub fn analyze(
    path: impl AsRef<Path>,
    policy: &GradingPolicy,
    mode: IngestMode,
) -> Result<Report, GradingError> {
    let (graded, rejected) = match mode {
        IngestMode::FailFast => {
            let students = read_students(path)?;
            (grade_students(policy, &students)?, Vec::new())
        }
        IngestMode::CollectErrors => {
            let ingested = read_students_lenient(path)?;
            let (graded, grade_errors) = grade_students_lenient(policy, &ingested.students);
            let rejected: Vec<_> = ingested
                .rejected
                .into_iter()
                .chain(grade_errors)
                .map(|e| e.to_string())
                .collect();
            (graded, rejected)
        }
    };

    if !rejected.is_empty() {
        warn!(rejected = rejected.len(), "Some rows were not graded");
    }

    Ok(build_report(graded, rejected))
}

/// Grades already-parsed students and ranks them, failing on the first
/// ungradable score.
pub fn analyze_students(
    students: &[Student],
    policy: &GradingPolicy,
) -> Result<Report, GradingError> {
    let graded = grade_students(policy, students)?;
    Ok(build_report(graded, Vec::new()))
}

fn build_report(graded: Vec<GradedStudent>, rejected: Vec<String>) -> Report {
    let overall = overall_topper(&graded).cloned();
    let toppers = toppers_by_university(&graded);

    info!(
        students = graded.len(),
        universities = toppers.len(),
        "Grading complete"
    );

    Report {
        generated_at: chrono::Utc::now(),
        students_graded: graded.len(),
        overall_topper: overall,
        toppers_by_university: toppers,
        rejected,
    }
}
