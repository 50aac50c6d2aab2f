//! Error types shared by ingestion, grading and policy loading.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Broad category of a [`GradingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input file is missing, unreadable or has a bad row.
    MalformedInput,
    /// A computed final score fell outside the grading domain.
    ClassificationDomainViolation,
    /// A grading policy file could not be loaded or is inconsistent.
    InvalidPolicy,
}

#[derive(Debug, thiserror::Error)]
pub enum GradingError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input has no header row")]
    MissingHeader,

    #[error("failed to read header row")]
    Header(#[source] csv::Error),

    #[error("failed to read record")]
    Read(#[source] csv::Error),

    #[error("line {line}: expected at least 7 fields, found {found}")]
    InsufficientFields { line: u64, found: usize },

    #[error("line {line}: invalid score in {field} ({value:?})")]
    InvalidScore {
        line: u64,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{student} has final score {score}, outside the grading domain [{min}, {max}]")]
    OutOfDomain {
        student: String,
        score: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid grading policy: {0}")]
    InvalidPolicy(String),
}

impl GradingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GradingError::OutOfDomain { .. } => ErrorKind::ClassificationDomainViolation,
            GradingError::InvalidPolicy(_) => ErrorKind::InvalidPolicy,
            _ => ErrorKind::MalformedInput,
        }
    }

    /// `true` for errors that only affect a single data row.
    ///
    /// Lenient ingestion collects these and keeps going; everything else
    /// still aborts the run. An I/O failure while reading a record is a
    /// file-level failure, not a row error.
    pub fn is_row_error(&self) -> bool {
        match self {
            GradingError::Read(e) => !matches!(e.kind(), csv::ErrorKind::Io(_)),
            _ => matches!(
                self,
                GradingError::InsufficientFields { .. }
                    | GradingError::InvalidScore { .. }
                    | GradingError::OutOfDomain { .. }
            ),
        }
    }
}
