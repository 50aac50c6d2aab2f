//! Data types used by the grading pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One parsed input row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub university: String,
    pub scores: [i32; 4],
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Letter grade derived from a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F",
        };
        f.write_str(s)
    }
}

/// A [`Student`] with its final score and grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedStudent {
    #[serde(flatten)]
    pub student: Student,
    pub final_score: f64,
    pub grade: Grade,
}

/// Complete result of one run, rendered by [`crate::output`].
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub students_graded: usize,
    /// `None` when there were no graded students at all.
    pub overall_topper: Option<GradedStudent>,
    pub toppers_by_university: BTreeMap<String, GradedStudent>,
    /// Diagnostics for rows skipped in lenient mode.
    pub rejected: Vec<String>,
}
