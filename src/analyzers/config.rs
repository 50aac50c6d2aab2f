use crate::analyzers::types::Grade;
use crate::error::GradingError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entry of a grading policy: scores at or above `min` earn `grade`
/// unless a higher band matches first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    pub min: f64,
    pub grade: Grade,
}

/// Maps final scores onto letter grades.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "min_score": 0.0,
///   "max_score": 100.0,
///   "bands": [
///     { "min": 70.0, "grade": "A" },
///     { "min": 50.0, "grade": "B" },
///     { "min": 35.0, "grade": "C" },
///     { "min": 0.0,  "grade": "F" }
///   ]
/// }
/// ```
///
/// Bands are listed from the highest lower bound to the lowest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingPolicy {
    pub min_score: f64,
    pub max_score: f64,
    pub bands: Vec<GradeBand>,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            min_score: 0.0,
            max_score: 100.0,
            bands: vec![
                GradeBand { min: 70.0, grade: Grade::A },
                GradeBand { min: 50.0, grade: Grade::B },
                GradeBand { min: 35.0, grade: Grade::C },
                GradeBand { min: 0.0, grade: Grade::F },
            ],
        }
    }
}

impl GradingPolicy {
    /// Loads and validates a policy from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GradingError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GradingError::InvalidPolicy(format!("cannot read {}: {e}", path.display()))
        })?;
        let policy: GradingPolicy = serde_json::from_str(&content).map_err(|e| {
            GradingError::InvalidPolicy(format!("cannot parse {}: {e}", path.display()))
        })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Checks that the bands cover the whole domain without overlapping.
    pub fn validate(&self) -> Result<(), GradingError> {
        let invalid = |msg: String| Err(GradingError::InvalidPolicy(msg));

        if !(self.min_score.is_finite() && self.max_score.is_finite())
            || self.min_score > self.max_score
        {
            return invalid(format!(
                "domain [{}, {}] is not a valid range",
                self.min_score, self.max_score
            ));
        }

        let Some(lowest) = self.bands.last() else {
            return invalid("no grade bands defined".into());
        };

        for pair in self.bands.windows(2) {
            if pair[0].min.is_nan() || pair[1].min.is_nan() || pair[0].min <= pair[1].min {
                return invalid(format!(
                    "bands must be strictly descending, found {} before {}",
                    pair[0].min, pair[1].min
                ));
            }
        }

        if let Some(band) = self.bands.iter().find(|b| b.min > self.max_score) {
            return invalid(format!(
                "band {} starts at {}, above the maximum score {}",
                band.grade, band.min, self.max_score
            ));
        }

        if lowest.min.is_nan() || lowest.min > self.min_score {
            return invalid(format!(
                "lowest band starts at {}, leaving scores from {} ungraded",
                lowest.min, self.min_score
            ));
        }

        Ok(())
    }
}
