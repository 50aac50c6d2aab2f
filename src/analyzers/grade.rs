use crate::analyzers::config::GradingPolicy;
use crate::analyzers::types::{Grade, GradedStudent, Student};
use crate::analyzers::utility::mean;
use crate::error::GradingError;

/// Mean of the four test scores.
pub fn final_score(student: &Student) -> f64 {
    mean(&student.scores)
}

impl GradingPolicy {
    /// Converts a final score into a letter grade.
    ///
    /// With the default policy:
    ///
    /// | Range            | Grade |
    /// |------------------|-------|
    /// | 70 ..= 100       | A     |
    /// | 50 .. 70         | B     |
    /// | 35 .. 50         | C     |
    /// | 0 .. 35          | F     |
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::OutOfDomain`] for scores outside
    /// `[min_score, max_score]`, including NaN.
    pub fn classify(&self, score: f64) -> Result<Grade, GradingError> {
        self.band_for(score)
            .ok_or_else(|| self.out_of_domain("record".into(), score))
    }

    fn band_for(&self, score: f64) -> Option<Grade> {
        if !(self.min_score..=self.max_score).contains(&score) {
            return None;
        }
        self.bands
            .iter()
            .find(|band| score >= band.min)
            .map(|band| band.grade)
    }

    fn out_of_domain(&self, student: String, score: f64) -> GradingError {
        GradingError::OutOfDomain {
            student,
            score,
            min: self.min_score,
            max: self.max_score,
        }
    }

    /// Grades a single student.
    pub fn grade_student(&self, student: &Student) -> Result<GradedStudent, GradingError> {
        let score = final_score(student);
        let grade = self
            .band_for(score)
            .ok_or_else(|| self.out_of_domain(student.full_name(), score))?;
        Ok(GradedStudent {
            student: student.clone(),
            final_score: score,
            grade,
        })
    }
}

/// Grades every student in input order, stopping at the first score the
/// policy cannot classify.
pub fn grade_students(
    policy: &GradingPolicy,
    students: &[Student],
) -> Result<Vec<GradedStudent>, GradingError> {
    students.iter().map(|s| policy.grade_student(s)).collect()
}

/// Grades every student in input order, setting aside the ones the policy
/// cannot classify.
pub fn grade_students_lenient(
    policy: &GradingPolicy,
    students: &[Student],
) -> (Vec<GradedStudent>, Vec<GradingError>) {
    let mut graded = Vec::with_capacity(students.len());
    let mut rejected = Vec::new();

    for student in students {
        match policy.grade_student(student) {
            Ok(g) => graded.push(g),
            Err(e) => rejected.push(e),
        }
    }

    (graded, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    fn student(name: &str, scores: [i32; 4]) -> Student {
        Student {
            first_name: name.into(),
            last_name: "Test".into(),
            university: "X Univ".into(),
            scores,
        }
    }

    #[test]
    fn test_grade_boundaries() {
        let policy = GradingPolicy::default();
        assert_eq!(policy.classify(100.0).unwrap(), Grade::A);
        assert_eq!(policy.classify(70.0).unwrap(), Grade::A);
        assert_eq!(policy.classify(69.75).unwrap(), Grade::B);
        assert_eq!(policy.classify(50.0).unwrap(), Grade::B);
        assert_eq!(policy.classify(49.75).unwrap(), Grade::C);
        assert_eq!(policy.classify(35.0).unwrap(), Grade::C);
        assert_eq!(policy.classify(34.75).unwrap(), Grade::F);
        assert_eq!(policy.classify(0.0).unwrap(), Grade::F);
    }

    #[test]
    fn test_out_of_domain() {
        let policy = GradingPolicy::default();
        for score in [-0.25, 100.25, f64::NAN, f64::INFINITY] {
            let err = policy.classify(score).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ClassificationDomainViolation);
        }
    }

    #[test]
    fn test_mean_and_grade() {
        let graded = GradingPolicy::default()
            .grade_student(&student("Ann", [50, 60, 65, 45]))
            .unwrap();
        assert_eq!(graded.final_score, 55.0);
        assert_eq!(graded.grade, Grade::B);
    }

    #[test]
    fn test_grade_students_preserves_order() {
        let students = vec![
            student("Ann", [90, 80, 70, 60]),
            student("Bo", [40, 30, 20, 10]),
            student("Cy", [55, 55, 55, 55]),
        ];
        let graded = grade_students(&GradingPolicy::default(), &students).unwrap();

        let summary: Vec<_> = graded
            .iter()
            .map(|g| (g.student.first_name.as_str(), g.final_score, g.grade))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Ann", 75.0, Grade::A),
                ("Bo", 25.0, Grade::F),
                ("Cy", 55.0, Grade::B)
            ]
        );
    }

    #[test]
    fn test_grading_is_idempotent() {
        let policy = GradingPolicy::default();
        let students = vec![student("Ann", [91, 13, 77, 40]), student("Bo", [1, 2, 3, 4])];
        assert_eq!(
            grade_students(&policy, &students).unwrap(),
            grade_students(&policy, &students).unwrap()
        );
    }

    #[test]
    fn test_grade_students_fails_on_out_of_range_scores() {
        let students = vec![student("Ann", [90, 80, 70, 60]), student("Dee", [150, 150, 150, 150])];
        let err = grade_students(&GradingPolicy::default(), &students).unwrap_err();
        assert!(err.to_string().contains("Dee Test"));
        assert!(err.to_string().contains("150"));
    }

    #[test]
    fn test_grade_students_lenient_keeps_valid_rows() {
        let students = vec![
            student("Neg", [-10, -10, -10, -10]),
            student("Ann", [90, 80, 70, 60]),
        ];
        let (graded, rejected) = grade_students_lenient(&GradingPolicy::default(), &students);
        assert_eq!(graded.len(), 1);
        assert_eq!(graded[0].student.first_name, "Ann");
        assert_eq!(rejected.len(), 1);
    }

    proptest! {
        #[test]
        fn every_score_in_domain_gets_a_grade(score in 0.0f64..=100.0) {
            let grade = GradingPolicy::default().classify(score).unwrap();
            let expected = if score < 35.0 {
                Grade::F
            } else if score < 50.0 {
                Grade::C
            } else if score < 70.0 {
                Grade::B
            } else {
                Grade::A
            };
            prop_assert_eq!(grade, expected);
        }

        #[test]
        fn in_range_scores_always_grade(scores in proptest::array::uniform4(0i32..=100)) {
            let graded = GradingPolicy::default().grade_student(&student("P", scores));
            prop_assert!(graded.is_ok());
        }
    }
}
