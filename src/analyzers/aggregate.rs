use crate::analyzers::types::GradedStudent;
use std::collections::BTreeMap;

/// Returns the student with the highest final score.
///
/// Ties go to the earliest student in input order. `None` means there was
/// nobody to rank; it is not an error.
pub fn overall_topper(students: &[GradedStudent]) -> Option<&GradedStudent> {
    let (first, rest) = students.split_first()?;

    let mut topper = first;
    for student in rest {
        if student.final_score > topper.final_score {
            topper = student;
        }
    }

    Some(topper)
}

/// Returns the highest scoring student of each university.
///
/// Single pass: the first student seen for a university holds the spot and
/// is only replaced by a strictly higher final score.
pub fn toppers_by_university(students: &[GradedStudent]) -> BTreeMap<String, GradedStudent> {
    let mut toppers: BTreeMap<String, GradedStudent> = BTreeMap::new();

    for student in students {
        match toppers.get_mut(&student.student.university) {
            Some(existing) => {
                if student.final_score > existing.final_score {
                    *existing = student.clone();
                }
            }
            None => {
                toppers.insert(student.student.university.clone(), student.clone());
            }
        }
    }

    toppers
}
