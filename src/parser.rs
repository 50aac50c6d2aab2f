//! CSV ingestion for student score files.
//!
//! The first row is a header and is skipped without inspection. Every data
//! row must carry at least seven fields: first name, last name, university
//! and four integer test scores. Extra trailing fields are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::analyzers::types::Student;
use crate::error::GradingError;

const SCORE_FIELDS: [&str; 4] = ["test1", "test2", "test3", "test4"];
const MIN_FIELDS: usize = 7;

/// Outcome of lenient ingestion: the rows that parsed, in input order, and
/// one error per rejected row.
#[derive(Debug, Default)]
pub struct Ingested {
    pub students: Vec<Student>,
    pub rejected: Vec<GradingError>,
}

/// Reads every student from the CSV file at `path`.
///
/// # Errors
///
/// Fails on the first problem: the file cannot be opened, the header is
/// missing, a row is short or a score is not an integer. No partial result
/// is returned.
pub fn read_students(path: impl AsRef<Path>) -> Result<Vec<Student>, GradingError> {
    read_students_from(open(path.as_ref())?)
}

/// Same as [`read_students`], over any reader.
pub fn read_students_from<R: Read>(reader: R) -> Result<Vec<Student>, GradingError> {
    let mut students = Vec::new();
    for_each_row(reader, |row| {
        students.push(row?);
        Ok(())
    })?;
    debug!(count = students.len(), "Parsed student records");
    Ok(students)
}

/// Reads students from the CSV file at `path`, skipping bad rows.
///
/// Opening the file and reading the header are still fatal.
pub fn read_students_lenient(path: impl AsRef<Path>) -> Result<Ingested, GradingError> {
    read_students_lenient_from(open(path.as_ref())?)
}

/// Same as [`read_students_lenient`], over any reader.
pub fn read_students_lenient_from<R: Read>(reader: R) -> Result<Ingested, GradingError> {
    let mut ingested = Ingested::default();
    for_each_row(reader, |row| {
        match row {
            Ok(student) => ingested.students.push(student),
            Err(e) if e.is_row_error() => {
                warn!(error = %e, "Skipping malformed row");
                ingested.rejected.push(e);
            }
            Err(e) => return Err(e),
        }
        Ok(())
    })?;
    debug!(
        count = ingested.students.len(),
        rejected = ingested.rejected.len(),
        "Parsed student records"
    );
    Ok(ingested)
}

fn open(path: &Path) -> Result<File, GradingError> {
    debug!(path = %path.display(), "Opening student file");
    File::open(path).map_err(|source| GradingError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Drives the CSV reader, handing each parsed data row to `f`.
///
/// The reader (and the file it wraps) is dropped when this returns, on
/// success and error alike.
fn for_each_row<R, F>(reader: R, mut f: F) -> Result<(), GradingError>
where
    R: Read,
    F: FnMut(Result<Student, GradingError>) -> Result<(), GradingError>,
{
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut record = StringRecord::new();
    if !rdr.read_record(&mut record).map_err(GradingError::Header)? {
        return Err(GradingError::MissingHeader);
    }

    loop {
        match rdr.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => f(parse_student(&record))?,
            Err(e) => f(Err(GradingError::Read(e)))?,
        }
    }

    Ok(())
}

/// Converts one CSV row into a [`Student`].
pub fn parse_student(record: &StringRecord) -> Result<Student, GradingError> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();

    if record.len() < MIN_FIELDS {
        return Err(GradingError::InsufficientFields {
            line,
            found: record.len(),
        });
    }

    let mut scores = [0i32; 4];
    for (i, &field) in SCORE_FIELDS.iter().enumerate() {
        let value = &record[3 + i];
        scores[i] = value
            .parse()
            .map_err(|source| GradingError::InvalidScore {
                line,
                field,
                value: value.to_string(),
                source,
            })?;
    }

    Ok(Student {
        first_name: record[0].to_string(),
        last_name: record[1].to_string(),
        university: record[2].to_string(),
        scores,
    })
}
