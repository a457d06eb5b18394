use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TimetableError};

use super::filter::filter_courses;
use super::model::FilterCriteria;

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Read a timetable file and return the rows matching `criteria`.
///
/// Every line is an opaque record; only the department prefix and year digit
/// are inspected. Fails if the file is missing, unreadable, or not UTF-8.
pub fn load_courses(path: &Path, criteria: &FilterCriteria) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| TimetableError::read(path, e))?;
    let courses = filter_courses(text.lines(), criteria);
    log::debug!(
        "{} of {} lines in {} matched {}{}",
        courses.len(),
        text.lines().count(),
        path.display(),
        criteria.prefix(),
        criteria.year
    );
    Ok(courses)
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write `rows` to `path`, one per line, replacing any existing file.
pub fn save_courses<S: AsRef<str>>(path: &Path, rows: &[S]) -> Result<()> {
    let write = || -> std::io::Result<()> {
        let mut out = BufWriter::new(fs::File::create(path)?);
        for row in rows {
            writeln!(out, "{}", row.as_ref())?;
        }
        out.flush()
    };
    write().map_err(|e| TimetableError::write(path, e))
}
