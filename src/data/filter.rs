use super::model::{FilterCriteria, YearRule};

// ---------------------------------------------------------------------------
// Row predicate: department prefix + year digit
// ---------------------------------------------------------------------------

/// Whether a raw timetable line belongs to the chosen department and year.
///
/// * [`YearRule::FixedOffset`] – the line must start with `"<department> "`
///   and the character three places before the end of the first
///   comma-separated field must be the year digit.
/// * [`YearRule::CourseNumber`] – the first CSV field (quotes honoured) must
///   start with `"<department> "` and the course number after it must begin
///   with the year digit.
pub fn matches(line: &str, criteria: &FilterCriteria) -> bool {
    let prefix = criteria.prefix();
    let digit = match criteria.rule {
        YearRule::FixedOffset => {
            if !line.starts_with(&prefix) {
                return false;
            }
            let code = line.split(',').next().unwrap_or_default();
            code.chars().rev().nth(2)
        }
        YearRule::CourseNumber => first_field(line).and_then(|code| {
            code.strip_prefix(&prefix)
                .and_then(|number| number.trim_start().chars().next())
        }),
    };
    digit == Some(criteria.year.digit())
}

/// Keep the rows passing [`matches`], trimmed, in their original order.
pub fn filter_courses<'a, I>(lines: I, criteria: &FilterCriteria) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| matches(line, criteria))
        .map(|line| line.trim().to_string())
        .collect()
}

/// First field of a single CSV line, or `None` if it cannot be parsed.
fn first_field(line: &str) -> Option<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let mut record = csv::StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => record.get(0).map(str::to_string),
        Ok(false) => None,
        Err(e) => {
            log::debug!("Skipping unparseable line {line:?}: {e}");
            None
        }
    }
}
