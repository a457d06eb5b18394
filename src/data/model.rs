use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Year – course level chosen in the form
// ---------------------------------------------------------------------------

/// Course level, restricted to `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u8);

impl Year {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns `None` when `value` is outside `1..=5`.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Year(value))
    }

    /// Every selectable year, in ascending order.
    pub fn all() -> impl Iterator<Item = Year> {
        (Self::MIN..=Self::MAX).map(Year)
    }

    /// The digit this year is written as inside a course code.
    pub fn digit(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// YearRule – where the year digit lives in a row
// ---------------------------------------------------------------------------

/// Strategy for locating the year digit inside the first field of a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YearRule {
    /// First character of the course number following `"<department> "`.
    #[default]
    CourseNumber,
    /// Character three positions before the end of the first field.
    /// Only correct for three-digit course numbers with no suffix.
    FixedOffset,
}

// ---------------------------------------------------------------------------
// FilterCriteria – everything the filter needs
// ---------------------------------------------------------------------------

/// Department + year chosen in the form, plus the rule used to read years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub department: String,
    pub year: Year,
    pub rule: YearRule,
}

impl FilterCriteria {
    pub fn new(department: impl Into<String>, year: Year, rule: YearRule) -> Self {
        Self {
            department: department.into(),
            year,
            rule,
        }
    }

    /// The `"<department> "` prefix a matching row starts with.
    pub fn prefix(&self) -> String {
        format!("{} ", self.department)
    }
}

/// Departments offered in the form unless the config overrides them.
pub const DEFAULT_DEPARTMENTS: &[&str] = &[
    "CHI", "CS", "ECE", "ECON", "EE", "EECS", "ENGR", "FRE", "GER", "IE", "ISE", "LIFE", "MATH",
    "MGT", "UNI",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_rejects_out_of_range() {
        assert!(Year::new(0).is_none());
        assert!(Year::new(6).is_none());
        assert_eq!(Year::new(3).map(Year::digit), Some('3'));
    }

    #[test]
    fn all_years_are_one_to_five() {
        let labels: Vec<String> = Year::all().map(|y| y.to_string()).collect();
        assert_eq!(labels, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn prefix_ends_with_space() {
        let year = Year::new(2).unwrap();
        let criteria = FilterCriteria::new("EE", year, YearRule::CourseNumber);
        assert_eq!(criteria.prefix(), "EE ");
    }
}
