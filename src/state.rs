use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::data::loader::{load_courses, save_courses};
use crate::data::model::{FilterCriteria, Year};

const SUMMARY_HEADER: &str = "Selected Courses:";

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One-line message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// The full form state, independent of rendering.
pub struct FormState {
    /// Timetable file path, typed or picked.
    pub file_path: String,

    pub year: Option<Year>,

    pub department: Option<String>,

    /// Rows currently listed, verbatim from the file.
    pub courses: Vec<String>,

    /// Indices into `courses` that are highlighted.
    pub selected: BTreeSet<usize>,

    /// Read-only text describing the selection.
    pub summary: String,

    /// Status / error message shown in the UI.
    pub status: Option<StatusMessage>,

    pub config: AppConfig,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl FormState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            file_path: String::new(),
            year: None,
            department: None,
            courses: Vec::new(),
            selected: BTreeSet::new(),
            summary: SUMMARY_HEADER.to_string(),
            status: None,
            config,
        }
    }

    /// Store a path returned by the file chooser.
    pub fn set_file_path(&mut self, path: &Path) {
        self.file_path = path.display().to_string();
    }

    /// Filter the chosen file by department and year and list the matches.
    pub fn display(&mut self) {
        if self.file_path.trim().is_empty() {
            self.set_status(Severity::Warning, "Please choose a CSV file.");
            return;
        }
        self.status = None;

        let (Some(department), Some(year)) = (self.department.clone(), self.year) else {
            self.set_status(Severity::Warning, "Please select a year and a department.");
            return;
        };

        let criteria = FilterCriteria::new(department, year, self.config.year_rule);
        let path = PathBuf::from(self.file_path.trim());
        match load_courses(&path, &criteria) {
            Ok(courses) if courses.is_empty() => {
                log::info!("No {}{} rows in {}", criteria.prefix(), year, path.display());
                self.set_status(
                    Severity::Warning,
                    "There is no course that suits your requirements.",
                );
            }
            Ok(courses) => {
                log::info!("Listing {} courses from {}", courses.len(), path.display());
                self.courses = courses;
                self.reset_selection();
            }
            Err(e) => {
                log::error!("Failed to read timetable: {e}");
                self.set_status(Severity::Error, format!("Error reading CSV file: {e}"));
            }
        }
    }

    /// Empty the course list and the selection summary.
    pub fn clear(&mut self) {
        self.courses.clear();
        self.reset_selection();
        self.set_status(Severity::Info, "Timetable cleared.");
    }

    /// Write the selected rows to the output file, then empty the list.
    pub fn save(&mut self) {
        let count = self.selected.len();
        if count == 0 {
            log::warn!("Save requested with nothing selected");
            self.set_status(
                Severity::Warning,
                "No courses selected. Add courses before saving.",
            );
            return;
        }
        let max = self.config.max_selection;
        if count > max {
            log::warn!("Save requested with {count} courses selected (max {max})");
            self.set_status(Severity::Warning, format!("Select at most {max} courses."));
            return;
        }
        self.status = None;

        let rows: Vec<String> = self.selected_rows().into_iter().map(String::from).collect();
        let output = self.config.output_file.clone();
        match save_courses(&output, &rows) {
            Ok(()) => {
                log::info!("Saved {} courses to {}", rows.len(), output.display());
                self.set_status(
                    Severity::Info,
                    format!("Timetable saved to '{}'.", output.display()),
                );
                self.courses.clear();
                self.reset_selection();
            }
            Err(e) => {
                log::error!("Failed to save timetable: {e}");
                self.set_status(Severity::Error, format!("Error saving timetable: {e}"));
            }
        }
    }

    /// Toggle a row in the multi-selection and refresh the summary.
    pub fn toggle_selection(&mut self, index: usize) {
        if index >= self.courses.len() {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
        self.rebuild_summary();
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected rows in list order.
    pub fn selected_rows(&self) -> Vec<&str> {
        self.selected
            .iter()
            .filter_map(|&i| self.courses.get(i).map(String::as_str))
            .collect()
    }

    fn rebuild_summary(&mut self) {
        let mut summary = String::from(SUMMARY_HEADER);
        for row in self.selected_rows() {
            summary.push_str(&format!("\nAdded \"{row}\""));
        }
        self.summary = summary;
    }

    fn reset_selection(&mut self) {
        self.selected.clear();
        self.rebuild_summary();
    }

    fn set_status(&mut self, severity: Severity, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(severity, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    const TIMETABLE: &str = "\
Course,Section,Days,Time,Room
CS 201,A,MW,08:40-10:30,FENS G077
CS 201,B,TR,08:40-10:30,FENS G077
CS 204,A,MW,10:40-12:30,FENS L045
CS 204,B,TR,10:40-12:30,FENS L045
CS 210,A,F,08:40-12:30,FASS 1099
CS 300,A,MW,14:40-16:30,FENS G035
CS 204,C,F,14:40-16:30,FENS L063
CS 210,B,MW,16:40-18:30,FENS L063
MATH 201,A,TR,12:40-14:30,FASS G062
";

    fn form_with_file() -> (FormState, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("courses.csv");
        fs::write(&input, TIMETABLE).unwrap();

        let config = AppConfig {
            output_file: dir.path().join("timetable.csv"),
            ..AppConfig::default()
        };
        let mut form = FormState::new(config);
        form.set_file_path(&input);
        form.department = Some("CS".to_string());
        form.year = Year::new(2);
        (form, dir)
    }

    fn output(form: &FormState) -> PathBuf {
        form.config.output_file.clone()
    }

    fn status_text(form: &FormState) -> &str {
        form.status.as_ref().map(|s| s.text.as_str()).unwrap_or("")
    }

    #[test]
    fn display_lists_matching_rows_in_order() {
        let (mut form, _dir) = form_with_file();
        form.display();

        assert_eq!(form.courses.len(), 7);
        assert_eq!(form.courses[0], "CS 201,A,MW,08:40-10:30,FENS G077");
        assert_eq!(form.courses[6], "CS 210,B,MW,16:40-18:30,FENS L063");
        assert!(form.courses.iter().all(|c| !c.starts_with("CS 300")));
        assert!(form.status.is_none());
    }

    #[test]
    fn display_without_file_asks_for_one() {
        let mut form = FormState::default();
        form.display();
        assert_eq!(status_text(&form), "Please choose a CSV file.");
        assert!(form.courses.is_empty());
    }

    #[test]
    fn display_without_year_asks_for_filters() {
        let (mut form, _dir) = form_with_file();
        form.year = None;
        form.display();
        assert_eq!(status_text(&form), "Please select a year and a department.");
        assert!(form.courses.is_empty());
    }

    #[test]
    fn no_match_keeps_previous_list() {
        let (mut form, _dir) = form_with_file();
        form.display();
        let before = form.courses.clone();

        form.year = Year::new(5);
        form.display();
        assert_eq!(
            status_text(&form),
            "There is no course that suits your requirements."
        );
        assert_eq!(form.courses, before);
    }

    #[test]
    fn unreadable_path_reports_reason_and_keeps_display() {
        let (mut form, dir) = form_with_file();
        form.display();
        form.toggle_selection(1);
        let courses = form.courses.clone();
        let summary = form.summary.clone();

        let missing = dir.path().join("missing.csv");
        form.set_file_path(&missing);
        form.display();

        let reason = fs::read_to_string(&missing).unwrap_err().to_string();
        let status = form.status.clone().unwrap();
        assert_eq!(status.severity, Severity::Error);
        assert!(status.text.starts_with("Error reading CSV file: "));
        assert!(status.text.contains(&reason));
        assert_eq!(form.courses, courses);
        assert_eq!(form.summary, summary);
    }

    #[test]
    fn summary_lists_each_selected_row() {
        let (mut form, _dir) = form_with_file();
        form.display();
        form.toggle_selection(2);
        form.toggle_selection(0);

        assert_eq!(
            form.summary,
            "Selected Courses:\n\
             Added \"CS 201,A,MW,08:40-10:30,FENS G077\"\n\
             Added \"CS 204,A,MW,10:40-12:30,FENS L045\""
        );

        form.toggle_selection(0);
        form.toggle_selection(2);
        assert_eq!(form.summary, "Selected Courses:");
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let (mut form, _dir) = form_with_file();
        form.display();
        form.toggle_selection(99);
        assert!(form.selected.is_empty());
    }

    #[test]
    fn new_display_resets_selection() {
        let (mut form, _dir) = form_with_file();
        form.display();
        form.toggle_selection(0);
        form.display();
        assert!(form.selected.is_empty());
        assert_eq!(form.summary, "Selected Courses:");
    }

    #[test]
    fn clear_resets_list_and_summary() {
        let (mut form, _dir) = form_with_file();
        form.display();
        form.toggle_selection(0);
        form.toggle_selection(3);

        form.clear();
        assert!(form.courses.is_empty());
        assert!(form.selected.is_empty());
        assert_eq!(form.summary, "Selected Courses:");
        assert_eq!(status_text(&form), "Timetable cleared.");
    }

    #[test]
    fn save_with_nothing_selected_writes_nothing() {
        let (mut form, _dir) = form_with_file();
        form.display();
        form.save();

        assert_eq!(
            status_text(&form),
            "No courses selected. Add courses before saving."
        );
        assert!(!output(&form).exists());
        assert_eq!(form.courses.len(), 7);
    }

    #[test]
    fn save_with_seven_selected_writes_nothing() {
        let (mut form, _dir) = form_with_file();
        form.display();
        for i in 0..7 {
            form.toggle_selection(i);
        }
        form.save();

        assert_eq!(status_text(&form), "Select at most 6 courses.");
        assert!(!output(&form).exists());
        assert_eq!(form.selected.len(), 7);
    }

    #[test]
    fn save_writes_selected_rows_then_clears() {
        let (mut form, _dir) = form_with_file();
        form.display();
        form.toggle_selection(4);
        form.toggle_selection(1);
        form.save();

        let written = fs::read_to_string(output(&form)).unwrap();
        assert_eq!(
            written,
            "CS 201,B,TR,08:40-10:30,FENS G077\nCS 210,A,F,08:40-12:30,FASS 1099\n"
        );
        assert!(form.courses.is_empty());
        assert_eq!(form.summary, "Selected Courses:");
        assert!(status_text(&form).starts_with("Timetable saved to '"));
    }

    #[test]
    fn save_six_is_allowed_and_overwrites() {
        let (mut form, _dir) = form_with_file();
        fs::write(output(&form), "old line\n").unwrap();
        form.display();
        for i in 0..6 {
            form.toggle_selection(i);
        }
        form.save();

        let written = fs::read_to_string(output(&form)).unwrap();
        assert_eq!(written.lines().count(), 6);
        assert!(!written.contains("old line"));
    }

    #[test]
    fn save_failure_keeps_display() {
        let (mut form, dir) = form_with_file();
        form.config.output_file = dir.path().join("no-such-dir").join("timetable.csv");
        form.display();
        form.toggle_selection(0);
        form.save();

        let status = form.status.clone().unwrap();
        assert_eq!(status.severity, Severity::Error);
        assert!(status.text.starts_with("Error saving timetable: "));
        assert_eq!(form.courses.len(), 7);
        assert_eq!(form.selected.len(), 1);
    }
}
