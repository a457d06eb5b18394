use eframe::egui::{self, Color32, RichText, ScrollArea, TextEdit, Ui};

use crate::data::model::Year;
use crate::state::{FormState, Severity};

// ---------------------------------------------------------------------------
// Top bar – form inputs and actions
// ---------------------------------------------------------------------------

/// Render the file / year / department inputs and the action buttons.
pub fn form_bar(ui: &mut Ui, state: &mut FormState) {
    ui.add_space(6.0);
    egui::Grid::new("form_grid")
        .num_columns(3)
        .spacing([12.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Enter CSV File Path:");
            ui.add(TextEdit::singleline(&mut state.file_path).desired_width(320.0));
            if ui.button("Browse").clicked() {
                open_file_dialog(state);
            }
            ui.end_row();

            ui.label("Select Year:");
            let year_text = state.year.map(|y| y.to_string()).unwrap_or_default();
            egui::ComboBox::from_id_salt("year")
                .selected_text(year_text)
                .show_ui(ui, |ui: &mut Ui| {
                    for year in Year::all() {
                        ui.selectable_value(&mut state.year, Some(year), year.to_string());
                    }
                });
            ui.end_row();

            // Clone what we need so we can mutate state inside the loop.
            let departments = state.config.departments.clone();
            ui.label("Select Department:");
            egui::ComboBox::from_id_salt("department")
                .selected_text(state.department.clone().unwrap_or_default())
                .show_ui(ui, |ui: &mut Ui| {
                    for dept in &departments {
                        ui.selectable_value(&mut state.department, Some(dept.clone()), dept);
                    }
                });
            ui.end_row();

            if ui.button("Display").clicked() {
                state.display();
            }
            if ui.button("Clear").clicked() {
                state.clear();
            }
            if ui.button("Save").clicked() {
                state.save();
            }
            ui.end_row();
        });
    ui.add_space(6.0);
}

// ---------------------------------------------------------------------------
// Left side panel – selection summary
// ---------------------------------------------------------------------------

/// Render the read-only summary of the current selection.
pub fn selection_panel(ui: &mut Ui, state: &FormState) {
    ui.heading("Selection");
    ui.label(format!(
        "{} of at most {}",
        state.selected.len(),
        state.config.max_selection
    ));
    ui.separator();

    // `&mut &str` is a read-only text buffer.
    let mut summary = state.summary.as_str();
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.add(
                TextEdit::multiline(&mut summary)
                    .desired_width(f32::INFINITY)
                    .desired_rows(10),
            );
        });
}

// ---------------------------------------------------------------------------
// Bottom bar – status line
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &FormState) {
    ui.horizontal(|ui: &mut Ui| {
        if let Some(msg) = &state.status {
            let color = match msg.severity {
                Severity::Info => Color32::from_rgb(80, 160, 90),
                Severity::Warning => Color32::from_rgb(210, 150, 40),
                Severity::Error => Color32::RED,
            };
            ui.label(RichText::new(&msg.text).color(color));
        } else {
            ui.label(format!("{} courses listed", state.courses.len()));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut FormState) {
    let file = rfd::FileDialog::new()
        .set_title("Open timetable")
        .add_filter("CSV Files", &["csv"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Picked timetable {}", path.display());
        state.set_file_path(&path);
    }
}
