use eframe::egui::{ScrollArea, Ui};

use crate::state::FormState;

// ---------------------------------------------------------------------------
// Course list (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered rows as a multi-select list. Clicking toggles a row.
pub fn course_list(ui: &mut Ui, state: &mut FormState) {
    if state.courses.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Pick a file, year and department, then press Display");
        });
        return;
    }

    let mut clicked = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, row) in state.courses.iter().enumerate() {
                if ui.selectable_label(state.is_selected(idx), row).clicked() {
                    clicked = Some(idx);
                }
            }
        });

    if let Some(idx) = clicked {
        state.toggle_selection(idx);
    }
}
