use eframe::egui;

use crate::config::AppConfig;
use crate::state::FormState;
use crate::ui::{course_list, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TimetableApp {
    pub state: FormState,
}

impl TimetableApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: FormState::new(config),
        }
    }
}

impl eframe::App for TimetableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: inputs and actions ----
        egui::TopBottomPanel::top("form_bar").show(ctx, |ui| {
            panels::form_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: status line ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Left side panel: selection summary ----
        egui::SidePanel::left("selection_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::selection_panel(ui, &self.state);
            });

        // ---- Central panel: course list ----
        egui::CentralPanel::default().show(ctx, |ui| {
            course_list::course_list(ui, &mut self.state);
        });
    }
}
