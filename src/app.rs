use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{diagnostics, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RheoViewApp {
    pub state: AppState,
}

impl Default for RheoViewApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for RheoViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: usage and configuration ----
        egui::SidePanel::left("info_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: the three metric sections ----
        egui::CentralPanel::default().show(ctx, |ui| {
            self.central_panel(ui);
        });
    }
}

impl RheoViewApp {
    fn central_panel(&mut self, ui: &mut Ui) {
        if !self.state.has_samples() && self.state.load_errors.is_empty() {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open .xlsx / .xls frequency-sweep files to compare samples  (File → Open…)");
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui: &mut Ui| {
                for error in &self.state.load_errors {
                    ui.label(
                        RichText::new(format!("Error processing '{}': {}", error.file, error.message))
                            .color(Color32::RED),
                    );
                }
                if !self.state.load_errors.is_empty() {
                    ui.add_space(8.0);
                }

                if self.state.has_samples() {
                    ui.heading("Analysis results");
                    ui.add_space(8.0);

                    let mut status: Option<String> = None;
                    for slot in &self.state.metrics {
                        plot::metric_section(ui, slot, &mut status);
                    }
                    if status.is_some() {
                        self.state.status_message = status;
                    }

                    ui.separator();
                    diagnostics::diagnostics_panel(ui, &self.state.reports);
                }
            });
    }
}
