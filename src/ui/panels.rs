use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::COLUMN_NAMES;
use crate::data::loader;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_files_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if state.has_samples() {
            ui.label(format!(
                "{} file(s) loaded, {} parse error(s)",
                state.samples.len(),
                state.load_errors.len()
            ));
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – usage notes and configuration
// ---------------------------------------------------------------------------

/// Render the left info panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Frequency Sweep Analyzer");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("How to use");
            ui.label(
                "1. Open the exported workbooks (File → Open…).\n\
                 2. The G', G'' and complex viscosity charts are generated \
                 automatically, overlaid for all samples.\n\
                 3. Save any chart as a PNG with the button below it.",
            );
            ui.add_space(8.0);

            ui.strong("Expected file layout");
            ui.label(
                "• data on the second sheet\n\
                 • column names on the second row\n\
                 • units on the third row (ignored automatically)",
            );
            ui.add_space(8.0);
            ui.separator();

            ui.strong("Column matching");
            ui.label(
                "Columns are matched by these substrings. If a column is \
                 not found, adjust the mapping in src/config.rs and rebuild.",
            );
            ui.monospace(COLUMN_NAMES.to_json());
            ui.add_space(8.0);

            if state.has_samples() {
                ui.separator();
                ui.strong("Loaded files");
                for sample in &state.samples {
                    ui.label(format!("{} ({} rows)", sample.name, sample.table.len()));
                }
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user pick workbooks; the selection replaces the current samples.
pub fn open_files_dialog(state: &mut AppState) {
    let files = rfd::FileDialog::new()
        .set_title("Open frequency-sweep workbooks")
        .add_filter("Excel workbooks", &["xlsx", "xls"])
        .add_filter("Excel 2007+ (.xlsx)", &["xlsx"])
        .add_filter("Legacy Excel (.xls)", &["xls"])
        .pick_files();

    let Some(paths) = files else {
        return;
    };

    let outcome = loader::load_files(&paths);
    log::info!(
        "Loaded {} of {} selected file(s)",
        outcome.samples.len(),
        paths.len()
    );
    state.ingest(outcome);
}
