use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::FileReport;

// ---------------------------------------------------------------------------
// Diagnostics panel – raw vs. processed data per file
// ---------------------------------------------------------------------------

/// Collapsible panel showing, per file, what the loader read and what
/// survived cleaning. Useful when a column fails to match or every row of
/// a file gets dropped.
pub fn diagnostics_panel(ui: &mut Ui, reports: &[FileReport]) {
    if reports.is_empty() {
        return;
    }

    egui::CollapsingHeader::new("File structure and processing details")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            for report in reports {
                file_report(ui, report);
                ui.separator();
            }
        });
}

fn file_report(ui: &mut Ui, report: &FileReport) {
    ui.strong(&report.name);
    ui.add_space(4.0);

    ui.label("Columns as read from the sheet, with inferred cell kinds:");
    ui.push_id((&report.name, "kinds"), |ui: &mut Ui| {
        kinds_table(ui, report);
    });
    ui.add_space(6.0);

    ui.label("Raw preview (units row first, before numeric coercion):");
    ui.push_id((&report.name, "raw"), |ui: &mut Ui| {
        preview_table(ui, &report.original_columns, &report.raw_preview);
    });
    ui.add_space(6.0);

    if report.clean_preview.is_empty() {
        ui.label("No rows survived cleaning for this file.");
    } else {
        ui.label("Cleaned preview (rows with any non-numeric cell dropped):");
        let cleaned: Vec<Vec<String>> = report
            .clean_preview
            .iter()
            .map(|row| row.iter().map(|v| format!("{v}")).collect())
            .collect();
        ui.push_id((&report.name, "clean"), |ui: &mut Ui| {
            preview_table(ui, &report.original_columns, &cleaned);
        });
    }
    ui.add_space(6.0);
}

fn kinds_table(ui: &mut Ui, report: &FileReport) {
    // The panel already scrolls; the tables must not.
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(120.0), 2)
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.strong("Column");
            });
            header.col(|ui| {
                ui.strong("Cells");
            });
        })
        .body(|mut body| {
            for (name, kind) in report
                .original_columns
                .iter()
                .zip(report.column_kinds.iter())
            {
                body.row(16.0, |mut row| {
                    row.col(|ui| {
                        ui.label(name);
                    });
                    row.col(|ui| {
                        ui.label(kind.to_string());
                    });
                });
            }
        });
}

fn preview_table(ui: &mut Ui, columns: &[String], rows: &[Vec<String>]) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(90.0), columns.len().max(1))
        .header(18.0, |mut header| {
            for name in columns {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for data_row in rows {
                body.row(16.0, |mut row| {
                    for cell in data_row {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}
