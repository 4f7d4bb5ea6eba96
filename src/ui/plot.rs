use eframe::egui::{RichText, Ui};
use egui_plot::{GridInput, GridMark, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::series_colors;
use crate::plot::builder::{MetricChart, X_LABEL};
use crate::plot::{export, plain_tick_label};
use crate::state::MetricSlot;

// ---------------------------------------------------------------------------
// Metric section (central panel)
// ---------------------------------------------------------------------------

/// Render one metric's section: heading, warnings, chart, save button.
/// A failed save writes into `status` for the top bar.
pub fn metric_section(ui: &mut Ui, slot: &MetricSlot, status: &mut Option<String>) {
    ui.heading(slot.metric.heading());

    for warning in &slot.warnings {
        ui.label(RichText::new(warning).color(ui.visuals().warn_fg_color));
    }

    let Some(chart) = &slot.chart else {
        ui.add_space(12.0);
        return;
    };

    metric_plot(ui, chart);

    if ui.button("Save PNG…").clicked() {
        save_png(chart, status);
    }
    ui.add_space(12.0);
}

/// Interactive log-log chart: points are drawn in log10 space and the axes
/// labelled with the untransformed values in plain decimal notation.
fn metric_plot(ui: &mut Ui, chart: &MetricChart) {
    let colors = series_colors(chart.series.len());

    Plot::new(chart.metric.plot_id())
        .height(420.0)
        .legend(Legend::default())
        .x_axis_label(X_LABEL)
        .y_axis_label(chart.metric.y_label())
        .x_grid_spacer(log_grid_marks)
        .y_grid_spacer(log_grid_marks)
        .x_axis_formatter(|mark, _range| plain_tick_label(10f64.powf(mark.value)))
        .y_axis_formatter(|mark, _range| plain_tick_label(10f64.powf(mark.value)))
        .label_formatter(|name, value| {
            let x = 10f64.powf(value.x);
            let y = 10f64.powf(value.y);
            if name.is_empty() {
                format!("ω = {x:.4}\ny = {y:.4}")
            } else {
                format!("{name}\nω = {x:.4}\ny = {y:.4}")
            }
        })
        .show(ui, |plot_ui| {
            for (series, color) in chart.series.iter().zip(colors) {
                // Non-positive values have no place on a log axis; skip them.
                let points: Vec<[f64; 2]> = series
                    .points
                    .iter()
                    .filter(|p| p[0] > 0.0 && p[1] > 0.0)
                    .map(|p| [p[0].log10(), p[1].log10()])
                    .collect();

                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .name(&series.label)
                        .color(color)
                        .width(1.5),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(&series.label)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .radius(3.0)
                        .filled(true),
                );
            }
        });
}

/// Grid marks at 1, 2 and 5 of every decade, in log10-transformed space.
fn log_grid_marks(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let mut marks = Vec::new();
    for exp in min.floor() as i32..=max.ceil() as i32 {
        for (mantissa, step_size) in [(1.0f64, 1.0), (2.0, 0.1), (5.0, 0.1)] {
            let value = exp as f64 + mantissa.log10();
            if value >= min && value <= max {
                marks.push(GridMark { value, step_size });
            }
        }
    }
    marks
}

// ---------------------------------------------------------------------------
// PNG download
// ---------------------------------------------------------------------------

fn save_png(chart: &MetricChart, status: &mut Option<String>) {
    let png = match export::render_png(chart) {
        Ok(png) => png,
        Err(e) => {
            log::error!("Failed to render {}: {e:#}", chart.metric.file_name());
            *status = Some(format!("Error: {e:#}"));
            return;
        }
    };

    let Some(path) = rfd::FileDialog::new()
        .set_title(format!("Save {}", chart.metric.title()))
        .add_filter("PNG image", &["png"])
        .set_file_name(chart.metric.file_name())
        .save_file()
    else {
        return;
    };

    match std::fs::write(&path, &png) {
        Ok(()) => log::info!("Saved {} ({} bytes)", path.display(), png.len()),
        Err(e) => {
            log::error!("Failed to write {}: {e}", path.display());
            *status = Some(format!("Error: could not write {}: {e}", path.display()));
        }
    }
}
