use std::io::Cursor;
use std::ops::Range;

use anyhow::{Context, Result, bail};
use plotters::prelude::*;

use super::builder::{MetricChart, X_LABEL};
use super::plain_tick_label;
use crate::color::series_colors;

// 10 × 6 inches at 300 DPI, the fixed export geometry.
pub const IMAGE_WIDTH: u32 = 3000;
pub const IMAGE_HEIGHT: u32 = 1800;

// ---------------------------------------------------------------------------
// PNG rendering
// ---------------------------------------------------------------------------

/// Render a metric chart to an in-memory PNG: log-log axes, plain decimal
/// tick labels, grid, legend, one marker line per sample.
pub fn render_png(chart: &MetricChart) -> Result<Vec<u8>> {
    let (x_range, y_range) = log_axis_ranges(chart)?;
    let colors = series_colors(chart.series.len());

    let mut raw = vec![0u8; (IMAGE_WIDTH * IMAGE_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut raw, (IMAGE_WIDTH, IMAGE_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).context("filling chart background")?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(
                chart.metric.title(),
                ("sans-serif", 64).into_font().style(FontStyle::Bold),
            )
            .margin(40)
            .x_label_area_size(130)
            .y_label_area_size(180)
            .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())
            .context("building chart axes")?;

        ctx.configure_mesh()
            .x_desc(X_LABEL)
            .y_desc(chart.metric.y_label())
            .x_label_formatter(&|v| plain_tick_label(*v))
            .y_label_formatter(&|v| plain_tick_label(*v))
            .label_style(("sans-serif", 36))
            .axis_desc_style(("sans-serif", 42))
            .light_line_style(&RGBColor(235, 235, 235))
            .draw()
            .context("drawing chart mesh")?;

        for (series, color) in chart.series.iter().zip(colors) {
            let style = RGBColor(color.r(), color.g(), color.b());
            ctx.draw_series(
                LineSeries::new(
                    series.points.iter().map(|p| (p[0], p[1])),
                    style.stroke_width(4),
                )
                .point_size(8),
            )
            .with_context(|| format!("drawing series '{}'", series.label))?
            .label(&series.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 40, y)], style.stroke_width(4))
            });
        }

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.85))
            .label_font(("sans-serif", 36))
            .draw()
            .context("drawing legend")?;

        root.present().context("finalising chart")?;
    }

    let rgb = image::RgbImage::from_raw(IMAGE_WIDTH, IMAGE_HEIGHT, raw)
        .context("assembling image buffer")?;
    let mut png = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .context("encoding PNG")?;
    Ok(png)
}

/// Axis ranges from the positive data values, padded in log space. Values
/// that cannot sit on a log axis (zero, negative, non-finite) are ignored
/// when placing the bounds.
fn log_axis_ranges(chart: &MetricChart) -> Result<(Range<f64>, Range<f64>)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for series in &chart.series {
        for p in &series.points {
            if p[0].is_finite() && p[0] > 0.0 {
                x_min = x_min.min(p[0]);
                x_max = x_max.max(p[0]);
            }
            if p[1].is_finite() && p[1] > 0.0 {
                y_min = y_min.min(p[1]);
                y_max = y_max.max(p[1]);
            }
        }
    }

    if !x_min.is_finite() || !y_min.is_finite() {
        bail!("no positive data points to place on logarithmic axes");
    }

    Ok((x_min * 0.8..x_max * 1.25, y_min * 0.8..y_max * 1.25))
}
