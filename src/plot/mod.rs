/// Plot layer: chart assembly from samples, and PNG export.
///
/// `builder` resolves columns per sample and produces a [`builder::MetricChart`],
/// which the UI renders interactively with `egui_plot` and `export` renders to
/// a PNG buffer with `plotters`. Both axes are log-scaled and tick labels are
/// forced to plain decimal notation via [`plain_tick_label`].
pub mod builder;
pub mod export;

/// Format an axis tick value as a plain decimal, never scientific notation.
///
/// Values ≥ 1 are rounded to whole numbers ("1000", not "1e3"); smaller
/// values get just enough decimals to show their leading digits ("0.01",
/// not "1e-2").
pub fn plain_tick_label(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return format!("{value}");
    }
    if value >= 1.0 {
        format!("{value:.0}")
    } else {
        let decimals = (-value.log10().floor()) as usize + 1;
        let text = format!("{value:.decimals$}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
