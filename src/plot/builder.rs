use crate::config::COLUMN_NAMES;
use crate::data::columns::resolve_column;
use crate::data::model::Sample;

/// X-axis label shared by all three charts.
pub const X_LABEL: &str = "Angular Frequency (rad/s)";

// ---------------------------------------------------------------------------
// Metric – the three compared quantities
// ---------------------------------------------------------------------------

/// One of the three plotted quantities of a frequency sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    StorageModulus,
    LossModulus,
    ComplexViscosity,
}

impl Metric {
    /// Presentation order of the three chart sections.
    pub const ALL: [Metric; 3] = [
        Metric::StorageModulus,
        Metric::LossModulus,
        Metric::ComplexViscosity,
    ];

    /// Section heading shown above the chart.
    pub fn heading(&self) -> &'static str {
        match self {
            Metric::StorageModulus => "1. Storage Modulus (G') vs. Frequency",
            Metric::LossModulus => "2. Loss Modulus (G'') vs. Frequency",
            Metric::ComplexViscosity => "3. Complex Viscosity vs. Frequency",
        }
    }

    /// Chart title.
    pub fn title(&self) -> &'static str {
        match self {
            Metric::StorageModulus => "Storage Modulus vs. Angular Frequency",
            Metric::LossModulus => "Loss Modulus vs. Angular Frequency",
            Metric::ComplexViscosity => "Complex Viscosity vs. Angular Frequency",
        }
    }

    /// Y-axis label.
    pub fn y_label(&self) -> &'static str {
        match self {
            Metric::StorageModulus => "Storage Modulus (Pa)",
            Metric::LossModulus => "Loss Modulus (Pa)",
            Metric::ComplexViscosity => "Complex Viscosity (Pa.s)",
        }
    }

    /// Substring used to locate this metric's column.
    pub fn column_target(&self) -> &'static str {
        match self {
            Metric::StorageModulus => COLUMN_NAMES.storage_modulus,
            Metric::LossModulus => COLUMN_NAMES.loss_modulus,
            Metric::ComplexViscosity => COLUMN_NAMES.complex_viscosity,
        }
    }

    /// Fixed default file name for the PNG download.
    pub fn file_name(&self) -> &'static str {
        match self {
            Metric::StorageModulus => "storage_modulus.png",
            Metric::LossModulus => "loss_modulus.png",
            Metric::ComplexViscosity => "complex_viscosity.png",
        }
    }

    /// Stable id for the egui plot widget.
    pub fn plot_id(&self) -> &'static str {
        match self {
            Metric::StorageModulus => "storage_modulus_plot",
            Metric::LossModulus => "loss_modulus_plot",
            Metric::ComplexViscosity => "complex_viscosity_plot",
        }
    }
}

// ---------------------------------------------------------------------------
// MetricChart – assembled render input
// ---------------------------------------------------------------------------

/// One overlaid series: legend label (the file name) and raw (ω, value)
/// points in measurement units. Renderers apply the log scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

/// Everything needed to draw one metric's comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricChart {
    pub metric: Metric,
    pub series: Vec<SeriesData>,
}

/// Assemble the chart for one metric from all loaded samples.
///
/// Per sample: an empty table is skipped with a warning. An unresolvable
/// frequency or metric column aborts the whole chart for every sample with
/// a warning, not just the offending one. Zero plottable samples yield no
/// chart and no extra warning.
pub fn build_metric_chart(samples: &[Sample], metric: Metric) -> (Option<MetricChart>, Vec<String>) {
    let mut warnings = Vec::new();
    let mut series = Vec::new();

    for sample in samples {
        if sample.table.is_empty() {
            warnings.push(format!(
                "No valid numeric data found in '{}'; it cannot be plotted.",
                sample.name
            ));
            continue;
        }

        let x_idx = resolve_column(&sample.table.columns, COLUMN_NAMES.frequency);
        let y_idx = resolve_column(&sample.table.columns, metric.column_target());

        match (x_idx, y_idx) {
            (Some(x), Some(y)) => series.push(SeriesData {
                label: sample.name.clone(),
                points: sample.table.rows.iter().map(|row| [row[x], row[y]]).collect(),
            }),
            _ => {
                warnings.push(format!(
                    "No column containing '{}' or '{}' found in '{}'.",
                    COLUMN_NAMES.frequency,
                    metric.column_target(),
                    sample.name
                ));
                return (None, warnings);
            }
        }
    }

    if series.is_empty() {
        (None, warnings)
    } else {
        (Some(MetricChart { metric, series }), warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DataTable;

    fn sample(name: &str, columns: &[&str], rows: Vec<Vec<f64>>) -> Sample {
        Sample {
            table: DataTable {
                columns: columns.iter().map(|s| s.to_string()).collect(),
                rows,
            },
            name: name.to_string(),
        }
    }

    fn sweep(name: &str, scale: f64) -> Sample {
        sample(
            name,
            &["Angular Frequency (rad/s)", "Storage modulus (Pa)"],
            vec![
                vec![1.0, scale * 1.0e3],
                vec![10.0, scale * 1.0e4],
                vec![100.0, scale * 1.0e5],
            ],
        )
    }

    #[test]
    fn overlays_all_resolvable_samples() {
        let samples = vec![sweep("a.xlsx", 1.0), sweep("b.xlsx", 2.0)];
        let (chart, warnings) = build_metric_chart(&samples, Metric::StorageModulus);
        let chart = chart.expect("chart");
        assert!(warnings.is_empty());
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].label, "a.xlsx");
        assert_eq!(chart.series[1].points[2], [100.0, 2.0e5]);
    }

    #[test]
    fn one_unresolvable_sample_suppresses_the_whole_chart() {
        let samples = vec![
            sweep("good.xlsx", 1.0),
            sample(
                "bad.xlsx",
                &["Angular Frequency (rad/s)", "Temperature (C)"],
                vec![vec![1.0, 230.0]],
            ),
        ];
        let (chart, warnings) = build_metric_chart(&samples, Metric::StorageModulus);
        assert!(chart.is_none());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("bad.xlsx"));
    }

    #[test]
    fn metric_absent_everywhere_yields_no_chart() {
        let samples = vec![sweep("a.xlsx", 1.0), sweep("b.xlsx", 2.0)];
        let (chart, _) = build_metric_chart(&samples, Metric::ComplexViscosity);
        assert!(chart.is_none());
    }

    #[test]
    fn empty_tables_are_skipped_with_a_warning() {
        let samples = vec![
            sample("empty.xlsx", &["Angular Frequency", "Storage modulus"], vec![]),
            sweep("full.xlsx", 1.0),
        ];
        let (chart, warnings) = build_metric_chart(&samples, Metric::StorageModulus);
        let chart = chart.expect("chart");
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].label, "full.xlsx");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("empty.xlsx"));
    }

    #[test]
    fn all_samples_empty_is_silent_no_chart() {
        let samples = vec![sample("e.xlsx", &["Angular Frequency"], vec![])];
        let (chart, warnings) = build_metric_chart(&samples, Metric::LossModulus);
        assert!(chart.is_none());
        // Only the per-sample emptiness warning, nothing else.
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn no_samples_at_all_is_silent() {
        let (chart, warnings) = build_metric_chart(&[], Metric::StorageModulus);
        assert!(chart.is_none());
        assert!(warnings.is_empty());
    }
}
