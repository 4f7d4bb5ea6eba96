use crate::data::loader::LoadOutcome;
use crate::data::model::{FileReport, LoadError, Sample};
use crate::plot::builder::{Metric, MetricChart, build_metric_chart};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One metric's section: the chart (if any sample plotted) plus the
/// warnings produced while assembling it.
pub struct MetricSlot {
    pub metric: Metric,
    pub chart: Option<MetricChart>,
    pub warnings: Vec<String>,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Samples from the most recent Open… action.
    pub samples: Vec<Sample>,

    /// Per-file diagnostics for the loaded samples.
    pub reports: Vec<FileReport>,

    /// Files from the last Open… action that failed to parse.
    pub load_errors: Vec<LoadError>,

    /// The three chart sections, rebuilt after every load.
    pub metrics: Vec<MetricSlot>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
            reports: Vec::new(),
            load_errors: Vec::new(),
            metrics: empty_slots(),
            status_message: None,
        }
    }
}

fn empty_slots() -> Vec<MetricSlot> {
    Metric::ALL
        .iter()
        .map(|&metric| MetricSlot {
            metric,
            chart: None,
            warnings: Vec::new(),
        })
        .collect()
}

impl AppState {
    /// Replace the session's samples with a fresh load and rebuild all
    /// three charts.
    pub fn ingest(&mut self, outcome: LoadOutcome) {
        self.samples = outcome.samples;
        self.reports = outcome.reports;
        self.load_errors = outcome.errors;
        self.status_message = None;
        self.rebuild_charts();
    }

    /// Recompute every metric's chart from the current samples.
    pub fn rebuild_charts(&mut self) {
        self.metrics = Metric::ALL
            .iter()
            .map(|&metric| {
                let (chart, warnings) = build_metric_chart(&self.samples, metric);
                MetricSlot {
                    metric,
                    chart,
                    warnings,
                }
            })
            .collect();
    }

    pub fn has_samples(&self) -> bool {
        !self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DataTable;

    fn outcome_with_sample() -> LoadOutcome {
        LoadOutcome {
            samples: vec![Sample {
                table: DataTable {
                    columns: vec![
                        "Angular Frequency".to_string(),
                        "Storage modulus".to_string(),
                        "Loss modulus".to_string(),
                        "Complex viscosity".to_string(),
                    ],
                    rows: vec![vec![1.0, 1.0e3, 5.0e2, 1.1e3], vec![10.0, 1.0e4, 5.0e3, 1.1e3]],
                },
                name: "a.xlsx".to_string(),
            }],
            reports: Vec::new(),
            errors: Vec::new(),
        }
    }

    #[test]
    fn ingest_rebuilds_every_metric() {
        let mut state = AppState::default();
        assert!(state.metrics.iter().all(|slot| slot.chart.is_none()));

        state.ingest(outcome_with_sample());
        assert!(state.has_samples());
        assert_eq!(state.metrics.len(), 3);
        for slot in &state.metrics {
            let chart = slot.chart.as_ref().expect("chart for every metric");
            assert_eq!(chart.series.len(), 1);
            assert!(slot.warnings.is_empty());
        }
    }

    #[test]
    fn ingest_replaces_previous_session_data() {
        let mut state = AppState::default();
        state.ingest(outcome_with_sample());
        state.ingest(LoadOutcome::default());
        assert!(!state.has_samples());
        assert!(state.metrics.iter().all(|slot| slot.chart.is_none()));
    }
}
