// Date-label join across heterogeneous sample streams
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::domain::sample::{DateLabel, Metric, Sample};

/// One metric's values indexed by calendar label, ready for joining.
///
/// When a stream carries several samples under the same label the later one
/// wins, which reads as "the day's latest value".
#[derive(Debug, Clone)]
pub struct LabeledSeries {
    metric: Metric,
    by_date: HashMap<DateLabel, f64>,
}

impl LabeledSeries {
    pub fn from_samples<S: Sample>(metric: Metric, samples: &[S]) -> Self {
        let mut by_date = HashMap::new();
        for sample in samples {
            if let Some(value) = sample.value_of(metric) {
                by_date.insert(sample.date().clone(), value);
            }
        }
        Self { metric, by_date }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn get(&self, date: &DateLabel) -> Option<f64> {
        self.by_date.get(date).copied()
    }
}

/// One joined chart row: the primary sample's label and instant plus every
/// metric that had a value under that label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelatedRow {
    pub date: DateLabel,
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
    #[serde(flatten)]
    pub values: BTreeMap<Metric, f64>,
}

/// Projects each sample into a row carrying the requested metrics it has.
///
/// This is the single-stream path: every row holds the sample's own values,
/// so several samples under one label stay distinct. Cross-stream alignment
/// goes through [`join_by_date`] instead.
pub fn rows_from_samples<S: Sample>(samples: &[S], metrics: &[Metric]) -> Vec<CorrelatedRow> {
    samples
        .iter()
        .map(|sample| {
            let mut values = BTreeMap::new();
            for &metric in metrics {
                if let Some(value) = sample.value_of(metric) {
                    values.insert(metric, value);
                }
            }
            CorrelatedRow {
                date: sample.date().clone(),
                timestamp_ms: sample.timestamp_ms(),
                values,
            }
        })
        .collect()
}

/// Joins secondary series onto the primary stream by calendar label.
///
/// The output carries exactly one row per primary sample, in primary order.
/// A secondary series with no value under a row's label is absent from that
/// row; gaps are never interpolated or zero-filled.
pub fn join_by_date<S: Sample>(
    metric: Metric,
    primary: &[S],
    others: &[LabeledSeries],
) -> Vec<CorrelatedRow> {
    primary
        .iter()
        .map(|sample| {
            let mut values = BTreeMap::new();
            if let Some(value) = sample.value_of(metric) {
                values.insert(metric, value);
            }
            for series in others {
                if let Some(value) = series.get(sample.date()) {
                    values.insert(series.metric(), value);
                }
            }
            CorrelatedRow {
                date: sample.date().clone(),
                timestamp_ms: sample.timestamp_ms(),
                values,
            }
        })
        .collect()
}
