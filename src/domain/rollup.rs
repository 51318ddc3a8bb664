// Summary statistics over a windowed sample subset
use serde::Serialize;

use crate::domain::sample::{Metric, Sample};

/// Summary statistics for one metric over one windowed subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rollup {
    /// Mean of the contributing values, rounded to the metric's precision.
    pub average: f64,
    /// Raw value of the most recent contributing sample.
    pub latest: f64,
    /// Whole-percent deviation of `latest` from `average`, zero when the
    /// average is not positive.
    pub percent_deviation: i64,
    /// Thirty-day projection of the latest value, rounded to a whole unit.
    pub monthly_projection: i64,
}

/// Rounds half-away-from-zero at the given number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Computes the rollup for `metric` over `subset`.
///
/// Samples that do not carry the metric are skipped entirely, leaving both
/// the numerator and the denominator of the average. A subset with no
/// contributing samples rolls up to all zeros rather than an error.
pub fn rollup<S: Sample>(subset: &[S], metric: Metric) -> Rollup {
    let values: Vec<f64> = subset
        .iter()
        .filter_map(|sample| sample.value_of(metric))
        .collect();

    let Some(&latest) = values.last() else {
        return Rollup::default();
    };

    let sum: f64 = values.iter().sum();
    let average = round_to(sum / values.len() as f64, metric.decimals());

    let percent_deviation = if average > 0.0 {
        ((latest - average) / average * 100.0).round() as i64
    } else {
        0
    };

    Rollup {
        average,
        latest,
        percent_deviation,
        monthly_projection: (latest * 30.0).round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::DateLabel;

    struct ValueSample {
        timestamp_ms: i64,
        date: DateLabel,
        energy: Option<f64>,
        temperature: Option<f64>,
    }

    impl ValueSample {
        fn energy(timestamp_ms: i64, value: f64) -> Self {
            Self {
                timestamp_ms,
                date: DateLabel::new("Feb 17"),
                energy: Some(value),
                temperature: None,
            }
        }

        fn temperature(timestamp_ms: i64, value: f64) -> Self {
            Self {
                timestamp_ms,
                date: DateLabel::new("Feb 17"),
                energy: None,
                temperature: Some(value),
            }
        }
    }

    impl Sample for ValueSample {
        fn timestamp_ms(&self) -> i64 {
            self.timestamp_ms
        }

        fn date(&self) -> &DateLabel {
            &self.date
        }

        fn value_of(&self, metric: Metric) -> Option<f64> {
            match metric {
                Metric::EnergyUsage => self.energy,
                Metric::Temperature => self.temperature,
                _ => None,
            }
        }
    }

    fn energy_series(values: &[f64]) -> Vec<ValueSample> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| ValueSample::energy(i as i64, v))
            .collect()
    }

    #[test]
    fn test_empty_subset_rolls_up_to_zeros() {
        let rollup = rollup::<ValueSample>(&[], Metric::EnergyUsage);
        assert_eq!(rollup, Rollup::default());
        assert_eq!(rollup.average, 0.0);
        assert_eq!(rollup.percent_deviation, 0);
        assert_eq!(rollup.monthly_projection, 0);
    }

    #[test]
    fn test_average_and_latest() {
        let subset = energy_series(&[10.0, 20.0, 30.0]);
        let stats = rollup(&subset, Metric::EnergyUsage);
        assert_eq!(stats.average, 20.0);
        assert_eq!(stats.latest, 30.0);
        assert_eq!(stats.percent_deviation, 50);
        assert_eq!(stats.monthly_projection, 900);
    }

    #[test]
    fn test_deviation_is_signed() {
        let above = rollup(&energy_series(&[40.0, 50.0, 60.0]), Metric::EnergyUsage);
        assert_eq!(above.average, 50.0);
        assert_eq!(above.percent_deviation, 20);

        let below = rollup(&energy_series(&[60.0, 50.0, 40.0]), Metric::EnergyUsage);
        assert_eq!(below.average, 50.0);
        assert_eq!(below.percent_deviation, -20);
    }

    #[test]
    fn test_single_sample_projects_thirty_days() {
        let stats = rollup(&energy_series(&[10.0]), Metric::EnergyUsage);
        assert_eq!(stats.average, 10.0);
        assert_eq!(stats.latest, 10.0);
        assert_eq!(stats.percent_deviation, 0);
        assert_eq!(stats.monthly_projection, 300);
    }

    #[test]
    fn test_zero_average_suppresses_deviation() {
        let stats = rollup(&energy_series(&[0.0, 0.0]), Metric::EnergyUsage);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.percent_deviation, 0);
    }

    #[test]
    fn test_average_rounds_half_away_from_zero() {
        let stats = rollup(&energy_series(&[10.0, 11.0]), Metric::EnergyUsage);
        assert_eq!(stats.average, 11.0);
    }

    #[test]
    fn test_average_honors_metric_decimals() {
        let subset = vec![
            ValueSample::temperature(0, 20.0),
            ValueSample::temperature(1, 21.0),
            ValueSample::temperature(2, 23.5),
        ];
        let stats = rollup(&subset, Metric::Temperature);
        assert_eq!(stats.average, 21.5);
    }

    #[test]
    fn test_missing_fields_leave_numerator_and_denominator() {
        let subset = vec![
            ValueSample::energy(0, 10.0),
            ValueSample::temperature(1, 99.0),
            ValueSample::energy(2, 30.0),
        ];

        let stats = rollup(&subset, Metric::EnergyUsage);
        assert_eq!(stats.average, 20.0);
        assert_eq!(stats.latest, 30.0);

        let none = rollup(&subset, Metric::Ph);
        assert_eq!(none, Rollup::default());
    }

    #[test]
    fn test_rollup_is_idempotent_for_fixed_input() {
        let subset = energy_series(&[12.0, 48.0, 24.0]);
        let first = rollup(&subset, Metric::EnergyUsage);
        let second = rollup(&subset, Metric::EnergyUsage);
        assert_eq!(first, second);
    }
}
