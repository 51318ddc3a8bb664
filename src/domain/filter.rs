// Rolling window filter over timestamped samples
use crate::domain::sample::Sample;
use crate::domain::window::RangeToken;

/// Keeps the samples that fall inside the rolling window ending at `now_ms`.
///
/// A sample survives when `now_ms - timestamp` is strictly less than the
/// window length, so a reading exactly one window old is excluded. Input
/// order is preserved and an empty input yields an empty output.
pub fn filter_window<S: Sample + Clone>(samples: &[S], range: RangeToken, now_ms: i64) -> Vec<S> {
    let window_ms = range.duration_ms();
    samples
        .iter()
        .filter(|sample| now_ms - sample.timestamp_ms() < window_ms)
        .cloned()
        .collect()
}
