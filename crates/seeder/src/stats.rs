//! Statistics accumulation for one seeding run.

use hdrhistogram::Histogram;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Append-only accumulator for failures and collaborator-call latencies.
///
/// Success counts are derived from the step result lists when the report
/// is assembled; only errors and timings need collecting along the way.
/// Created just before the first step so the elapsed clock covers exactly
/// the executed pipeline.
pub struct RunRecorder {
    started: Instant,
    errors: Vec<String>,
    latencies: Histogram<u64>,
}

impl RunRecorder {
    /// Start the run clock with empty accumulators.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            errors: Vec::new(),
            // Three significant digits spans microsecond ticks to
            // multi-second timeouts without resizing pressure.
            latencies: Histogram::new(3).expect("sigfig within 0..=5"),
        }
    }

    /// Append one failure description to the run's error list.
    pub fn record_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(error = %message, "recorded failure");
        self.errors.push(message);
    }

    /// Record the latency of one collaborator call.
    pub fn record_latency(&mut self, elapsed: Duration) {
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.latencies.saturating_record(micros);
    }

    /// Number of failures recorded so far.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Stop the clock, log the latency distribution, and hand back the
    /// elapsed milliseconds and the ordered error list.
    pub fn finish(self) -> (u64, Vec<String>) {
        let elapsed_millis = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        if !self.latencies.is_empty() {
            info!(
                calls = self.latencies.len(),
                p50_us = self.latencies.value_at_quantile(0.50),
                p99_us = self.latencies.value_at_quantile(0.99),
                max_us = self.latencies.max(),
                "collaborator call latencies"
            );
        }
        (elapsed_millis, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_keep_recording_order() {
        let mut recorder = RunRecorder::start();
        recorder.record_error("first");
        recorder.record_error("second");
        assert_eq!(recorder.error_count(), 2);

        let (_, errors) = recorder.finish();
        assert_eq!(errors, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_latencies_accumulate() {
        let mut recorder = RunRecorder::start();
        recorder.record_latency(Duration::from_micros(120));
        recorder.record_latency(Duration::from_micros(480));
        assert_eq!(recorder.latencies.len(), 2);
        assert!(recorder.latencies.max() >= 480);
    }

    #[test]
    fn test_finish_reports_elapsed() {
        let recorder = RunRecorder::start();
        let (elapsed_millis, errors) = recorder.finish();
        // Fresh recorder: effectively zero elapsed, nothing recorded.
        assert!(elapsed_millis < 1000);
        assert!(errors.is_empty());
    }
}
