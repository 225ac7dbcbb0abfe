use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

pub struct Metrics {
    // Counters
    total_requests: AtomicUsize,
    successful_requests: AtomicUsize,
    failed_requests: AtomicUsize,

    // Timing (in microseconds)
    total_analyze_time_us: AtomicU64,
    total_question_time_us: AtomicU64,
    total_scenario_time_us: AtomicU64,

    // Counts
    analyses_completed: AtomicUsize,
    questions_answered: AtomicUsize,
    scenarios_simulated: AtomicUsize,
    total_clauses_flagged: AtomicUsize,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            total_requests: AtomicUsize::new(0),
            successful_requests: AtomicUsize::new(0),
            failed_requests: AtomicUsize::new(0),
            total_analyze_time_us: AtomicU64::new(0),
            total_question_time_us: AtomicU64::new(0),
            total_scenario_time_us: AtomicU64::new(0),
            analyses_completed: AtomicUsize::new(0),
            questions_answered: AtomicUsize::new(0),
            scenarios_simulated: AtomicUsize::new(0),
            total_clauses_flagged: AtomicUsize::new(0),
        })
    }

    pub fn record_request(&self, success: bool) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        if success {
            self.successful_requests.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_requests.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_analyze(&self, duration: std::time::Duration, clauses: usize) {
        self.total_analyze_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.analyses_completed.fetch_add(1, Ordering::Relaxed);
        self.total_clauses_flagged.fetch_add(clauses, Ordering::Relaxed);
    }

    pub fn record_question(&self, duration: std::time::Duration) {
        self.total_question_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.questions_answered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_scenario(&self, duration: std::time::Duration) {
        self.total_scenario_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.scenarios_simulated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            successful_requests: self.successful_requests.load(Ordering::Relaxed),
            failed_requests: self.failed_requests.load(Ordering::Relaxed),
            avg_analyze_time_ms: avg_time_ms(&self.total_analyze_time_us, &self.analyses_completed),
            avg_question_time_ms: avg_time_ms(
                &self.total_question_time_us,
                &self.questions_answered,
            ),
            avg_scenario_time_ms: avg_time_ms(
                &self.total_scenario_time_us,
                &self.scenarios_simulated,
            ),
            analyses_completed: self.analyses_completed.load(Ordering::Relaxed),
            total_clauses_flagged: self.total_clauses_flagged.load(Ordering::Relaxed),
        }
    }
}

fn avg_time_ms(total_us: &AtomicU64, count: &AtomicUsize) -> f64 {
    let total = total_us.load(Ordering::Relaxed) as f64;
    let cnt = count.load(Ordering::Relaxed) as f64;
    if cnt > 0.0 {
        total / cnt / 1000.0
    } else {
        0.0
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    pub avg_analyze_time_ms: f64,
    pub avg_question_time_ms: f64,
    pub avg_scenario_time_ms: f64,
    pub analyses_completed: usize,
    pub total_clauses_flagged: usize,
}

pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn snapshot_reflects_recorded_operations() {
        let metrics = Metrics::new();
        metrics.record_request(true);
        metrics.record_request(false);
        metrics.record_analyze(Duration::from_millis(10), 3);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_requests, 2);
        assert_eq!(snapshot.successful_requests, 1);
        assert_eq!(snapshot.failed_requests, 1);
        assert_eq!(snapshot.analyses_completed, 1);
        assert_eq!(snapshot.total_clauses_flagged, 3);
        assert!(snapshot.avg_analyze_time_ms >= 10.0);
    }

    #[test]
    fn empty_metrics_average_to_zero() {
        let snapshot = Metrics::new().snapshot();
        assert_eq!(snapshot.avg_question_time_ms, 0.0);
    }
}
