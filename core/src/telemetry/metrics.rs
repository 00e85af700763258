use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::advisory::Advisory;
use crate::tracking::ThreatStatus;

/// Running totals over every advisory observed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TickCounters {
    pub ticks: usize,
    pub detections: usize,
    pub gaps: usize,
    pub intercepts: usize,
    pub collision_alerts: usize,
}

/// Shareable counter set for driver and serving threads.
pub struct MetricsRecorder {
    inner: Mutex<TickCounters>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TickCounters::default()),
        }
    }

    pub fn record(&self, advisory: &Advisory) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.ticks += 1;
            if advisory.has_target() {
                counters.detections += 1;
            } else {
                counters.gaps += 1;
            }
            if matches!(
                advisory.status,
                ThreatStatus::IntersectSafe | ThreatStatus::CollisionCourse
            ) {
                counters.intercepts += 1;
            }
            if advisory.status.is_critical() {
                counters.collision_alerts += 1;
            }
        }
    }

    pub fn snapshot(&self) -> TickCounters {
        self.inner
            .lock()
            .map(|counters| *counters)
            .unwrap_or_default()
    }

    pub fn reset(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            *counters = TickCounters::default();
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TrackingEngine;
    use crate::prelude::EngineConfig;
    use crate::sensor::Detection;

    #[test]
    fn counts_hits_and_misses() {
        let mut engine = TrackingEngine::new(EngineConfig::default()).unwrap();
        let metrics = MetricsRecorder::new();
        metrics.record(&engine.tick(None));
        metrics.record(&engine.tick(Some(Detection::new((0.0, 0.0), 5.0))));
        metrics.record(&engine.tick(None));

        let counters = metrics.snapshot();
        assert_eq!(counters.ticks, 3);
        assert_eq!(counters.detections, 1);
        assert_eq!(counters.gaps, 2);
        assert_eq!(counters.collision_alerts, 0);
    }

    #[test]
    fn collision_course_counts_as_intercept_and_alert() {
        let mut engine = TrackingEngine::new(EngineConfig::default()).unwrap();
        let metrics = MetricsRecorder::new();
        for i in 0..10 {
            let x = 348.0 - 2.0 * i as f64;
            metrics.record(&engine.tick(Some(Detection::new((x, 240.0), 15.0 + i as f64))));
        }
        let counters = metrics.snapshot();
        assert!(counters.collision_alerts >= 1);
        assert!(counters.intercepts >= counters.collision_alerts);

        metrics.reset();
        assert_eq!(metrics.snapshot(), TickCounters::default());
    }
}
