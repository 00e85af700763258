use aadescore::sensor::DetectionSource;
use aadescore::telemetry::{MetricsRecorder, StatusEvent, TickCounters, TransitionLog};
use aadescore::{Advisory, TrackingEngine};
use anyhow::Context;
use log::debug;

use crate::generator::profile::{build_frames, ScenarioConfig};
use crate::generator::source::FrameSource;
use crate::workflow::config::WorkflowConfig;

pub struct WorkflowResult {
    pub advisories: Vec<Advisory>,
    pub status_events: Vec<StatusEvent>,
    pub counters: TickCounters,
}

impl WorkflowResult {
    pub fn final_advisory(&self) -> Option<&Advisory> {
        self.advisories.last()
    }

    pub fn first_alert(&self) -> Option<&Advisory> {
        self.advisories.iter().find(|a| a.status.is_critical())
    }
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Drains `source` through a fresh engine session.
    pub fn execute(&self, source: &mut dyn DetectionSource) -> anyhow::Result<WorkflowResult> {
        let mut engine =
            TrackingEngine::new(self.config.engine.clone()).context("creating tracking engine")?;
        let mut transitions = TransitionLog::new();
        let metrics = MetricsRecorder::new();
        let mut advisories = Vec::new();
        let mut status_events = Vec::new();

        while let Some(detection) = source.next_detection() {
            let advisory = engine.tick(detection);
            metrics.record(&advisory);
            if let Some(event) = transitions.observe(&advisory) {
                status_events.push(event);
            }
            advisories.push(advisory);
        }

        Ok(WorkflowResult {
            advisories,
            status_events,
            counters: metrics.snapshot(),
        })
    }

    pub fn execute_scenario(&self, scenario: &ScenarioConfig) -> anyhow::Result<WorkflowResult> {
        let frames = build_frames(scenario).with_context(|| {
            format!(
                "building frames for scenario {}",
                scenario.name.as_deref().unwrap_or("<unnamed>")
            )
        })?;
        let mut source = FrameSource::new(frames, scenario.filter);
        let result = self.execute(&mut source)?;
        debug!("box filter discarded {} boxes", source.rejected());
        Ok(result)
    }
}
