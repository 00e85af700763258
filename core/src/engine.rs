use log::{debug, trace};

use crate::advisory::Advisory;
use crate::prelude::{EngineConfig, EngineResult, WindowEstimator};
use crate::sensor::Detection;
use crate::tracking::{
    CollisionPredictor, DirectionLabeler, EvasionAdvisor, GrowthEstimator, GrowthLabel,
    SampleWindow, ThreatClassifier, Velocity, VelocityEstimator,
};

/// Single-target tracking engine: one detection-or-miss in, one advisory out.
///
/// The window is the only state carried between ticks. The engine does no
/// locking of its own; concurrent callers must serialise access.
#[derive(Debug, Clone)]
pub struct TrackingEngine {
    config: EngineConfig,
    window: SampleWindow,
    ticks: u64,
    velocity: VelocityEstimator,
    growth: GrowthEstimator,
    labeler: DirectionLabeler,
    predictor: CollisionPredictor,
    classifier: ThreatClassifier,
    advisor: EvasionAdvisor,
}

impl TrackingEngine {
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            window: SampleWindow::with_capacity(config.capacity),
            ticks: 0,
            velocity: VelocityEstimator::from_config(&config),
            growth: GrowthEstimator::from_config(&config),
            labeler: DirectionLabeler::new(config.movement_threshold),
            predictor: CollisionPredictor::from_config(&config),
            classifier: ThreatClassifier::from_config(&config),
            advisor: EvasionAdvisor::new(config.delta_v_symbolic),
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    /// Number of ticks processed since creation or the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn reset(&mut self) {
        self.window.clear();
        self.ticks = 0;
    }

    pub fn tick(&mut self, detection: Option<Detection>) -> Advisory {
        self.window.push(detection);
        let tick = self.ticks;
        self.ticks += 1;

        let velocity = self.velocity.estimate(&self.window);
        let growth_rate = self.growth.estimate(&self.window);
        trace!(
            "tick {} velocity ({}, {}) growth {:.3}",
            tick,
            velocity.dx,
            velocity.dy,
            growth_rate
        );

        // A miss reports no motion; the window keeps its history for later ticks.
        let Some(target) = detection else {
            return Advisory {
                tick,
                status: self.classifier.classify(false, false, false),
                target: None,
                velocity: Velocity::ZERO,
                growth_rate: 0.0,
                direction: None,
                growth_label: GrowthLabel::Stable,
                predicted_point: None,
                distance_to_reference: None,
                maneuver: None,
                delta_v_symbolic: 0.0,
            };
        };

        let growth_label = self.classifier.growth_label(growth_rate);
        let direction = self.labeler.label(velocity.dx, velocity.dy);
        let prediction = self.predictor.predict(target.position, velocity);
        let status = self.classifier.classify(
            true,
            prediction.is_intercept,
            self.classifier.is_approaching(growth_rate),
        );
        let maneuver = self.advisor.advise(status, velocity);
        let delta_v_symbolic = if maneuver.is_some() {
            self.advisor.delta_v()
        } else {
            0.0
        };
        if let Some(maneuver) = maneuver {
            debug!(
                "tick {} {} at distance {:.1}: {}",
                tick, status, prediction.distance, maneuver
            );
        }

        Advisory {
            tick,
            status,
            target: Some(target),
            velocity,
            growth_rate,
            direction: Some(direction),
            growth_label,
            predicted_point: Some(prediction.point),
            distance_to_reference: Some(prediction.distance),
            maneuver,
            delta_v_symbolic,
        }
    }
}
