use serde::{Deserialize, Serialize};

use crate::math::geometry::GeometryHelper;
use crate::prelude::EngineConfig;
use crate::tracking::velocity::Velocity;

/// Outcome of one constant-velocity extrapolation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub point: (f64, f64),
    pub distance: f64,
    pub is_intercept: bool,
}

/// Projects the target `lookahead` ticks forward and tests it against the
/// protected zone around `reference`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPredictor {
    lookahead: u32,
    reference: (f64, f64),
    radius: f64,
}

impl CollisionPredictor {
    pub fn new(lookahead: u32, reference: (f64, f64), radius: f64) -> Self {
        Self {
            lookahead,
            reference,
            radius,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.prediction_ticks,
            config.reference,
            config.collision_radius,
        )
    }

    pub fn predict(&self, position: (f64, f64), velocity: Velocity) -> Prediction {
        let point = GeometryHelper::extrapolate(position, velocity.as_f64(), self.lookahead as f64);
        let distance = GeometryHelper::distance(point, self.reference);
        Prediction {
            point,
            distance,
            is_intercept: distance < self.radius,
        }
    }
}
