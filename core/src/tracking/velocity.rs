use serde::{Deserialize, Serialize};

use crate::math::stats::StatsHelper;
use crate::prelude::{EngineConfig, MinimumHistory, WindowEstimator};
use crate::tracking::window::SampleWindow;

/// Per-tick displacement estimate in whole pixels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Velocity {
    pub dx: i64,
    pub dy: i64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0, dy: 0 };

    pub fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    pub fn as_f64(&self) -> (f64, f64) {
        (self.dx as f64, self.dy as f64)
    }
}

/// Mean forward difference over the most recent valid samples.
///
/// Gaps are skipped, so a pair may straddle missed ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityEstimator {
    lookback: usize,
    min_history: MinimumHistory,
}

impl VelocityEstimator {
    pub fn new(lookback: usize, min_history: MinimumHistory) -> Self {
        Self {
            lookback,
            min_history,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.velocity_lookback, config.velocity_min_history)
    }
}

impl WindowEstimator for VelocityEstimator {
    type Output = Velocity;

    fn estimate(&self, window: &SampleWindow) -> Velocity {
        if !self.min_history.is_met_by(window) {
            return Velocity::ZERO;
        }

        let recent: Vec<(f64, f64)> = window
            .valid_entries()
            .take(self.lookback)
            .map(|d| d.position)
            .collect();
        if recent.len() < 2 {
            return Velocity::ZERO;
        }

        let (dxs, dys): (Vec<f64>, Vec<f64>) = recent
            .windows(2)
            .map(|pair| (pair[0].0 - pair[1].0, pair[0].1 - pair[1].1))
            .unzip();

        Velocity::new(
            StatsHelper::truncated_mean(&dxs),
            StatsHelper::truncated_mean(&dys),
        )
    }
}
