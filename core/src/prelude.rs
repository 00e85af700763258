use serde::{Deserialize, Serialize};

use crate::tracking::window::SampleWindow;

/// How a minimum-history rule counts the slots of the window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HistoryCounting {
    /// Only entries holding a detection count.
    Valid,
    /// Every occupied slot counts, gaps included.
    Total,
}

/// Minimum amount of history an estimator needs before it reports anything
/// other than its neutral value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MinimumHistory {
    pub samples: usize,
    pub counting: HistoryCounting,
}

impl MinimumHistory {
    pub fn valid(samples: usize) -> Self {
        Self {
            samples,
            counting: HistoryCounting::Valid,
        }
    }

    pub fn total(samples: usize) -> Self {
        Self {
            samples,
            counting: HistoryCounting::Total,
        }
    }

    pub fn is_met_by(&self, window: &SampleWindow) -> bool {
        let available = match self.counting {
            HistoryCounting::Valid => window.valid_count(),
            HistoryCounting::Total => window.len(),
        };
        available >= self.samples
    }
}

/// Which growth labels the classifier distinguishes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GrowthLabeling {
    /// APPROACHING / STABLE / RECEDING.
    ThreeWay,
    /// APPROACHING / STABLE only.
    TwoWay,
}

/// Shared configuration for the tracking engine and its estimators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub capacity: usize,
    /// Number of most-recent valid samples the velocity estimator differences.
    pub velocity_lookback: usize,
    pub velocity_min_history: MinimumHistory,
    /// Number of radii averaged at each end of the window.
    pub growth_span: usize,
    pub growth_min_history: MinimumHistory,
    pub growth_threshold: f64,
    pub growth_labeling: GrowthLabeling,
    /// Deadzone applied per axis by the direction labeler, in px/tick.
    pub movement_threshold: i64,
    pub prediction_ticks: u32,
    pub reference: (f64, f64),
    pub collision_radius: f64,
    /// Placeholder thrust magnitude reported with every maneuver (km/s).
    pub delta_v_symbolic: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: 32,
            velocity_lookback: 5,
            velocity_min_history: MinimumHistory::valid(2),
            growth_span: 5,
            growth_min_history: MinimumHistory::valid(5),
            growth_threshold: 0.5,
            growth_labeling: GrowthLabeling::ThreeWay,
            movement_threshold: 2,
            prediction_ticks: 15,
            reference: (320.0, 240.0),
            collision_radius: 80.0,
            delta_v_symbolic: 1.24,
        }
    }
}

impl EngineConfig {
    /// Preset matching the colour-segmentation front end: nine-step velocity
    /// smoothing that waits for ten slots of history.
    pub fn color_fed() -> Self {
        Self {
            velocity_lookback: 10,
            velocity_min_history: MinimumHistory::total(10),
            growth_min_history: MinimumHistory::total(10),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "window capacity must be at least 1".into(),
            ));
        }
        if self.velocity_lookback < 2 {
            return Err(EngineError::InvalidConfig(format!(
                "velocity lookback {} cannot form a difference",
                self.velocity_lookback
            )));
        }
        if self.growth_span == 0 {
            return Err(EngineError::InvalidConfig(
                "growth span must be at least 1".into(),
            ));
        }
        let history = [
            ("growth span", self.growth_span),
            ("growth minimum history", self.growth_min_history.samples),
            ("velocity minimum history", self.velocity_min_history.samples),
        ];
        if let Some((name, samples)) = history.iter().find(|(_, n)| *n > self.capacity) {
            return Err(EngineError::InvalidConfig(format!(
                "{} of {} samples cannot fit a window of {}",
                name, samples, self.capacity
            )));
        }
        if self.movement_threshold < 0 {
            return Err(EngineError::InvalidConfig(format!(
                "movement threshold {} is negative",
                self.movement_threshold
            )));
        }

        let finite = [
            ("growth_threshold", self.growth_threshold),
            ("reference.x", self.reference.0),
            ("reference.y", self.reference.1),
            ("collision_radius", self.collision_radius),
            ("delta_v_symbolic", self.delta_v_symbolic),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EngineError::InvalidConfig(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }
        if self.growth_threshold < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "growth threshold {} is negative",
                self.growth_threshold
            )));
        }
        if self.collision_radius <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "collision radius {} must be positive",
                self.collision_radius
            )));
        }
        Ok(())
    }
}

/// Common error type for the core's boundary checks.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid detection: {0}")]
    InvalidDetection(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Estimators that derive a value from the window without mutating it.
pub trait WindowEstimator {
    type Output;

    fn estimate(&self, window: &SampleWindow) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(EngineConfig::color_fed().validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = EngineConfig {
            capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn history_longer_than_window_is_rejected() {
        let config = EngineConfig {
            capacity: 4,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("growth span of 5"));

        let config = EngineConfig {
            capacity: 8,
            ..EngineConfig::color_fed()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("minimum history of 10"));
    }

    #[test]
    fn non_finite_reference_is_rejected() {
        let config = EngineConfig {
            reference: (f64::NAN, 240.0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reference.x"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"capacity": 16, "growth_labeling": "two_way"}"#).unwrap();
        assert_eq!(config.capacity, 16);
        assert_eq!(config.growth_labeling, GrowthLabeling::TwoWay);
        assert_eq!(config.collision_radius, 80.0);
    }

    #[test]
    fn minimum_history_counts_gaps_only_when_total() {
        let mut window = SampleWindow::with_capacity(4);
        window.push(None);
        window.push(None);
        assert!(MinimumHistory::total(2).is_met_by(&window));
        assert!(!MinimumHistory::valid(1).is_met_by(&window));
    }
}
