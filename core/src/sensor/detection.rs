use serde::{Deserialize, Serialize};

use crate::prelude::{EngineError, EngineResult};

/// A single observed target at one tick: centre position and apparent radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Detection {
    pub position: (f64, f64),
    pub radius: f64,
}

impl Detection {
    pub fn new(position: (f64, f64), radius: f64) -> Self {
        Self { position, radius }
    }

    pub fn x(&self) -> f64 {
        self.position.0
    }

    pub fn y(&self) -> f64 {
        self.position.1
    }
}

/// Raw per-tick report handed over by a perception stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SensorReport {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    #[serde(default = "full_confidence")]
    pub confidence: f64,
}

fn full_confidence() -> f64 {
    1.0
}

impl TryFrom<SensorReport> for Detection {
    type Error = EngineError;

    fn try_from(report: SensorReport) -> EngineResult<Self> {
        if !report.x.is_finite() || !report.y.is_finite() {
            return Err(EngineError::InvalidDetection(format!(
                "non-finite position ({}, {})",
                report.x, report.y
            )));
        }
        if !(report.radius.is_finite() && report.radius > 0.0) {
            return Err(EngineError::InvalidDetection(format!(
                "radius {} must be positive",
                report.radius
            )));
        }
        Ok(Detection::new((report.x, report.y), report.radius))
    }
}
