use serde::{Deserialize, Serialize};
use std::fmt;

use crate::prelude::{EngineConfig, GrowthLabeling};

/// Per-tick threat classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatStatus {
    Scanning,
    Tracking,
    IntersectSafe,
    CollisionCourse,
}

impl ThreatStatus {
    /// Operator-facing status line.
    pub fn message(self) -> &'static str {
        match self {
            ThreatStatus::Scanning => "SCANNING SECTOR...",
            ThreatStatus::Tracking => "TRACKING TARGET",
            ThreatStatus::IntersectSafe => "TRAJECTORY INTERSECT (SAFE)",
            ThreatStatus::CollisionCourse => "COLLISION COURSE",
        }
    }

    pub fn is_critical(self) -> bool {
        self == ThreatStatus::CollisionCourse
    }
}

impl fmt::Display for ThreatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Line-of-sight trend derived from the growth rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrowthLabel {
    Approaching,
    Stable,
    Receding,
}

impl fmt::Display for GrowthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GrowthLabel::Approaching => "APPROACHING",
            GrowthLabel::Stable => "STABLE",
            GrowthLabel::Receding => "RECEDING",
        })
    }
}

/// Stateless classifier: every tick is judged from its own inputs only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatClassifier {
    growth_threshold: f64,
    labeling: GrowthLabeling,
}

impl ThreatClassifier {
    pub fn new(growth_threshold: f64, labeling: GrowthLabeling) -> Self {
        Self {
            growth_threshold,
            labeling,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.growth_threshold, config.growth_labeling)
    }

    pub fn is_approaching(&self, growth_rate: f64) -> bool {
        growth_rate > self.growth_threshold
    }

    pub fn growth_label(&self, growth_rate: f64) -> GrowthLabel {
        if self.is_approaching(growth_rate) {
            GrowthLabel::Approaching
        } else if self.labeling == GrowthLabeling::ThreeWay
            && growth_rate < -self.growth_threshold
        {
            GrowthLabel::Receding
        } else {
            GrowthLabel::Stable
        }
    }

    pub fn classify(
        &self,
        has_target: bool,
        is_intercept: bool,
        is_approaching: bool,
    ) -> ThreatStatus {
        match (has_target, is_intercept, is_approaching) {
            (false, _, _) => ThreatStatus::Scanning,
            (true, false, _) => ThreatStatus::Tracking,
            (true, true, false) => ThreatStatus::IntersectSafe,
            (true, true, true) => ThreatStatus::CollisionCourse,
        }
    }
}
