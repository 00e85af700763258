use serde::{Deserialize, Serialize};

use crate::sensor::Detection;
use crate::tracking::{DirectionLabel, GrowthLabel, Maneuver, ThreatStatus, Velocity};

/// Everything the engine decided for one tick. Owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advisory {
    pub tick: u64,
    pub status: ThreatStatus,
    /// The detection this tick was judged on, if any.
    pub target: Option<Detection>,
    /// Zero, with a STABLE growth label, on a missed tick.
    pub velocity: Velocity,
    pub growth_rate: f64,
    pub direction: Option<DirectionLabel>,
    pub growth_label: GrowthLabel,
    pub predicted_point: Option<(f64, f64)>,
    pub distance_to_reference: Option<f64>,
    pub maneuver: Option<Maneuver>,
    pub delta_v_symbolic: f64,
}

impl Advisory {
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// HUD vector line, e.g. `V: LEFT UP | Z: APPROACHING`.
    pub fn vector_text(&self) -> String {
        match self.direction {
            Some(direction) => format!("V: {} | Z: {}", direction, self.growth_label),
            None => "NO TARGET".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::{Horizontal, Vertical};

    fn scanning() -> Advisory {
        Advisory {
            tick: 0,
            status: ThreatStatus::Scanning,
            target: None,
            velocity: Velocity::ZERO,
            growth_rate: 0.0,
            direction: None,
            growth_label: GrowthLabel::Stable,
            predicted_point: None,
            distance_to_reference: None,
            maneuver: None,
            delta_v_symbolic: 0.0,
        }
    }

    #[test]
    fn vector_text_reports_missing_target() {
        assert_eq!(scanning().vector_text(), "NO TARGET");
    }

    #[test]
    fn vector_text_joins_heading_and_trend() {
        let advisory = Advisory {
            direction: Some(DirectionLabel::LeftUp),
            growth_label: GrowthLabel::Approaching,
            ..scanning()
        };
        assert_eq!(advisory.vector_text(), "V: LEFT UP | Z: APPROACHING");
    }

    #[test]
    fn serializes_with_screaming_case_labels() {
        let advisory = Advisory {
            status: ThreatStatus::CollisionCourse,
            maneuver: Some(Maneuver {
                axis_x: Horizontal::Right,
                axis_y: Vertical::Up,
            }),
            ..scanning()
        };
        let value = serde_json::to_value(&advisory).unwrap();
        assert_eq!(value["status"], "COLLISION_COURSE");
        assert_eq!(value["maneuver"]["axis_x"], "RIGHT");
        assert_eq!(value["growth_label"], "STABLE");
    }
}
