use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tracking::classifier::ThreatStatus;
use crate::tracking::direction::{Horizontal, Vertical};
use crate::tracking::velocity::Velocity;

/// Discrete dodge instruction for the protected platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Maneuver {
    pub axis_x: Horizontal,
    pub axis_y: Vertical,
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "THRUST {}-{}", self.axis_x.as_str(), self.axis_y.as_str())
    }
}

/// Steers against the target's observed heading. The thrust magnitude is a
/// fixed placeholder until a physical model replaces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvasionAdvisor {
    delta_v: f64,
}

impl EvasionAdvisor {
    pub fn new(delta_v: f64) -> Self {
        Self { delta_v }
    }

    pub fn delta_v(&self) -> f64 {
        self.delta_v
    }

    pub fn advise(&self, status: ThreatStatus, velocity: Velocity) -> Option<Maneuver> {
        if !status.is_critical() {
            return None;
        }
        let axis_x = if velocity.dx < 0 {
            Horizontal::Right
        } else {
            Horizontal::Left
        };
        let axis_y = if velocity.dy < 0 {
            Vertical::Down
        } else {
            Vertical::Up
        };
        Some(Maneuver { axis_x, axis_y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_collision_course_gets_a_maneuver() {
        let advisor = EvasionAdvisor::new(1.24);
        for status in [
            ThreatStatus::Scanning,
            ThreatStatus::Tracking,
            ThreatStatus::IntersectSafe,
        ] {
            assert!(advisor.advise(status, Velocity::new(-3, 3)).is_none());
        }
        assert!(advisor
            .advise(ThreatStatus::CollisionCourse, Velocity::new(-3, 3))
            .is_some());
    }

    #[test]
    fn dodge_opposes_observed_heading() {
        let advisor = EvasionAdvisor::new(1.24);
        let maneuver = advisor
            .advise(ThreatStatus::CollisionCourse, Velocity::new(-2, -1))
            .unwrap();
        assert_eq!(maneuver.axis_x, Horizontal::Right);
        assert_eq!(maneuver.axis_y, Vertical::Down);
        assert_eq!(maneuver.to_string(), "THRUST RIGHT-DOWN");
    }

    #[test]
    fn zero_velocity_dodges_left_and_up() {
        let advisor = EvasionAdvisor::new(1.24);
        let maneuver = advisor
            .advise(ThreatStatus::CollisionCourse, Velocity::ZERO)
            .unwrap();
        assert_eq!(maneuver.axis_x, Horizontal::Left);
        assert_eq!(maneuver.axis_y, Vertical::Up);
    }
}
