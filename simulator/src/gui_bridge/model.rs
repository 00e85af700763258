use aadescore::tracking::ThreatStatus;
use aadescore::Advisory;
use serde::{Deserialize, Serialize};

/// Nominal stand-off used to turn apparent radius into a display distance.
const DISPLAY_RANGE_M: f64 = 500.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    High,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackedObject {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub distance: String,
    pub risk: RiskLevel,
}

/// Flattened copy of the latest advisory for dashboards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelemetrySnapshot {
    pub objects_detected: u8,
    pub critical_threats: u8,
    pub system_status: String,
    pub maneuver: String,
    pub delta_v: String,
    pub detected_objects: Vec<TrackedObject>,
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self {
            objects_detected: 0,
            critical_threats: 0,
            system_status: "OK".into(),
            maneuver: "NONE".into(),
            delta_v: "0.000".into(),
            detected_objects: Vec::new(),
        }
    }
}

impl TelemetrySnapshot {
    pub fn from_advisory(advisory: &Advisory) -> Self {
        let maneuver = match (advisory.status, advisory.maneuver) {
            (ThreatStatus::CollisionCourse, Some(maneuver)) => maneuver.to_string(),
            (ThreatStatus::Tracking, _) => "MAINTAIN".to_string(),
            _ => "NONE".to_string(),
        };
        let delta_v = if advisory.maneuver.is_some() {
            format!("{:.3} km/s", advisory.delta_v_symbolic)
        } else {
            "0.000".to_string()
        };
        let detected_objects = advisory
            .target
            .map(|target| {
                let risk = match advisory.status {
                    ThreatStatus::CollisionCourse => RiskLevel::Critical,
                    ThreatStatus::IntersectSafe => RiskLevel::High,
                    _ => RiskLevel::Low,
                };
                vec![TrackedObject {
                    id: "OBJ_001".into(),
                    kind: "debris".into(),
                    distance: format!("{:.2}m", DISPLAY_RANGE_M - target.radius * 2.0),
                    risk,
                }]
            })
            .unwrap_or_default();

        Self {
            objects_detected: u8::from(advisory.has_target()),
            critical_threats: u8::from(advisory.status.is_critical()),
            system_status: advisory.status.message().to_string(),
            maneuver,
            delta_v,
            detected_objects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aadescore::{Detection, EngineConfig, TrackingEngine};

    #[test]
    fn scanning_snapshot_is_empty() {
        let mut engine = TrackingEngine::new(EngineConfig::default()).unwrap();
        let snapshot = TelemetrySnapshot::from_advisory(&engine.tick(None));
        assert_eq!(snapshot.objects_detected, 0);
        assert_eq!(snapshot.system_status, "SCANNING SECTOR...");
        assert_eq!(snapshot.maneuver, "NONE");
        assert!(snapshot.detected_objects.is_empty());
    }

    #[test]
    fn collision_snapshot_carries_maneuver() {
        let mut engine = TrackingEngine::new(EngineConfig::default()).unwrap();
        let mut last = None;
        for i in 0..10 {
            let x = 348.0 - 2.0 * i as f64;
            last = Some(engine.tick(Some(Detection::new((x, 240.0), 15.0 + i as f64))));
        }
        let snapshot = TelemetrySnapshot::from_advisory(&last.unwrap());
        assert_eq!(snapshot.critical_threats, 1);
        assert_eq!(snapshot.maneuver, "THRUST RIGHT-UP");
        assert_eq!(snapshot.delta_v, "1.240 km/s");
        assert_eq!(snapshot.detected_objects[0].distance, "452.00m");
        assert_eq!(snapshot.detected_objects[0].risk, RiskLevel::Critical);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["detected_objects"][0]["type"], "debris");
    }

    #[test]
    fn tracking_snapshot_maintains_course() {
        let mut engine = TrackingEngine::new(EngineConfig::default()).unwrap();
        let advisory = engine.tick(Some(Detection::new((10.0, 10.0), 20.0)));
        let snapshot = TelemetrySnapshot::from_advisory(&advisory);
        assert_eq!(snapshot.maneuver, "MAINTAIN");
        assert_eq!(snapshot.delta_v, "0.000");
        assert_eq!(snapshot.detected_objects[0].risk, RiskLevel::Low);
    }
}
