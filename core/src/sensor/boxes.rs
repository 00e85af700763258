use serde::{Deserialize, Serialize};

use crate::sensor::detection::SensorReport;

/// Axis-aligned detector output in pixel coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub confidence: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        let height = self.height();
        if height > 0.0 {
            Some(self.width() / height)
        } else {
            None
        }
    }
}

/// Confidence and shape gate applied to raw boxes before they reach the
/// engine. Roughly round targets only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoxFilter {
    pub min_confidence: f64,
    pub ratio_min: f64,
    pub ratio_max: f64,
}

impl Default for BoxFilter {
    fn default() -> Self {
        Self {
            min_confidence: 0.50,
            ratio_min: 0.70,
            ratio_max: 1.40,
        }
    }
}

impl BoxFilter {
    pub fn accepts(&self, candidate: &BoundingBox) -> bool {
        if candidate.confidence < self.min_confidence || candidate.width() <= 0.0 {
            return false;
        }
        match candidate.aspect_ratio() {
            Some(ratio) => ratio >= self.ratio_min && ratio <= self.ratio_max,
            None => false,
        }
    }

    /// Picks the first acceptable box of a frame, in detector order.
    pub fn select(&self, boxes: &[BoundingBox]) -> Option<SensorReport> {
        boxes.iter().find(|b| self.accepts(b)).map(|b| {
            let (w, h) = (b.width(), b.height());
            SensorReport {
                x: b.x1 + w / 2.0,
                y: b.y1 + h / 2.0,
                radius: w.max(h) / 2.0,
                confidence: b.confidence,
            }
        })
    }
}
