use aadescore::sensor::{BoundingBox, BoxFilter};
use anyhow::ensure;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Confidence given to decoys meant to fail the confidence gate.
const DECOY_CONFIDENCE: f64 = 0.2;

/// Longest scenario a single request may render.
pub const MAX_SCENARIO_TICKS: usize = 100_000;

/// Synthetic straight-line encounter rendered as per-tick detector output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ticks: usize,
    pub start: (f64, f64),
    /// Pixels per tick.
    pub velocity: (f64, f64),
    pub start_radius: f64,
    /// Radius change per tick; positive means closing.
    pub radius_growth: f64,
    /// Uniform position noise amplitude in pixels.
    pub jitter: f64,
    /// Probability that a tick produces no usable detection.
    pub dropout: f64,
    /// Probability of an extra box that the filter must reject.
    pub clutter: f64,
    pub confidence: f64,
    pub seed: u64,
    pub filter: BoxFilter,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            ticks: 60,
            start: (560.0, 80.0),
            velocity: (-4.0, 3.0),
            start_radius: 12.0,
            radius_growth: 0.4,
            jitter: 0.0,
            dropout: 0.0,
            clutter: 0.0,
            confidence: 0.85,
            seed: 0,
            filter: BoxFilter::default(),
        }
    }
}

impl ScenarioConfig {
    fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.ticks > 0, "scenario needs at least one tick");
        ensure!(
            self.ticks <= MAX_SCENARIO_TICKS,
            "scenario of {} ticks exceeds the limit of {}",
            self.ticks,
            MAX_SCENARIO_TICKS
        );
        ensure!(
            (0.0..=1.0).contains(&self.dropout),
            "dropout {} outside [0, 1]",
            self.dropout
        );
        ensure!(
            (0.0..=1.0).contains(&self.clutter),
            "clutter {} outside [0, 1]",
            self.clutter
        );
        ensure!(
            self.jitter.is_finite() && self.jitter >= 0.0,
            "jitter {} must be a non-negative number",
            self.jitter
        );
        ensure!(
            self.start_radius.is_finite() && self.start_radius > 0.0,
            "start radius {} must be positive",
            self.start_radius
        );
        Ok(())
    }
}

fn round_box(centre: (f64, f64), radius: f64, confidence: f64) -> BoundingBox {
    BoundingBox {
        x1: centre.0 - radius,
        y1: centre.1 - radius,
        x2: centre.0 + radius,
        y2: centre.1 + radius,
        confidence,
    }
}

fn decoy(rng: &mut StdRng, near: (f64, f64)) -> BoundingBox {
    let centre = (
        near.0 + rng.gen_range(-120.0..120.0),
        near.1 + rng.gen_range(-120.0..120.0),
    );
    if rng.gen_bool(0.5) {
        round_box(centre, 10.0, DECOY_CONFIDENCE)
    } else {
        // Elongated streak: confident but fails the aspect-ratio gate.
        BoundingBox {
            x1: centre.0 - 30.0,
            y1: centre.1 - 5.0,
            x2: centre.0 + 30.0,
            y2: centre.1 + 5.0,
            confidence: 0.9,
        }
    }
}

/// Builds one list of boxes per tick, in detector order.
pub fn build_frames(config: &ScenarioConfig) -> anyhow::Result<Vec<Vec<BoundingBox>>> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut frames = Vec::with_capacity(config.ticks);

    for tick in 0..config.ticks {
        let t = tick as f64;
        let mut centre = (
            config.start.0 + config.velocity.0 * t,
            config.start.1 + config.velocity.1 * t,
        );
        if config.jitter > 0.0 {
            centre.0 += rng.gen_range(-config.jitter..=config.jitter);
            centre.1 += rng.gen_range(-config.jitter..=config.jitter);
        }
        let radius = (config.start_radius + config.radius_growth * t).max(1.0);

        let mut frame = Vec::with_capacity(2);
        if rng.gen_bool(config.clutter) {
            frame.push(decoy(&mut rng, centre));
        }
        if !rng.gen_bool(config.dropout) {
            frame.push(round_box(centre, radius, config.confidence));
        }
        frames.push(frame);
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_frame_per_tick() {
        let frames = build_frames(&ScenarioConfig::default()).unwrap();
        assert_eq!(frames.len(), 60);
        assert!(frames.iter().all(|frame| frame.len() == 1));
        let first = frames[0][0];
        assert_eq!((first.x1 + first.x2) / 2.0, 560.0);
        assert_eq!(first.width(), 24.0);
    }

    #[test]
    fn same_seed_reproduces_frames() {
        let config = ScenarioConfig {
            jitter: 2.0,
            dropout: 0.3,
            clutter: 0.3,
            seed: 42,
            ..Default::default()
        };
        assert_eq!(build_frames(&config).unwrap(), build_frames(&config).unwrap());
    }

    #[test]
    fn full_dropout_leaves_empty_frames() {
        let config = ScenarioConfig {
            ticks: 10,
            dropout: 1.0,
            ..Default::default()
        };
        let frames = build_frames(&config).unwrap();
        assert!(frames.iter().all(Vec::is_empty));
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let config = ScenarioConfig {
            dropout: 1.5,
            ..Default::default()
        };
        let err = build_frames(&config).unwrap_err();
        assert!(err.to_string().contains("dropout"));
    }

    #[test]
    fn oversized_scenario_is_rejected_before_allocating() {
        let config = ScenarioConfig {
            ticks: usize::MAX / 2,
            ..Default::default()
        };
        let err = build_frames(&config).unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));

        let at_limit = ScenarioConfig {
            ticks: MAX_SCENARIO_TICKS,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
    }
}
