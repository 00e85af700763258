use crate::math::stats::StatsHelper;
use crate::prelude::{EngineConfig, MinimumHistory, WindowEstimator};
use crate::tracking::window::SampleWindow;

/// Apparent-size trend: mean of the newest `span` valid radii minus mean of
/// the oldest `span` valid radii. Positive means the target is closing.
///
/// With fewer than `2 * span` valid samples the two sets share entries and
/// the estimate is attenuated; with exactly `span` it is always zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthEstimator {
    span: usize,
    min_history: MinimumHistory,
}

impl GrowthEstimator {
    pub fn new(span: usize, min_history: MinimumHistory) -> Self {
        Self { span, min_history }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.growth_span, config.growth_min_history)
    }
}

impl WindowEstimator for GrowthEstimator {
    type Output = f64;

    fn estimate(&self, window: &SampleWindow) -> f64 {
        if self.span == 0 || !self.min_history.is_met_by(window) {
            return 0.0;
        }

        let radii: Vec<f64> = window.valid_entries().map(|d| d.radius).collect();
        if radii.len() < self.span {
            return 0.0;
        }

        let newest = StatsHelper::mean(&radii[..self.span]);
        let oldest = StatsHelper::mean(&radii[radii.len() - self.span..]);
        newest - oldest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::Detection;

    fn window_of(radii: &[Option<f64>]) -> SampleWindow {
        let mut window = SampleWindow::with_capacity(32);
        for radius in radii {
            window.push(radius.map(|r| Detection::new((0.0, 0.0), r)));
        }
        window
    }

    #[test]
    fn cold_start_is_neutral() {
        let estimator = GrowthEstimator::from_config(&EngineConfig::default());
        let four: Vec<_> = (0..4).map(|i| Some(10.0 + i as f64)).collect();
        assert_eq!(estimator.estimate(&window_of(&four)), 0.0);
    }

    #[test]
    fn enlarging_target_has_positive_growth() {
        let estimator = GrowthEstimator::from_config(&EngineConfig::default());
        let radii: Vec<_> = (0..10).map(|i| Some(15.0 + i as f64)).collect();
        // newest five average 22, oldest five average 17
        assert_eq!(estimator.estimate(&window_of(&radii)), 5.0);
    }

    #[test]
    fn shrinking_target_has_negative_growth() {
        let estimator = GrowthEstimator::from_config(&EngineConfig::default());
        let radii: Vec<_> = (0..10).map(|i| Some(40.0 - 2.0 * i as f64)).collect();
        assert_eq!(estimator.estimate(&window_of(&radii)), -10.0);
    }

    #[test]
    fn known_edge_case_overlapping_spans_attenuate() {
        let estimator = GrowthEstimator::from_config(&EngineConfig::default());

        // Exactly five samples: both spans are the same set.
        let five: Vec<_> = (0..5).map(|i| Some(20.0 + i as f64)).collect();
        assert_eq!(estimator.estimate(&window_of(&five)), 0.0);

        // Six samples: spans share four entries, growth shrinks to 1/5 of the
        // full-window value.
        let six: Vec<_> = (0..6).map(|i| Some(20.0 + i as f64)).collect();
        assert!((estimator.estimate(&window_of(&six)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn gaps_do_not_count_as_samples() {
        let estimator = GrowthEstimator::from_config(&EngineConfig::default());
        let radii = [
            Some(10.0),
            None,
            Some(11.0),
            None,
            Some(12.0),
            None,
            Some(13.0),
        ];
        assert_eq!(estimator.estimate(&window_of(&radii)), 0.0);
    }
}
