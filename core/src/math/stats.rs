pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    /// Mean rounded toward zero, the way integer pixel velocities are formed.
    pub fn truncated_mean(samples: &[f64]) -> i64 {
        Self::mean(samples).trunc() as i64
    }
}
