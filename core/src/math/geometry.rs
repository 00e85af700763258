pub struct GeometryHelper;

impl GeometryHelper {
    pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
        (a.0 - b.0).hypot(a.1 - b.1)
    }

    /// Straight-line extrapolation of `origin` by `steps` increments of `step`.
    pub fn extrapolate(origin: (f64, f64), step: (f64, f64), steps: f64) -> (f64, f64) {
        (origin.0 + step.0 * steps, origin.1 + step.1 * steps)
    }
}
