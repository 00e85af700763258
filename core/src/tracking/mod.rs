pub mod classifier;
pub mod direction;
pub mod evasion;
pub mod growth;
pub mod predictor;
pub mod velocity;
pub mod window;

pub use classifier::{GrowthLabel, ThreatClassifier, ThreatStatus};
pub use direction::{DirectionLabel, DirectionLabeler, Horizontal, Vertical};
pub use evasion::{EvasionAdvisor, Maneuver};
pub use growth::GrowthEstimator;
pub use predictor::{CollisionPredictor, Prediction};
pub use velocity::{Velocity, VelocityEstimator};
pub use window::SampleWindow;
