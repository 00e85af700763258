//! Kinematic tracking and collision-decision core for the AADES platform.
//!
//! A detector hands the engine one detection (or a miss) per tick; the
//! engine keeps a fixed window of history and answers with an advisory:
//! threat status, heading, closing trend and, when needed, a dodge.

pub mod advisory;
pub mod engine;
pub mod math;
pub mod prelude;
pub mod sensor;
pub mod telemetry;
pub mod tracking;

pub use advisory::Advisory;
pub use engine::TrackingEngine;
pub use prelude::{EngineConfig, EngineError, EngineResult};
pub use sensor::{Detection, DetectionSource, SensorReport};
