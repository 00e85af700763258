pub mod metrics;
pub mod transitions;

pub use metrics::{MetricsRecorder, TickCounters};
pub use transitions::{EventLevel, StatusEvent, TransitionLog};
