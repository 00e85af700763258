pub mod boxes;
pub mod detection;
pub mod source;

pub use boxes::{BoundingBox, BoxFilter};
pub use detection::{Detection, SensorReport};
pub use source::DetectionSource;
