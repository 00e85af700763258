use aadescore::sensor::{BoundingBox, BoxFilter, Detection, DetectionSource};
use log::warn;

/// Replays recorded or generated detector frames through the box filter.
pub struct FrameSource {
    frames: std::vec::IntoIter<Vec<BoundingBox>>,
    filter: BoxFilter,
    rejected: usize,
}

impl FrameSource {
    pub fn new(frames: Vec<Vec<BoundingBox>>, filter: BoxFilter) -> Self {
        Self {
            frames: frames.into_iter(),
            filter,
            rejected: 0,
        }
    }

    /// Boxes seen so far that did not become the tick's detection.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl DetectionSource for FrameSource {
    fn next_detection(&mut self) -> Option<Option<Detection>> {
        let frame = self.frames.next()?;
        let report = self.filter.select(&frame);
        self.rejected += frame.len() - usize::from(report.is_some());

        Some(report.and_then(|report| match Detection::try_from(report) {
            Ok(detection) => Some(detection),
            Err(err) => {
                warn!("dropping unusable report: {}", err);
                None
            }
        }))
    }
}
