use crate::sensor::detection::Detection;

/// Swappable perception front end feeding the engine one tick at a time.
///
/// The outer `Option` ends the stream; the inner one is the per-tick
/// detection, where `None` is a missed observation rather than an error.
pub trait DetectionSource {
    fn next_detection(&mut self) -> Option<Option<Detection>>;
}

impl<I> DetectionSource for I
where
    I: Iterator<Item = Option<Detection>>,
{
    fn next_detection(&mut self) -> Option<Option<Detection>> {
        self.next()
    }
}
