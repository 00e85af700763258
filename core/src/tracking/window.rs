use std::collections::VecDeque;

use crate::sensor::Detection;

/// Fixed-capacity history of per-tick observations, newest first.
///
/// A missed tick occupies a slot as `None`, so slot index always equals the
/// number of ticks elapsed since that observation.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWindow {
    entries: VecDeque<Option<Detection>>,
    capacity: usize,
}

impl SampleWindow {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records one tick, evicting the oldest slot when full.
    pub fn push(&mut self, detection: Option<Detection>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(detection);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn newest(&self) -> Option<&Detection> {
        self.entries.front().and_then(Option::as_ref)
    }

    /// Every slot, gaps included, newest first.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Detection>> + '_ {
        self.entries.iter().map(Option::as_ref)
    }

    /// Non-gap entries in window order.
    pub fn valid_entries(&self) -> impl Iterator<Item = &Detection> + '_ {
        self.entries.iter().flatten()
    }

    pub fn valid_count(&self) -> usize {
        self.valid_entries().count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
