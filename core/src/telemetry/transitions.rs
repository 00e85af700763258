use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::advisory::Advisory;
use crate::tracking::ThreatStatus;

const DEFAULT_RETAINED: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventLevel {
    Info,
    Critical,
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventLevel::Info => "INFO",
            EventLevel::Critical => "CRITICAL",
        })
    }
}

/// A status change worth reporting to an operator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusEvent {
    pub tick: u64,
    pub level: EventLevel,
    pub message: String,
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[tick {:05}] {}: {}", self.tick, self.level, self.message)
    }
}

/// Reports status transitions and keeps the most recent ones.
///
/// The remembered status only decides whether to report; it never feeds
/// back into classification.
pub struct TransitionLog {
    last_status: Option<ThreatStatus>,
    recent: VecDeque<StatusEvent>,
    retained: usize,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::with_retention(DEFAULT_RETAINED)
    }

    pub fn with_retention(retained: usize) -> Self {
        Self {
            last_status: None,
            recent: VecDeque::with_capacity(retained),
            retained,
        }
    }

    pub fn observe(&mut self, advisory: &Advisory) -> Option<StatusEvent> {
        if self.last_status == Some(advisory.status) {
            return None;
        }
        self.last_status = Some(advisory.status);

        let maneuver = advisory
            .maneuver
            .map(|m| m.to_string())
            .unwrap_or_else(|| "NONE".to_string());
        let event = StatusEvent {
            tick: advisory.tick,
            level: if advisory.status.is_critical() {
                EventLevel::Critical
            } else {
                EventLevel::Info
            },
            message: format!("Status Change: {} - Maneuver: {}", advisory.status, maneuver),
        };

        match event.level {
            EventLevel::Critical => warn!("{}", event),
            EventLevel::Info => info!("{}", event),
        }

        if self.retained > 0 {
            if self.recent.len() == self.retained {
                self.recent.pop_front();
            }
            self.recent.push_back(event.clone());
        }
        Some(event)
    }

    /// Retained events, newest first.
    pub fn recent(&self) -> Vec<StatusEvent> {
        self.recent.iter().rev().cloned().collect()
    }

    pub fn reset(&mut self) {
        self.last_status = None;
        self.recent.clear();
    }
}

impl Default for TransitionLog {
    fn default() -> Self {
        Self::new()
    }
}
