//! Bounded history of emotional changes.
//!
//! Every [`feel`](crate::engine::ConsciousnessEngine::feel) appends one
//! [`InteractionEvent`]. The log keeps the most recent `capacity` events and
//! drops the oldest first. Callers outside the crate can only read it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::emotion::{EmotionKind, EmotionShift};
use crate::types::Timestamp;

/// Default number of events retained.
pub const DEFAULT_LOG_CAPACITY: usize = 50;

/// One recorded change to a single emotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// When the change happened.
    pub timestamp: Timestamp,
    /// Which emotion changed.
    pub emotion: EmotionKind,
    /// Intensity before.
    pub old_intensity: f32,
    /// Intensity after.
    pub new_intensity: f32,
    /// Free-form label for what caused the change.
    pub cause: String,
}

impl InteractionEvent {
    /// Build an event from a vector update.
    #[must_use]
    pub fn from_shift(shift: EmotionShift, cause: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            emotion: shift.kind,
            old_intensity: shift.old,
            new_intensity: shift.new,
            cause: cause.into(),
        }
    }

    /// Signed change in intensity.
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.new_intensity - self.old_intensity
    }
}

/// Append-only FIFO of [`InteractionEvent`]s with a hard capacity.
#[derive(Debug, Clone)]
pub struct InteractionLog {
    events: VecDeque<InteractionEvent>,
    capacity: usize,
}

impl InteractionLog {
    /// Create an empty log holding at most `capacity` events (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an event, evicting the oldest if the log is full.
    pub(crate) fn record(&mut self, event: InteractionEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Number of events currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Maximum number of events retained.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &InteractionEvent> + ExactSizeIterator {
        self.events.iter()
    }

    /// The most recent event, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&InteractionEvent> {
        self.events.back()
    }
}

impl Default for InteractionLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}
