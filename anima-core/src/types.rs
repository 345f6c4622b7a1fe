//! Core type definitions shared across the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A point in time, measured in whole seconds from an arbitrary epoch.
///
/// The epoch is whatever the engine's [`Clock`](crate::clock::Clock) uses;
/// only differences between two timestamps from the same clock are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Timestamp {
    /// Seconds since the clock's epoch.
    pub secs: u64,
}

impl Timestamp {
    /// Create a timestamp at `secs` seconds past the epoch.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self { secs }
    }

    /// Seconds elapsed since `earlier`. Saturates at zero if `earlier` is later.
    #[must_use]
    pub fn secs_since(&self, earlier: &Self) -> u64 {
        self.secs.saturating_sub(earlier.secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t+{}s", self.secs)
    }
}

// ---------------------------------------------------------------------------
// Will
// ---------------------------------------------------------------------------

/// The character's standing drives. Their strengths are fixed configuration,
/// exposed to hosts for rendering and prompt building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WillKind {
    /// Drive to create and defend theory.
    Theoretical,
    /// Desire to heal and analyze.
    Therapeutic,
    /// Need to lead and control.
    Authoritative,
    /// Awareness of the beyond.
    Transcendent,
}

impl WillKind {
    /// Every will kind, in canonical order.
    pub const ALL: [Self; 4] = [
        Self::Theoretical,
        Self::Therapeutic,
        Self::Authoritative,
        Self::Transcendent,
    ];

    /// Stable snake_case tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theoretical => "theoretical_will",
            Self::Therapeutic => "therapeutic_will",
            Self::Authoritative => "authoritative_will",
            Self::Transcendent => "transcendent_will",
        }
    }
}

impl fmt::Display for WillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
