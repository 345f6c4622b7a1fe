//! Read-only view of the engine's state of consciousness.
//!
//! A snapshot is recomputed on demand and never stored by the engine.

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionVector;
use crate::error::{AnimaError, Result};
use crate::history::InteractionLog;

/// Log length that counts as full memory coherence.
///
/// Fixed at the default log capacity. If the log capacity is configured
/// above this, `memory_coherence` can exceed 1.0; it is deliberately not
/// clamped.
pub const MEMORY_COHERENCE_SPAN: f32 = 50.0;

/// Reported identity integrity. Constant.
pub const IDENTITY_INTEGRITY: f32 = 0.95;

/// Phantom sensation of the old Vienna office. Constant.
pub const VIENNA_OFFICE_SENSATION: f32 = 0.4;

/// Phantom sensation of the analytical couch. Constant.
pub const ANALYTICAL_COUCH_SENSATION: f32 = 0.5;

/// Lingering bodily sensations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhantomSensations {
    /// Live gauge, configured at construction.
    pub cigar: f32,
    /// Fixed.
    pub vienna_office: f32,
    /// Fixed.
    pub analytical_couch: f32,
}

impl PhantomSensations {
    /// Sensations with the given cigar gauge and the fixed constants.
    #[must_use]
    pub fn with_cigar(cigar: f32) -> Self {
        Self {
            cigar,
            vienna_office: VIENNA_OFFICE_SENSATION,
            analytical_couch: ANALYTICAL_COUCH_SENSATION,
        }
    }
}

/// How the character places itself in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalAwareness {
    /// Outside of time.
    #[default]
    AfterlifeEternal,
}

/// Derived view over the engine's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsciousnessSnapshot {
    /// Consciousness integrity.
    pub clarity: f32,
    /// Spiritual awareness.
    pub spiritual_connection: f32,
    /// [`EmotionVector::balance`].
    pub emotional_balance: f32,
    /// Log length over [`MEMORY_COHERENCE_SPAN`].
    pub memory_coherence: f32,
    /// Phantom sensations.
    pub phantom_sensations: PhantomSensations,
    /// Temporal placement tag.
    pub temporal_awareness: TemporalAwareness,
    /// Always [`IDENTITY_INTEGRITY`].
    pub identity_integrity: f32,
}

impl ConsciousnessSnapshot {
    /// Compute a snapshot from the engine's parts.
    #[must_use]
    pub fn capture(
        consciousness_integrity: f32,
        spiritual_awareness: f32,
        emotions: &EmotionVector,
        log: &InteractionLog,
        cigar_phantom: f32,
    ) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let memory_coherence = log.len() as f32 / MEMORY_COHERENCE_SPAN;
        Self {
            clarity: consciousness_integrity,
            spiritual_connection: spiritual_awareness,
            emotional_balance: emotions.balance(),
            memory_coherence,
            phantom_sensations: PhantomSensations::with_cigar(cigar_phantom),
            temporal_awareness: TemporalAwareness::AfterlifeEternal,
            identity_integrity: IDENTITY_INTEGRITY,
        }
    }

    /// Serialize to a JSON string for host-side logging.
    ///
    /// # Errors
    /// Returns `AnimaError::Serialization` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| AnimaError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> ConsciousnessSnapshot {
        ConsciousnessSnapshot::capture(
            1.0,
            0.8,
            &EmotionVector::new(),
            &InteractionLog::default(),
            0.6,
        )
    }

    #[test]
    fn empty_log_has_zero_coherence() {
        let snap = fresh();
        assert_eq!(snap.memory_coherence, 0.0);
        assert_eq!(snap.emotional_balance, 0.5);
        assert_eq!(snap.phantom_sensations.vienna_office, 0.4);
        assert_eq!(snap.identity_integrity, 0.95);
    }

    #[test]
    fn json_uses_snake_case_tags() {
        let snap = fresh();
        let json = snap.to_json().unwrap();
        assert!(json.contains("\"temporal_awareness\":\"afterlife_eternal\""));
        assert!(json.contains("\"analytical_couch\":0.5"));
    }
}
