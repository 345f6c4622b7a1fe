//! Emotion kinds and the bounded emotion vector.
//!
//! The vector stores one intensity per [`EmotionKind`] in a fixed-size array
//! indexed by the kind's canonical position, so no kind can ever be missing.
//! Every write clamps to `[0.0, 1.0]`.

use std::collections::BTreeMap;
use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Scale applied to the positive-minus-negative sum in [`EmotionVector::balance`].
///
/// Tunable. Changing it changes every recorded balance value, so it is kept
/// at 0.1 for reproducibility with existing transcripts.
pub const BALANCE_SCALE: f32 = 0.1;

/// Default multiplicative decay applied once per tick.
pub const DEFAULT_DECAY: f32 = 0.95;

// ---------------------------------------------------------------------------
// EmotionKind
// ---------------------------------------------------------------------------

/// Closed set of named affective states.
///
/// Declaration order is the canonical order: it drives iteration, map
/// ordering, and tie-breaking in [`EmotionVector::dominant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionKind {
    /// Hunger to understand.
    IntellectualCuriosity,
    /// Contentment at a well-made interpretation.
    AnalyticalSatisfaction,
    /// Thrill of a new reading.
    InterpretiveExcitement,
    /// Sorrow for the patient's suffering.
    TherapeuticMelancholy,
    /// Irritation at professional slights.
    ProfessionalAnger,
    /// Revulsion at bad theory.
    TheoreticalDisgust,
    /// Disdain from a position of authority.
    AuthoritativeContempt,
    /// Dread of death.
    MortalityFear,
    /// Embarrassment over professional failings.
    ProfessionalShame,
    /// Guilt over therapeutic outcomes.
    TherapeuticGuilt,
    /// Compulsive worry.
    ObsessiveAnxiety,
    /// Pride in self and work.
    NarcissisticPride,
    /// Serenity of the beyond.
    SpiritualTranscendence,
}

impl EmotionKind {
    /// Number of emotion kinds.
    pub const COUNT: usize = 13;

    /// Every emotion kind, in canonical order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::IntellectualCuriosity,
        Self::AnalyticalSatisfaction,
        Self::InterpretiveExcitement,
        Self::TherapeuticMelancholy,
        Self::ProfessionalAnger,
        Self::TheoreticalDisgust,
        Self::AuthoritativeContempt,
        Self::MortalityFear,
        Self::ProfessionalShame,
        Self::TherapeuticGuilt,
        Self::ObsessiveAnxiety,
        Self::NarcissisticPride,
        Self::SpiritualTranscendence,
    ];

    /// Kinds counted on the positive side of [`EmotionVector::balance`].
    pub const POSITIVE: [Self; 5] = [
        Self::IntellectualCuriosity,
        Self::AnalyticalSatisfaction,
        Self::InterpretiveExcitement,
        Self::NarcissisticPride,
        Self::SpiritualTranscendence,
    ];

    /// Kinds counted on the negative side of [`EmotionVector::balance`].
    pub const NEGATIVE: [Self; 5] = [
        Self::ProfessionalAnger,
        Self::TheoreticalDisgust,
        Self::MortalityFear,
        Self::ObsessiveAnxiety,
        Self::TherapeuticGuilt,
    ];

    /// Position of this kind in [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this kind raises the emotional balance.
    #[must_use]
    pub fn is_positive(self) -> bool {
        Self::POSITIVE.contains(&self)
    }

    /// Whether this kind lowers the emotional balance.
    #[must_use]
    pub fn is_negative(self) -> bool {
        Self::NEGATIVE.contains(&self)
    }

    /// Stable snake_case tag, identical to the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IntellectualCuriosity => "intellectual_curiosity",
            Self::AnalyticalSatisfaction => "analytical_satisfaction",
            Self::InterpretiveExcitement => "interpretive_excitement",
            Self::TherapeuticMelancholy => "therapeutic_melancholy",
            Self::ProfessionalAnger => "professional_anger",
            Self::TheoreticalDisgust => "theoretical_disgust",
            Self::AuthoritativeContempt => "authoritative_contempt",
            Self::MortalityFear => "mortality_fear",
            Self::ProfessionalShame => "professional_shame",
            Self::TherapeuticGuilt => "therapeutic_guilt",
            Self::ObsessiveAnxiety => "obsessive_anxiety",
            Self::NarcissisticPride => "narcissistic_pride",
            Self::SpiritualTranscendence => "spiritual_transcendence",
        }
    }
}

impl fmt::Display for EmotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EmotionVector
// ---------------------------------------------------------------------------

/// Result of a single [`EmotionVector::feel`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionShift {
    /// Which emotion moved.
    pub kind: EmotionKind,
    /// Intensity before the update.
    pub old: f32,
    /// Intensity after the update, always in `[0.0, 1.0]`.
    pub new: f32,
}

/// Bounded mapping from every [`EmotionKind`] to an intensity in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmotionVector {
    intensities: [f32; EmotionKind::COUNT],
}

impl EmotionVector {
    /// A vector with every emotion at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vector from `(kind, intensity)` pairs. Unlisted kinds start at zero.
    #[must_use]
    pub fn with_baseline<I>(baseline: I) -> Self
    where
        I: IntoIterator<Item = (EmotionKind, f32)>,
    {
        let mut vector = Self::new();
        for (kind, intensity) in baseline {
            vector.intensities[kind.index()] = clamp_unit(intensity);
        }
        vector
    }

    /// Current intensity of `kind`.
    #[must_use]
    pub fn get(&self, kind: EmotionKind) -> f32 {
        self.intensities[kind.index()]
    }

    /// Add `delta` to `kind` and clamp the result to `[0.0, 1.0]`.
    ///
    /// Negative deltas suppress. A NaN delta is treated as zero so the
    /// vector can never hold a non-number.
    pub fn feel(&mut self, kind: EmotionKind, delta: f32) -> EmotionShift {
        let delta = if delta.is_nan() { 0.0 } else { delta };
        let slot = &mut self.intensities[kind.index()];
        let old = *slot;
        *slot = clamp_unit(old + delta);
        EmotionShift {
            kind,
            old,
            new: *slot,
        }
    }

    /// Multiply every intensity by `factor`, pulling all emotions toward zero.
    ///
    /// Results below `f32::MIN_POSITIVE` are flushed to zero. Subnormal
    /// products can round back to their input, which would leave an emotion
    /// stuck just above zero forever.
    pub fn decay(&mut self, factor: f32) {
        let factor = clamp_unit(factor);
        for intensity in &mut self.intensities {
            *intensity *= factor;
            if *intensity < f32::MIN_POSITIVE {
                *intensity = 0.0;
            }
        }
    }

    /// The strongest emotion and its intensity.
    ///
    /// Ties resolve to the kind that comes first in [`EmotionKind::ALL`].
    #[must_use]
    pub fn dominant(&self) -> (EmotionKind, f32) {
        // `max_by_key` keeps the last maximum, so walk in reverse.
        let kind = EmotionKind::ALL
            .iter()
            .rev()
            .copied()
            .max_by_key(|kind| OrderedFloat(self.get(*kind)))
            .unwrap_or(EmotionKind::IntellectualCuriosity);
        (kind, self.get(kind))
    }

    /// Overall stability: `0.5 + BALANCE_SCALE * (sum(positive) - sum(negative))`,
    /// clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn balance(&self) -> f32 {
        let positive: f32 = EmotionKind::POSITIVE.iter().map(|k| self.get(*k)).sum();
        let negative: f32 = EmotionKind::NEGATIVE.iter().map(|k| self.get(*k)).sum();
        clamp_unit(0.5 + (positive - negative) * BALANCE_SCALE)
    }

    /// Iterate `(kind, intensity)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionKind, f32)> + '_ {
        EmotionKind::ALL.iter().map(move |kind| (*kind, self.get(*kind)))
    }

    /// Copy of the full mapping, ordered canonically.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<EmotionKind, f32> {
        self.iter().collect()
    }
}

fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
