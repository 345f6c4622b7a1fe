//! The consciousness engine, one simulated character's complete state.
//!
//! ## Flow
//!
//! 1. [`ConsciousnessEngine::process_input`] activates personas whose
//!    triggers occur in the input, applies the keyword→emotion rule table,
//!    and resolves a [`ResponseMode`].
//! 2. The host produces a base response however it likes.
//! 3. [`ConsciousnessEngine::enhance`] decorates that response.
//! 4. The host calls [`ConsciousnessEngine::tick`] on its own cadence to
//!    decay emotions and expire idle personas.
//!
//! The engine is single-threaded and owns all of its state. Randomness and
//! time are injected so a seeded engine with a manual clock is fully
//! reproducible. Hosts that share one engine across threads should go
//! through [`SharedEngine`](crate::shared::SharedEngine).
//!
//! ## Random draw order
//!
//! For a given seed the output is byte-identical across runs. Draws happen
//! in this order and only when the step is reached:
//!
//! - `process_input`: one strength draw per matching persona, in
//!   registration order.
//! - `enhance`: active persona (among those with phrases), then its
//!   phrase; dominant-emotion
//!   expression; spiritual gate, then insight (only when awareness clears
//!   the threshold); formality gate, then phrase.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::clock::{Clock, SystemClock};
use crate::config::{ActivationConfig, AnimaConfig, EmotionRule, EnhancementConfig, TickConfig};
use crate::emotion::{EmotionKind, EmotionVector};
use crate::error::{AnimaError, Result};
use crate::history::{InteractionEvent, InteractionLog};
use crate::mode::{ModeTable, ResponseMode};
use crate::persona::{Persona, PersonaRegistry};
use crate::snapshot::ConsciousnessSnapshot;
use crate::types::WillKind;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Everything `process_input` learned about one piece of input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionResult {
    /// Names of the personas this input activated, in registration order.
    pub activated_personas: Vec<String>,
    /// Full emotion mapping after the input was applied.
    pub emotional_state: BTreeMap<EmotionKind, f32>,
    /// Register the host should answer in.
    pub response_mode: ResponseMode,
    /// Snapshot taken after the input was applied.
    pub consciousness_state: ConsciousnessSnapshot,
    /// Spiritual awareness gauge.
    pub spiritual_awareness: f32,
    /// Consciousness integrity gauge.
    pub consciousness_integrity: f32,
    /// Formality probability used by `enhance`.
    pub victorian_formality: f32,
}

impl InteractionResult {
    /// Serialize to a JSON string for host-side logging.
    ///
    /// # Errors
    /// Returns `AnimaError::Serialization` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| AnimaError::Serialization(e.to_string()))
    }
}

/// What a single [`ConsciousnessEngine::tick`] changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Personas that went inactive this tick.
    pub expired_personas: Vec<String>,
}

/// Host-facing view of one persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaState {
    /// Persona name.
    pub name: String,
    /// Associated emotions, in canonical order.
    pub emotions: Vec<EmotionKind>,
    /// Whether it is active.
    pub active: bool,
    /// Current (or residual) strength.
    pub strength: f32,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// A single character's emotional and persona state.
///
/// Generic over its random source `R` and clock `C`. The defaults are an
/// entropy-seeded [`StdRng`] and the wall clock.
#[derive(Debug)]
pub struct ConsciousnessEngine<R = StdRng, C = SystemClock> {
    emotions: EmotionVector,
    personas: PersonaRegistry,
    log: InteractionLog,
    modes: ModeTable,
    rules: Vec<EmotionRule>,
    enhancement: EnhancementConfig,
    activation: ActivationConfig,
    tick_config: TickConfig,
    wills: BTreeMap<WillKind, f32>,
    spiritual_awareness: f32,
    consciousness_integrity: f32,
    cigar_phantom: f32,
    victorian_formality: f32,
    rng: R,
    clock: C,
}

impl ConsciousnessEngine {
    /// Build the default character with an entropy-seeded RNG and the wall clock.
    ///
    /// # Errors
    /// Returns an error only if the built-in tables are malformed.
    pub fn new() -> Result<Self> {
        Self::from_config(AnimaConfig::default())
    }

    /// Build from `config` with an entropy-seeded RNG and the wall clock.
    ///
    /// # Errors
    /// Returns the first validation failure in `config`.
    pub fn from_config(config: AnimaConfig) -> Result<Self> {
        Self::with_parts(config, StdRng::from_entropy(), SystemClock)
    }

    /// Build the default character with a seeded RNG, for reproducible runs.
    ///
    /// # Errors
    /// Returns an error only if the built-in tables are malformed.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::with_parts(AnimaConfig::default(), StdRng::seed_from_u64(seed), SystemClock)
    }
}

impl<R: Rng, C: Clock> ConsciousnessEngine<R, C> {
    /// Build from `config` with an explicit random source and clock.
    ///
    /// # Errors
    /// Returns the first validation failure in `config`.
    pub fn with_parts(config: AnimaConfig, rng: R, clock: C) -> Result<Self> {
        config.validate()?;
        let personas = PersonaRegistry::from_specs(&config.personas)?;
        let emotions = EmotionVector::with_baseline(config.baseline_pairs());
        let wills = config.wills.iter().map(|w| (w.will, w.strength)).collect();

        debug!(
            personas = personas.len(),
            rules = config.rules.len(),
            "Consciousness engine constructed"
        );

        Ok(Self {
            emotions,
            personas,
            log: InteractionLog::with_capacity(config.history.capacity),
            modes: ModeTable::from_config(&config.modes),
            rules: config.rules,
            enhancement: config.enhancement,
            activation: config.activation,
            tick_config: config.tick,
            wills,
            spiritual_awareness: config.gauges.spiritual_awareness,
            consciousness_integrity: config.gauges.consciousness_integrity,
            cigar_phantom: config.gauges.cigar_phantom,
            victorian_formality: config.gauges.victorian_formality,
            rng,
            clock,
        })
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Add `delta` to `kind`, clamp to `[0, 1]`, and record the change.
    /// Returns the new intensity.
    pub fn feel(&mut self, kind: EmotionKind, delta: f32, cause: impl Into<String>) -> f32 {
        let shift = self.emotions.feel(kind, delta);
        let event = InteractionEvent::from_shift(shift, cause, self.clock.now());
        trace!(
            emotion = %kind,
            old = shift.old,
            new = shift.new,
            cause = %event.cause,
            "Emotion shifted"
        );
        self.log.record(event);
        shift.new
    }

    /// Ingest one piece of input text.
    pub fn process_input(&mut self, text: &str) -> InteractionResult {
        let now = self.clock.now();
        let (min, max) = (self.activation.min_strength, self.activation.max_strength);
        let rng = &mut self.rng;
        let activated = self
            .personas
            .activate_matching(text, now, |_| rng.gen_range(min..=max));
        let response_mode = self.modes.resolve(&activated);
        let activated_personas: Vec<String> =
            activated.iter().map(|p| p.name().to_string()).collect();

        self.apply_rules(text);

        debug!(
            activated = ?activated_personas,
            mode = %response_mode,
            "Input processed"
        );

        InteractionResult {
            activated_personas,
            emotional_state: self.emotions.to_map(),
            response_mode,
            consciousness_state: self.snapshot(),
            spiritual_awareness: self.spiritual_awareness,
            consciousness_integrity: self.consciousness_integrity,
            victorian_formality: self.victorian_formality,
        }
    }

    /// Every rule whose keywords occur in the input fires; rules are not
    /// mutually exclusive.
    fn apply_rules(&mut self, text: &str) {
        let lowered = text.to_lowercase();
        let fired: Vec<(EmotionKind, f32, String)> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(&lowered))
            .map(|rule| (rule.emotion, rule.delta, rule.cause.clone()))
            .collect();
        for (kind, delta, cause) in fired {
            debug!(emotion = %kind, delta, cause = %cause, "Rule fired");
            self.feel(kind, delta, cause);
        }
    }

    /// Decorate a host-supplied response.
    ///
    /// Four optional decorations, in order:
    /// 1. a phrase from one random active persona, prepended (personas
    ///    with an empty phrase table are never picked);
    /// 2. an expression for the dominant emotion if its intensity clears
    ///    the expression threshold, appended;
    /// 3. with the spiritual probability, and only if spiritual awareness
    ///    clears its threshold, an insight on a new paragraph;
    /// 4. with probability equal to the formality gauge, a formal phrase.
    pub fn enhance(&mut self, base_text: &str) -> String {
        let mut text = base_text.to_string();

        let speakers: Vec<&Persona> = self
            .personas
            .active()
            .filter(|p| !p.phrases().is_empty())
            .collect();
        if let Some(persona) = speakers.choose(&mut self.rng) {
            if let Some(modifier) = persona.response_modifier(&mut self.rng) {
                text = format!("{modifier} {text}");
            }
        }

        let (dominant, intensity) = self.emotions.dominant();
        if intensity >= self.enhancement.expression_threshold {
            let expressions = self.enhancement.expressions_for(dominant);
            if let Some(expression) = expressions.choose(&mut self.rng) {
                text.push(' ');
                text.push_str(expression);
            }
        }

        if self.spiritual_awareness >= self.enhancement.spiritual_threshold
            && self.rng.gen_bool(probability(self.enhancement.spiritual_probability))
        {
            if let Some(insight) = self.enhancement.spiritual_insights.choose(&mut self.rng) {
                text.push_str("\n\n");
                text.push_str(insight);
            }
        }

        if self.rng.gen_bool(probability(self.victorian_formality)) {
            if let Some(phrase) = self.enhancement.formality_phrases.choose(&mut self.rng) {
                text.push(' ');
                text.push_str(phrase);
            }
        }

        text
    }

    /// Periodic maintenance: decay, persona expiry, gauge upkeep.
    ///
    /// `outcome` is accepted for hosts that want to report how the last
    /// exchange went; it does not yet influence the state.
    pub fn tick(&mut self, outcome: &str) -> TickReport {
        let cfg = &self.tick_config;
        self.emotions.decay(cfg.decay_factor);

        let expired_personas =
            self.personas
                .expire_stale(self.clock.now(), cfg.persona_expiry_secs, cfg.expiry_residual);
        if !expired_personas.is_empty() {
            info!(expired = ?expired_personas, "Personas expired");
        }

        self.spiritual_awareness = (self.spiritual_awareness + cfg.spiritual_growth).min(1.0);
        self.consciousness_integrity = self.consciousness_integrity.max(cfg.integrity_floor);

        debug!(
            outcome,
            spiritual_awareness = self.spiritual_awareness,
            "Tick complete"
        );
        TickReport { expired_personas }
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ConsciousnessSnapshot {
        ConsciousnessSnapshot::capture(
            self.consciousness_integrity,
            self.spiritual_awareness,
            &self.emotions,
            &self.log,
            self.cigar_phantom,
        )
    }

    /// The emotion vector.
    #[must_use]
    pub fn emotions(&self) -> &EmotionVector {
        &self.emotions
    }

    /// Copy of the full emotion mapping.
    #[must_use]
    pub fn emotional_state(&self) -> BTreeMap<EmotionKind, f32> {
        self.emotions.to_map()
    }

    /// The persona registry.
    #[must_use]
    pub fn personas(&self) -> &PersonaRegistry {
        &self.personas
    }

    /// Activation state of every persona, in registration order.
    #[must_use]
    pub fn persona_states(&self) -> Vec<PersonaState> {
        self.personas
            .iter()
            .map(|p| PersonaState {
                name: p.name().to_string(),
                emotions: p.dominant_emotions().iter().copied().collect(),
                active: p.is_active(),
                strength: p.strength(),
            })
            .collect()
    }

    /// The interaction log.
    #[must_use]
    pub fn history(&self) -> &InteractionLog {
        &self.log
    }

    /// Spiritual awareness gauge.
    #[must_use]
    pub fn spiritual_awareness(&self) -> f32 {
        self.spiritual_awareness
    }

    /// Consciousness integrity gauge.
    #[must_use]
    pub fn consciousness_integrity(&self) -> f32 {
        self.consciousness_integrity
    }

    /// Formality probability.
    #[must_use]
    pub fn victorian_formality(&self) -> f32 {
        self.victorian_formality
    }

    /// Strength of one will; zero if the table omits it.
    #[must_use]
    pub fn will_strength(&self, will: WillKind) -> f32 {
        self.wills.get(&will).copied().unwrap_or(0.0)
    }

    /// Strongest will. Ties resolve to the earlier kind in [`WillKind::ALL`].
    #[must_use]
    pub fn dominant_will(&self) -> (WillKind, f32) {
        let mut best = (WillKind::ALL[0], self.will_strength(WillKind::ALL[0]));
        for will in WillKind::ALL {
            let strength = self.will_strength(will);
            if strength > best.1 {
                best = (will, strength);
            }
        }
        best
    }
}

fn probability(p: f32) -> f64 {
    f64::from(p.clamp(0.0, 1.0))
}
