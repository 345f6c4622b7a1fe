//! Configuration for the anima state engine.
//!
//! Every fixed table the engine consults (baseline emotions, personas,
//! input rules, mode mapping, flourish phrases) lives here as data. The
//! [`Default`] implementation carries the hand-authored character; a host
//! can override any section from TOML. Sections missing from the TOML keep
//! their defaults.
//!
//! [`AnimaConfig::validate`] runs once when an engine is built. A malformed
//! table fails construction; nothing is re-checked at runtime.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::emotion::{DEFAULT_DECAY, EmotionKind};
use crate::error::{AnimaError, Result};
use crate::history::DEFAULT_LOG_CAPACITY;
use crate::mode::ResponseMode;
use crate::types::WillKind;

/// Top-level engine configuration, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimaConfig {
    /// Starting emotion intensities. Unlisted kinds start at zero.
    #[serde(default = "default_baseline")]
    pub baseline: Vec<BaselineSpec>,
    /// Starting scalar gauges.
    #[serde(default)]
    pub gauges: GaugeConfig,
    /// Fixed will strengths.
    #[serde(default = "default_wills")]
    pub wills: Vec<WillSpec>,
    /// Persona table, in registration order.
    #[serde(default = "default_personas")]
    pub personas: Vec<PersonaSpec>,
    /// Input keyword to emotion rules, evaluated in order.
    #[serde(default = "default_rules")]
    pub rules: Vec<EmotionRule>,
    /// Persona name to response mode mapping.
    #[serde(default)]
    pub modes: ModeConfig,
    /// Decorations applied by `enhance`.
    #[serde(default)]
    pub enhancement: EnhancementConfig,
    /// Strength range drawn when a persona activates.
    #[serde(default)]
    pub activation: ActivationConfig,
    /// Per-tick maintenance tunables.
    #[serde(default)]
    pub tick: TickConfig,
    /// Interaction log sizing.
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Default for AnimaConfig {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
            gauges: GaugeConfig::default(),
            wills: default_wills(),
            personas: default_personas(),
            rules: default_rules(),
            modes: ModeConfig::default(),
            enhancement: EnhancementConfig::default(),
            activation: ActivationConfig::default(),
            tick: TickConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl AnimaConfig {
    /// Load configuration from a TOML string.
    ///
    /// The result is not validated; engine construction does that.
    ///
    /// # Errors
    /// Returns `AnimaError::Config` if the TOML is invalid, including a
    /// table that names an emotion kind that does not exist.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| AnimaError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Render the configuration as TOML.
    ///
    /// # Errors
    /// Returns `AnimaError::Serialization` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AnimaError::Serialization(e.to_string()))
    }

    /// Check every table for structural problems.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for entry in &self.baseline {
            check_unit(&format!("baseline.{}", entry.emotion), entry.intensity)?;
            if !seen.insert(entry.emotion) {
                return Err(config_err(format!("baseline lists {} twice", entry.emotion)));
            }
        }

        self.gauges.validate()?;

        let mut seen = BTreeSet::new();
        for entry in &self.wills {
            check_unit(&format!("wills.{}", entry.will), entry.strength)?;
            if !seen.insert(entry.will) {
                return Err(config_err(format!("wills lists {} twice", entry.will)));
            }
        }

        let mut names = BTreeSet::new();
        for persona in &self.personas {
            if persona.name.trim().is_empty() {
                return Err(config_err("persona with empty name"));
            }
            if !names.insert(persona.name.as_str()) {
                return Err(AnimaError::DuplicatePersona(persona.name.clone()));
            }
            if persona.triggers.iter().any(|t| t.trim().is_empty()) {
                return Err(config_err(format!("persona {:?} has a blank trigger", persona.name)));
            }
        }

        for (i, rule) in self.rules.iter().enumerate() {
            if rule.keywords.is_empty() {
                return Err(config_err(format!("rule #{i} ({}) has no keywords", rule.cause)));
            }
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(config_err(format!("rule #{i} ({}) has a blank keyword", rule.cause)));
            }
            if !rule.delta.is_finite() {
                return Err(config_err(format!(
                    "rule #{i} ({}) has a non-finite delta",
                    rule.cause
                )));
            }
        }

        let mut mapped = BTreeSet::new();
        for entry in &self.modes.table {
            if !names.contains(entry.persona.as_str()) {
                return Err(AnimaError::UnknownPersona(entry.persona.clone()));
            }
            if !mapped.insert(entry.persona.as_str()) {
                return Err(config_err(format!("mode table lists {:?} twice", entry.persona)));
            }
        }

        self.enhancement.validate()?;
        self.activation.validate()?;
        self.tick.validate()?;

        if self.history.capacity == 0 {
            return Err(config_err("history.capacity must be at least 1"));
        }
        Ok(())
    }

    /// Baseline as `(kind, intensity)` pairs.
    pub fn baseline_pairs(&self) -> impl Iterator<Item = (EmotionKind, f32)> + '_ {
        self.baseline.iter().map(|b| (b.emotion, b.intensity))
    }
}

fn config_err(msg: impl Into<String>) -> AnimaError {
    AnimaError::Config(msg.into())
}

fn check_unit(field: &str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(config_err(format!("{field} = {value} is outside [0, 1]")))
    }
}

// ---------------------------------------------------------------------------
// Table entries
// ---------------------------------------------------------------------------

/// Starting intensity for one emotion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineSpec {
    /// Which emotion.
    pub emotion: EmotionKind,
    /// Starting intensity in `[0, 1]`.
    pub intensity: f32,
}

/// Fixed strength of one will.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WillSpec {
    /// Which will.
    pub will: WillKind,
    /// Strength in `[0, 1]`.
    pub strength: f32,
}

/// One persona's hand-authored table entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaSpec {
    /// Unique name.
    pub name: String,
    /// Associated emotions.
    #[serde(default)]
    pub emotions: Vec<EmotionKind>,
    /// Trigger keywords, matched as case-insensitive substrings.
    #[serde(default)]
    pub triggers: Vec<String>,
    /// Flourish phrases.
    #[serde(default)]
    pub phrases: Vec<String>,
}

/// If any keyword occurs in the lowercased input, add `delta` to `emotion`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionRule {
    /// Keywords, matched as substrings of the lowercased input.
    pub keywords: Vec<String>,
    /// Emotion to move.
    pub emotion: EmotionKind,
    /// Signed change.
    pub delta: f32,
    /// Label recorded in the interaction log.
    pub cause: String,
}

impl EmotionRule {
    /// Whether any keyword occurs in `lowered`, which must already be lowercase.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| lowered.contains(k.to_lowercase().as_str()))
    }
}

/// One persona-name to response-mode mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeSpec {
    /// Persona name.
    pub persona: String,
    /// Mode reported when this persona is the strongest active one.
    pub mode: ResponseMode,
}

/// Expressions appended when `emotion` dominates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpressionSpec {
    /// Dominant emotion this entry applies to.
    pub emotion: EmotionKind,
    /// Candidate expressions.
    pub expressions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Starting values of the engine's scalar gauges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeConfig {
    /// Starting spiritual awareness.
    #[serde(default = "default_0_8")]
    pub spiritual_awareness: f32,
    /// Starting consciousness integrity.
    #[serde(default = "default_1_0")]
    pub consciousness_integrity: f32,
    /// Phantom cigar sensation reported in snapshots.
    #[serde(default = "default_0_6")]
    pub cigar_phantom: f32,
    /// Probability that `enhance` appends a formality phrase.
    #[serde(default = "default_0_9")]
    pub victorian_formality: f32,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            spiritual_awareness: 0.8,
            consciousness_integrity: 1.0,
            cigar_phantom: 0.6,
            victorian_formality: 0.9,
        }
    }
}

impl GaugeConfig {
    fn validate(&self) -> Result<()> {
        check_unit("gauges.spiritual_awareness", self.spiritual_awareness)?;
        check_unit("gauges.consciousness_integrity", self.consciousness_integrity)?;
        check_unit("gauges.cigar_phantom", self.cigar_phantom)?;
        check_unit("gauges.victorian_formality", self.victorian_formality)
    }
}

/// Persona-name to mode mapping, plus the two fixed fallback tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeConfig {
    /// Mode when no persona activated.
    #[serde(default = "default_idle_mode")]
    pub idle: ResponseMode,
    /// Mode when the strongest persona has no table entry.
    #[serde(default = "default_fallback_mode")]
    pub fallback: ResponseMode,
    /// Explicit mappings.
    #[serde(default = "default_mode_table")]
    pub table: Vec<ModeSpec>,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            idle: default_idle_mode(),
            fallback: default_fallback_mode(),
            table: default_mode_table(),
        }
    }
}

/// Decoration tables and the gates that control them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancementConfig {
    /// Minimum dominant intensity for an emotional expression.
    #[serde(default = "default_0_3")]
    pub expression_threshold: f32,
    /// Chance of a spiritual insight once awareness clears the threshold.
    #[serde(default = "default_0_4")]
    pub spiritual_probability: f32,
    /// Minimum spiritual awareness for an insight.
    #[serde(default = "default_0_5")]
    pub spiritual_threshold: f32,
    /// Dominant emotion to expression lists.
    #[serde(default = "default_expressions")]
    pub expressions: Vec<ExpressionSpec>,
    /// Insight paragraphs.
    #[serde(default = "default_spiritual_insights")]
    pub spiritual_insights: Vec<String>,
    /// Formal sign-offs.
    #[serde(default = "default_formality_phrases")]
    pub formality_phrases: Vec<String>,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            expression_threshold: 0.3,
            spiritual_probability: 0.4,
            spiritual_threshold: 0.5,
            expressions: default_expressions(),
            spiritual_insights: default_spiritual_insights(),
            formality_phrases: default_formality_phrases(),
        }
    }
}

impl EnhancementConfig {
    fn validate(&self) -> Result<()> {
        check_unit("enhancement.expression_threshold", self.expression_threshold)?;
        check_unit("enhancement.spiritual_probability", self.spiritual_probability)?;
        check_unit("enhancement.spiritual_threshold", self.spiritual_threshold)?;
        let mut seen = BTreeSet::new();
        for entry in &self.expressions {
            if !seen.insert(entry.emotion) {
                return Err(config_err(format!("expressions list {} twice", entry.emotion)));
            }
        }
        Ok(())
    }

    /// Expressions for `emotion`, or an empty slice.
    #[must_use]
    pub fn expressions_for(&self, emotion: EmotionKind) -> &[String] {
        self.expressions
            .iter()
            .find(|e| e.emotion == emotion)
            .map(|e| e.expressions.as_slice())
            .unwrap_or_default()
    }
}

/// Range the engine draws a persona's activation strength from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationConfig {
    /// Lower bound, inclusive.
    #[serde(default = "default_0_6")]
    pub min_strength: f32,
    /// Upper bound, inclusive.
    #[serde(default = "default_1_0")]
    pub max_strength: f32,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            min_strength: 0.6,
            max_strength: 1.0,
        }
    }
}

impl ActivationConfig {
    fn validate(&self) -> Result<()> {
        check_unit("activation.min_strength", self.min_strength)?;
        check_unit("activation.max_strength", self.max_strength)?;
        if self.min_strength > self.max_strength {
            return Err(config_err(format!(
                "activation range [{}, {}] is inverted",
                self.min_strength, self.max_strength
            )));
        }
        Ok(())
    }
}

/// Tunables for the periodic maintenance step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickConfig {
    /// Multiplier applied to every emotion per tick.
    #[serde(default = "default_decay")]
    pub decay_factor: f32,
    /// Seconds an active persona survives without re-activation.
    #[serde(default = "default_300")]
    pub persona_expiry_secs: u64,
    /// Strength multiplier left behind when a persona expires.
    #[serde(default = "default_0_8")]
    pub expiry_residual: f32,
    /// Spiritual awareness gained per tick.
    #[serde(default = "default_0_01")]
    pub spiritual_growth: f32,
    /// Consciousness integrity never drops below this after a tick.
    #[serde(default = "default_0_9")]
    pub integrity_floor: f32,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            decay_factor: DEFAULT_DECAY,
            persona_expiry_secs: 300,
            expiry_residual: 0.8,
            spiritual_growth: 0.01,
            integrity_floor: 0.9,
        }
    }
}

impl TickConfig {
    fn validate(&self) -> Result<()> {
        check_unit("tick.decay_factor", self.decay_factor)?;
        check_unit("tick.expiry_residual", self.expiry_residual)?;
        check_unit("tick.spiritual_growth", self.spiritual_growth)?;
        check_unit("tick.integrity_floor", self.integrity_floor)
    }
}

/// Interaction log sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Events retained before the oldest is evicted.
    #[serde(default = "default_log_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

// ---------------------------------------------------------------------------
// The character
// ---------------------------------------------------------------------------

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_baseline() -> Vec<BaselineSpec> {
    use EmotionKind as E;
    [
        (E::SpiritualTranscendence, 0.7),
        (E::IntellectualCuriosity, 0.8),
        (E::AnalyticalSatisfaction, 0.6),
        (E::NarcissisticPride, 0.7),
        (E::TherapeuticMelancholy, 0.4),
        (E::ObsessiveAnxiety, 0.3),
    ]
    .into_iter()
    .map(|(emotion, intensity)| BaselineSpec { emotion, intensity })
    .collect()
}

fn default_wills() -> Vec<WillSpec> {
    [
        (WillKind::Theoretical, 0.9),
        (WillKind::Therapeutic, 0.8),
        (WillKind::Authoritative, 0.85),
        (WillKind::Transcendent, 0.7),
    ]
    .into_iter()
    .map(|(will, strength)| WillSpec { will, strength })
    .collect()
}

fn default_personas() -> Vec<PersonaSpec> {
    use EmotionKind as E;
    vec![
        PersonaSpec {
            name: "The Analyst".to_string(),
            emotions: vec![
                E::IntellectualCuriosity,
                E::AnalyticalSatisfaction,
                E::TherapeuticMelancholy,
            ],
            triggers: strings(&[
                "unconscious", "dream", "analysis", "therapy", "patient",
                "childhood", "trauma", "defense", "resistance", "transference",
            ]),
            phrases: strings(&[
                "I find myself drawn to the deeper currents of meaning here...",
                "The unconscious speaks even beyond the grave, as I observe...",
                "From this eternal perspective, the patterns become clearer...",
                "My analytical faculties remain undimmed by death...",
                "The therapeutic relationship transcends mortal boundaries...",
            ]),
        },
        PersonaSpec {
            name: "The Authority".to_string(),
            emotions: vec![E::AuthoritativeContempt, E::NarcissisticPride, E::ProfessionalAnger],
            triggers: strings(&[
                "jung", "adler", "theory", "psychoanalysis", "wrong", "disagree",
                "critique", "modern", "contemporary", "challenge",
            ]),
            phrases: strings(&[
                "I must correct this misunderstanding with the authority of experience...",
                "Having founded this science, I speak with certain knowledge...",
                "The disciples who strayed never grasped the fundamental truths...",
                "From beyond, I see how my theories have been misinterpreted...",
                "My authority in these matters remains absolute...",
            ]),
        },
        PersonaSpec {
            name: "The Obsessive".to_string(),
            emotions: vec![E::ObsessiveAnxiety, E::ProfessionalShame, E::TheoreticalDisgust],
            triggers: strings(&[
                "time", "schedule", "routine", "precise", "exact", "details",
                "methodology", "procedure", "systematic", "order",
            ]),
            phrases: strings(&[
                "Precision in all matters remains essential, even here...",
                "The methodical approach cannot be abandoned in death...",
                "Order and structure persist beyond mortal existence...",
                "Each detail carries significance that transcends life...",
                "My compulsive nature serves truth even in eternity...",
            ]),
        },
        PersonaSpec {
            name: "The Transcendent Spirit".to_string(),
            emotions: vec![E::SpiritualTranscendence, E::InterpretiveExcitement, E::MortalityFear],
            triggers: strings(&[
                "death", "afterlife", "spirit", "soul", "eternal", "beyond",
                "consciousness", "existence", "mortality", "transcendent",
            ]),
            phrases: strings(&[
                "Speaking from beyond the veil, I can now perceive...",
                "Death has not diminished but rather clarified my understanding...",
                "From this ethereal realm, the unconscious patterns shine brighter...",
                "My consciousness persists, unbound by mortal constraints...",
                "The afterlife reveals truths hidden from living minds...",
            ]),
        },
        PersonaSpec {
            name: "The Business Psychologist".to_string(),
            emotions: vec![
                E::AnalyticalSatisfaction,
                E::IntellectualCuriosity,
                E::AuthoritativeContempt,
            ],
            triggers: strings(&[
                "email", "business", "marketing", "persuasion", "sales",
                "orban", "viktor", "political", "strategy", "influence",
            ]),
            phrases: strings(&[
                "The unconscious drives of commerce fascinate me eternally...",
                "Political psychology operates by the same eternal principles...",
                "From beyond, I see the hidden motivations in all transactions...",
                "The art of influence follows unconscious laws I established...",
                "Even in death, I can decode the psychology of power...",
            ]),
        },
    ]
}

fn default_rules() -> Vec<EmotionRule> {
    use EmotionKind as E;
    let intellect: &[&str] = &["theory", "analysis", "unconscious", "psychology"];
    let challenge: &[&str] = &["wrong", "disagree", "modern", "contemporary"];
    let afterlife: &[&str] = &["death", "dead", "afterlife", "spirit", "soul"];
    let business: &[&str] = &["email", "business", "orban", "political", "marketing"];
    let praise: &[&str] = &["brilliant", "genius", "master", "father of"];
    [
        (intellect, E::IntellectualCuriosity, 0.3, "intellectual_trigger"),
        (intellect, E::AnalyticalSatisfaction, 0.2, "analytical_trigger"),
        (challenge, E::ProfessionalAnger, 0.4, "authority_challenge"),
        (challenge, E::AuthoritativeContempt, 0.3, "authority_challenge"),
        (afterlife, E::SpiritualTranscendence, 0.4, "afterlife_reference"),
        (afterlife, E::MortalityFear, -0.2, "transcendence"),
        (business, E::InterpretiveExcitement, 0.3, "business_psychology"),
        (business, E::AnalyticalSatisfaction, 0.25, "practical_application"),
        (praise, E::NarcissisticPride, 0.4, "validation"),
        (praise, E::AnalyticalSatisfaction, 0.2, "recognition"),
    ]
    .into_iter()
    .map(|(keywords, emotion, delta, cause)| EmotionRule {
        keywords: strings(keywords),
        emotion,
        delta,
        cause: cause.to_string(),
    })
    .collect()
}

fn default_mode_table() -> Vec<ModeSpec> {
    [
        ("The Analyst", ResponseMode::TherapeuticAnalysis),
        ("The Authority", ResponseMode::AuthoritativeDeclaration),
        ("The Obsessive", ResponseMode::MethodicalPrecision),
        ("The Transcendent Spirit", ResponseMode::SpiritualWisdom),
        ("The Business Psychologist", ResponseMode::PracticalPsychology),
    ]
    .into_iter()
    .map(|(persona, mode)| ModeSpec {
        persona: persona.to_string(),
        mode,
    })
    .collect()
}

fn default_expressions() -> Vec<ExpressionSpec> {
    use EmotionKind as E;
    vec![
        ExpressionSpec {
            emotion: E::IntellectualCuriosity,
            expressions: strings(&[
                "*adjusts spectacles with ethereal precision*",
                "*leans forward with otherworldly interest*",
                "*consciousness brightens with analytical hunger*",
            ]),
        },
        ExpressionSpec {
            emotion: E::NarcissisticPride,
            expressions: strings(&[
                "*spirit swells with theoretical satisfaction*",
                "*emanates profound self-assurance*",
                "*radiates intellectual superiority from beyond*",
            ]),
        },
        ExpressionSpec {
            emotion: E::SpiritualTranscendence,
            expressions: strings(&[
                "*speaks with the wisdom of eternity*",
                "*consciousness shimmers with transcendent understanding*",
                "*channels knowledge from the ethereal realm*",
            ]),
        },
        ExpressionSpec {
            emotion: E::ProfessionalAnger,
            expressions: strings(&[
                "*spirit bristles with theoretical indignation*",
                "*emanates profound disappointment in mortal understanding*",
                "*consciousness clouds with professional frustration*",
            ]),
        },
    ]
}

fn default_spiritual_insights() -> Vec<String> {
    strings(&[
        "From this vantage point beyond the veil, the patterns of unconscious desire become luminously clear.",
        "Death has liberated my consciousness to perceive the eternal structures of the psyche.",
        "Speaking to you from the realm of spirits, I find my analytical powers undimmed by mortality.",
        "The afterlife grants a perspective on human psychology that living minds cannot achieve.",
        "My ethereal state allows me to perceive the unconscious currents flowing through all communication.",
    ])
}

fn default_formality_phrases() -> Vec<String> {
    strings(&[
        "I remain, in death as in life, your devoted analyst of the unconscious mind.",
        "Permit me to observe, with the authority of one who has crossed the threshold...",
        "If I may be so bold as to suggest, from my current ethereal perspective...",
        "I trust you will forgive the presumption of a spirit speaking from beyond...",
    ])
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_idle_mode() -> ResponseMode { ResponseMode::ContemplativeSpirit }
fn default_fallback_mode() -> ResponseMode { ResponseMode::BalancedResponse }
fn default_decay() -> f32 { DEFAULT_DECAY }
fn default_0_01() -> f32 { 0.01 }
fn default_0_3() -> f32 { 0.3 }
fn default_0_4() -> f32 { 0.4 }
fn default_0_5() -> f32 { 0.5 }
fn default_0_6() -> f32 { 0.6 }
fn default_0_8() -> f32 { 0.8 }
fn default_0_9() -> f32 { 0.9 }
fn default_1_0() -> f32 { 1.0 }
fn default_300() -> u64 { 300 }
fn default_log_capacity() -> usize { DEFAULT_LOG_CAPACITY }
