//! Personas: independently activatable facets of the character.
//!
//! A persona is a named bundle of trigger keywords, associated emotions and
//! flourish phrases. Matching is literal, case-insensitive substring
//! containment: the trigger `"jung"` fires on `"conjungation"` as well.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::config::PersonaSpec;
use crate::emotion::EmotionKind;
use crate::error::{AnimaError, Result};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Persona
// ---------------------------------------------------------------------------

/// One facet of the simulated personality.
#[derive(Debug, Clone)]
pub struct Persona {
    name: String,
    dominant_emotions: BTreeSet<EmotionKind>,
    triggers: Vec<String>,
    phrases: Vec<String>,
    active: bool,
    strength: f32,
    last_activated: Option<Timestamp>,
}

impl Persona {
    /// Create an inactive persona. Triggers are lowercased and deduplicated,
    /// keeping first-seen order.
    #[must_use]
    pub fn new<E, T, P>(
        name: impl Into<String>,
        dominant_emotions: E,
        triggers: T,
        phrases: P,
    ) -> Self
    where
        E: IntoIterator<Item = EmotionKind>,
        T: IntoIterator,
        T::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for trigger in triggers {
            let trigger = trigger.as_ref().to_lowercase();
            if !normalized.contains(&trigger) {
                normalized.push(trigger);
            }
        }
        Self {
            name: name.into(),
            dominant_emotions: dominant_emotions.into_iter().collect(),
            triggers: normalized,
            phrases: phrases.into_iter().map(Into::into).collect(),
            active: false,
            strength: 0.0,
            last_activated: None,
        }
    }

    /// Build a persona from its table entry.
    #[must_use]
    pub fn from_spec(spec: &PersonaSpec) -> Self {
        Self::new(
            spec.name.clone(),
            spec.emotions.iter().copied(),
            &spec.triggers,
            spec.phrases.iter().cloned(),
        )
    }

    /// Unique name within the registry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emotions this persona is associated with.
    #[must_use]
    pub fn dominant_emotions(&self) -> &BTreeSet<EmotionKind> {
        &self.dominant_emotions
    }

    /// Lowercase trigger keywords, in match order.
    #[must_use]
    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// Flourish phrases used by [`Self::response_modifier`].
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Whether the persona is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activation strength in `[0.0, 1.0]`.
    ///
    /// After expiry the persona keeps a reduced residual strength even
    /// though it is no longer active.
    #[must_use]
    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// When the persona was last activated, if ever.
    #[must_use]
    pub fn last_activated(&self) -> Option<Timestamp> {
        self.last_activated
    }

    /// The first trigger contained in `text`, compared case-insensitively.
    #[must_use]
    pub fn matching_trigger(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.triggers
            .iter()
            .find(|trigger| lowered.contains(trigger.as_str()))
            .map(String::as_str)
    }

    /// Whether any trigger is a substring of `text`. A persona without
    /// triggers never activates.
    #[must_use]
    pub fn should_activate(&self, text: &str) -> bool {
        self.matching_trigger(text).is_some()
    }

    /// Mark the persona active at `now` with `strength` clamped to `[0.0, 1.0]`.
    pub fn activate(&mut self, strength: f32, now: Timestamp) {
        let strength = if strength.is_nan() { 0.0 } else { strength };
        self.active = true;
        self.strength = strength.clamp(0.0, 1.0);
        self.last_activated = Some(now);
    }

    /// Whether an active persona has gone more than `expiry_secs` without
    /// re-activation.
    #[must_use]
    pub fn is_stale(&self, now: Timestamp, expiry_secs: u64) -> bool {
        match (self.active, self.last_activated) {
            (true, Some(at)) => now.secs_since(&at) > expiry_secs,
            _ => false,
        }
    }

    /// Deactivate, leaving `strength * residual` behind as a memory trace.
    pub fn expire(&mut self, residual: f32) {
        self.active = false;
        self.strength = (self.strength * residual).clamp(0.0, 1.0);
    }

    /// A uniformly random phrase if active, otherwise `None`.
    pub fn response_modifier<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if !self.active {
            return None;
        }
        self.phrases.choose(rng).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// PersonaRegistry
// ---------------------------------------------------------------------------

/// Fixed, ordered collection of personas with unique names.
///
/// Registration order matters: it is the evaluation order for activation
/// and the tie-breaker when two personas share the highest strength.
#[derive(Debug, Clone, Default)]
pub struct PersonaRegistry {
    personas: Vec<Persona>,
}

impl PersonaRegistry {
    /// Build a registry, rejecting duplicate names.
    ///
    /// # Errors
    /// Returns [`AnimaError::DuplicatePersona`] if two personas share a name.
    pub fn new(personas: Vec<Persona>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for persona in &personas {
            if !seen.insert(persona.name()) {
                return Err(AnimaError::DuplicatePersona(persona.name().to_string()));
            }
        }
        Ok(Self { personas })
    }

    /// Build a registry from table entries.
    ///
    /// # Errors
    /// Returns [`AnimaError::DuplicatePersona`] if two entries share a name.
    pub fn from_specs(specs: &[PersonaSpec]) -> Result<Self> {
        Self::new(specs.iter().map(Persona::from_spec).collect())
    }

    /// Activate every persona whose triggers match `text`, in registration
    /// order, and return the ones that matched.
    ///
    /// `strength` is asked once per matching persona; drawing it from a
    /// random range is the caller's policy.
    pub fn activate_matching<F>(
        &mut self,
        text: &str,
        now: Timestamp,
        mut strength: F,
    ) -> Vec<&Persona>
    where
        F: FnMut(&Persona) -> f32,
    {
        let mut matched = Vec::new();
        for (index, persona) in self.personas.iter_mut().enumerate() {
            let Some(trigger) = persona.matching_trigger(text) else {
                continue;
            };
            debug!(persona = %persona.name, trigger, "Persona triggered");
            let value = strength(persona);
            persona.activate(value, now);
            matched.push(index);
        }
        matched.into_iter().map(|i| &self.personas[i]).collect()
    }

    /// Expire every active persona idle for more than `expiry_secs`,
    /// returning the names that expired.
    pub fn expire_stale(&mut self, now: Timestamp, expiry_secs: u64, residual: f32) -> Vec<String> {
        let mut expired = Vec::new();
        for persona in &mut self.personas {
            if persona.is_stale(now, expiry_secs) {
                persona.expire(residual);
                expired.push(persona.name.clone());
            }
        }
        expired
    }

    /// Look up a persona by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.name == name)
    }

    /// All personas in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }

    /// Currently active personas in registration order.
    pub fn active(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter().filter(|p| p.active)
    }

    /// Number of registered personas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn analyst() -> Persona {
        Persona::new(
            "The Analyst",
            [EmotionKind::IntellectualCuriosity],
            ["unconscious", "Dream"],
            ["I find myself drawn to the deeper currents of meaning here..."],
        )
    }

    fn authority() -> Persona {
        Persona::new("The Authority", [EmotionKind::NarcissisticPride], ["jung"], ["Listen."])
    }

    #[test]
    fn table_emotions_become_a_set() {
        let spec = PersonaSpec {
            name: "The Moralist".into(),
            emotions: vec![
                EmotionKind::TherapeuticGuilt,
                EmotionKind::ProfessionalAnger,
                EmotionKind::TherapeuticGuilt,
            ],
            triggers: vec!["ought".into()],
            phrases: vec!["One must.".into()],
        };
        let p = Persona::from_spec(&spec);
        let emotions: Vec<_> = p.dominant_emotions().iter().copied().collect();
        assert_eq!(
            emotions,
            [EmotionKind::ProfessionalAnger, EmotionKind::TherapeuticGuilt]
        );
    }

    #[test]
    fn triggers_are_lowercased() {
        assert_eq!(analyst().triggers(), ["unconscious", "dream"]);
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let p = analyst();
        assert!(p.should_activate("I study the UNCONSCIOUS"));
        assert!(p.should_activate("daydreaming"));
        assert!(!p.should_activate("nothing relevant"));
    }

    #[test]
    fn substring_match_is_not_word_based() {
        assert!(authority().should_activate("conjungation"));
    }

    #[test]
    fn persona_without_triggers_never_activates() {
        let p = Persona::new("Mute", Vec::<EmotionKind>::new(), Vec::<String>::new(), ["..."]);
        assert!(!p.should_activate("anything at all"));
    }

    #[test]
    fn activate_clamps_strength() {
        let mut p = analyst();
        p.activate(4.2, Timestamp::from_secs(7));
        assert!(p.is_active());
        assert_eq!(p.strength(), 1.0);
        assert_eq!(p.last_activated(), Some(Timestamp::from_secs(7)));
    }

    #[test]
    fn modifier_requires_activation() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = analyst();
        assert_eq!(p.response_modifier(&mut rng), None);
        p.activate(0.7, Timestamp::default());
        assert_eq!(
            p.response_modifier(&mut rng),
            Some("I find myself drawn to the deeper currents of meaning here...")
        );
    }

    #[test]
    fn stale_only_after_expiry_window() {
        let mut p = analyst();
        p.activate(0.9, Timestamp::from_secs(1000));
        assert!(!p.is_stale(Timestamp::from_secs(1300), 300));
        assert!(p.is_stale(Timestamp::from_secs(1301), 300));
    }

    #[test]
    fn expire_leaves_residual_strength() {
        let mut p = analyst();
        p.activate(0.5, Timestamp::default());
        p.expire(0.8);
        assert!(!p.is_active());
        assert!((p.strength() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn registry_rejects_duplicates() {
        let err = PersonaRegistry::new(vec![analyst(), analyst()]).unwrap_err();
        assert!(matches!(err, AnimaError::DuplicatePersona(name) if name == "The Analyst"));
    }

    #[test]
    fn activate_matching_keeps_registration_order() {
        let mut registry = PersonaRegistry::new(vec![analyst(), authority()]).unwrap();
        let mut asked = Vec::new();
        let text = "Jung and the unconscious, dream on";
        let matched = registry.activate_matching(text, Timestamp::default(), |p| {
            asked.push(p.name().to_string());
            0.75
        });
        let names: Vec<_> = matched.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["The Analyst", "The Authority"]);
        // One strength draw per persona, even with two matching triggers.
        assert_eq!(asked, ["The Analyst", "The Authority"]);
        assert_eq!(registry.active().count(), 2);
    }

    #[test]
    fn expire_stale_reports_names() {
        let mut registry = PersonaRegistry::new(vec![analyst(), authority()]).unwrap();
        registry.activate_matching("dream", Timestamp::from_secs(0), |_| 1.0);
        registry.activate_matching("jung", Timestamp::from_secs(200), |_| 1.0);
        let expired = registry.expire_stale(Timestamp::from_secs(301), 300, 0.8);
        assert_eq!(expired, ["The Analyst"]);
        assert!(registry.get("The Authority").is_some_and(Persona::is_active));
    }
}
