//! Response modes and their resolution from activated personas.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ModeConfig;
use crate::persona::Persona;

/// High-level register the host should answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    /// Nothing in the input engaged a persona.
    ContemplativeSpirit,
    /// Clinical, interpretive answer.
    TherapeuticAnalysis,
    /// Corrective, founder-of-the-field answer.
    AuthoritativeDeclaration,
    /// Exacting, procedural answer.
    MethodicalPrecision,
    /// Answer from the beyond.
    SpiritualWisdom,
    /// Applied psychology for practical ends.
    PracticalPsychology,
    /// Strongest persona has no dedicated mode.
    BalancedResponse,
}

impl ResponseMode {
    /// Stable snake_case tag, identical to the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContemplativeSpirit => "contemplative_spirit",
            Self::TherapeuticAnalysis => "therapeutic_analysis",
            Self::AuthoritativeDeclaration => "authoritative_declaration",
            Self::MethodicalPrecision => "methodical_precision",
            Self::SpiritualWisdom => "spiritual_wisdom",
            Self::PracticalPsychology => "practical_psychology",
            Self::BalancedResponse => "balanced_response",
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable persona-name to mode lookup.
#[derive(Debug, Clone)]
pub struct ModeTable {
    idle: ResponseMode,
    fallback: ResponseMode,
    entries: Vec<(String, ResponseMode)>,
}

impl ModeTable {
    /// Build from configuration.
    #[must_use]
    pub fn from_config(config: &ModeConfig) -> Self {
        Self {
            idle: config.idle,
            fallback: config.fallback,
            entries: config
                .table
                .iter()
                .map(|m| (m.persona.clone(), m.mode))
                .collect(),
        }
    }

    /// Mode mapped to `persona`, or the fallback tag.
    #[must_use]
    pub fn mode_for(&self, persona: &str) -> ResponseMode {
        self.entries
            .iter()
            .find(|(name, _)| name == persona)
            .map_or(self.fallback, |(_, mode)| *mode)
    }

    /// Pick the mode for a set of just-activated personas.
    ///
    /// Empty input yields the idle mode. Otherwise the strongest persona
    /// wins; on equal strength the earlier one in `activated` wins.
    #[must_use]
    pub fn resolve(&self, activated: &[&Persona]) -> ResponseMode {
        let mut strongest: Option<&Persona> = None;
        for persona in activated {
            if strongest.is_none_or(|best| persona.strength() > best.strength()) {
                strongest = Some(*persona);
            }
        }
        let Some(persona) = strongest else {
            return self.idle;
        };
        let mode = self.mode_for(persona.name());
        debug!(
            persona = persona.name(),
            strength = persona.strength(),
            %mode,
            "Resolved response mode"
        );
        mode
    }
}

impl Default for ModeTable {
    fn default() -> Self {
        Self::from_config(&ModeConfig::default())
    }
}
