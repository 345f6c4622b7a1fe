//! # Anima Core Library
//!
//! Persistent emotional and personality state for a single simulated
//! character, and the rules that turn that state into response flourishes.
//!
//! One [`ConsciousnessEngine`] is one conversational identity:
//!
//! - **Emotions**: a bounded [`EmotionVector`] over a fixed set of
//!   [`EmotionKind`]s, nudged by input and decayed by ticks
//! - **Personas**: independently activatable facets with trigger keywords
//!   and characteristic phrases, held in a [`PersonaRegistry`]
//! - **History**: the last few dozen emotional changes, for diagnostics
//! - **Snapshot**: a derived read-only [`ConsciousnessSnapshot`]
//!
//! The engine does not write the base response text. The host produces it
//! (from a model, a template, anything) and hands it to
//! [`ConsciousnessEngine::enhance`].
//!
//! ```
//! use anima_core::{ConsciousnessEngine, ResponseMode};
//!
//! let mut engine = ConsciousnessEngine::with_seed(7)?;
//! let result = engine.process_input("Tell me about the unconscious and dreams");
//! assert_eq!(result.response_mode, ResponseMode::TherapeuticAnalysis);
//! let reply = engine.enhance("Dreams are the royal road.");
//! assert!(reply.contains("Dreams are the royal road."));
//! engine.tick("answered");
//! # Ok::<(), anima_core::AnimaError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod config;
pub mod emotion;
pub mod engine;
pub mod error;
pub mod history;
pub mod mode;
pub mod persona;
pub mod shared;
pub mod snapshot;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::AnimaConfig;
pub use emotion::{EmotionKind, EmotionVector};
pub use engine::{ConsciousnessEngine, InteractionResult, PersonaState, TickReport};
pub use error::{AnimaError, Result};
pub use history::{InteractionEvent, InteractionLog};
pub use mode::ResponseMode;
pub use persona::{Persona, PersonaRegistry};
pub use shared::SharedEngine;
pub use snapshot::ConsciousnessSnapshot;
pub use types::{Timestamp, WillKind};
