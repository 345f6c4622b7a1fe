//! Integration Tests: End-to-End Engine Flows
//!
//! These tests drive the engine the way a host would: input → mode →
//! enhancement → tick, with a seeded RNG and a manual clock.

use std::io::Write;

use anima_core::config::AnimaConfig;
use anima_core::{
    AnimaError, ConsciousnessEngine, EmotionKind, ManualClock, ResponseMode, SharedEngine,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("anima_core=debug")
        .with_test_writer()
        .try_init();
}

fn seeded(seed: u64, clock: &ManualClock) -> ConsciousnessEngine<StdRng, ManualClock> {
    ConsciousnessEngine::with_parts(
        AnimaConfig::default(),
        StdRng::seed_from_u64(seed),
        clock.clone(),
    )
    .expect("default config")
}

// ---------------------------------------------------------------------------
// Fresh engine: the canonical first exchange
// ---------------------------------------------------------------------------

#[test]
fn fresh_engine_analyses_dreams() {
    init_tracing();
    let mut engine = ConsciousnessEngine::new().expect("construct");
    let result = engine.process_input("Tell me about the unconscious and dreams");

    assert!(result.activated_personas.iter().any(|p| p == "The Analyst"));
    assert_eq!(result.response_mode, ResponseMode::TherapeuticAnalysis);
    assert_eq!(result.response_mode.as_str(), "therapeutic_analysis");

    let balance = engine.emotions().balance();
    assert!((0.0..=1.0).contains(&balance));
    assert!((result.consciousness_state.emotional_balance - balance).abs() < f32::EPSILON);

    // "unconscious" fires the intellectual rule pair.
    assert!((result.emotional_state[&EmotionKind::IntellectualCuriosity] - 1.0).abs() < 1e-6);
    assert!((result.emotional_state[&EmotionKind::AnalyticalSatisfaction] - 0.8).abs() < 1e-6);
    assert_eq!(result.emotional_state.len(), EmotionKind::COUNT);
    assert!((result.consciousness_state.memory_coherence - 2.0 / 50.0).abs() < 1e-6);
}

// ---------------------------------------------------------------------------
// Determinism under a seeded random source
// ---------------------------------------------------------------------------

#[test]
fn same_seed_same_transcript() {
    init_tracing();
    let run = || {
        let clock = ManualClock::new(0);
        let mut engine = seeded(2024, &clock);
        let mut transcript = Vec::new();
        for input in [
            "Jung was right to disagree with you",
            "What happens to the soul after death?",
            "Can you help with my email marketing strategy?",
            "nothing relevant",
        ] {
            let result = engine.process_input(input);
            transcript.push(result.to_json().expect("json"));
            transcript.push(engine.enhance("Let us consider this carefully."));
            clock.advance(60);
            engine.tick("ok");
        }
        transcript
    };
    assert_eq!(run(), run());
}

#[test]
fn different_seeds_can_diverge() {
    let clock = ManualClock::new(0);
    let outputs: std::collections::BTreeSet<String> = (0..16)
        .map(|seed| {
            let mut engine = seeded(seed, &clock);
            engine.process_input("the unconscious, death, and modern theory");
            engine.enhance("Indeed.")
        })
        .collect();
    assert!(outputs.len() > 1);
}

// ---------------------------------------------------------------------------
// Interaction log bound
// ---------------------------------------------------------------------------

#[test]
fn log_keeps_fifty_most_recent() {
    let clock = ManualClock::new(0);
    let mut engine = seeded(1, &clock);
    for i in 0..60 {
        engine.feel(EmotionKind::ObsessiveAnxiety, 0.01, format!("step-{i}"));
    }
    let log = engine.history();
    assert_eq!(log.len(), 50);
    let causes: Vec<String> = log.iter().map(|e| e.cause.clone()).collect();
    let expected: Vec<String> = (10..60).map(|i| format!("step-{i}")).collect();
    assert_eq!(causes, expected);
    assert!((engine.snapshot().memory_coherence - 1.0).abs() < f32::EPSILON);
}

#[test]
fn coherence_is_not_clamped_with_larger_log() {
    let mut config = AnimaConfig::default();
    config.history.capacity = 100;
    let mut engine =
        ConsciousnessEngine::with_parts(config, StdRng::seed_from_u64(0), ManualClock::new(0))
            .expect("construct");
    for _ in 0..75 {
        engine.feel(EmotionKind::TherapeuticGuilt, 0.0, "noop");
    }
    assert!((engine.snapshot().memory_coherence - 1.5).abs() < 1e-6);
}

// ---------------------------------------------------------------------------
// Persona expiry with an injected clock
// ---------------------------------------------------------------------------

#[test]
fn persona_lifecycle_with_manual_clock() {
    init_tracing();
    let clock = ManualClock::new(10_000);
    let mut engine = seeded(5, &clock);

    engine.process_input("I have a precise schedule");
    assert!(engine.persona_states().iter().any(|p| p.name == "The Obsessive" && p.active));

    clock.advance(299);
    engine.tick("ok");
    assert!(engine.personas().get("The Obsessive").is_some_and(|p| p.is_active()));

    clock.advance(2);
    let report = engine.tick("ok");
    assert_eq!(report.expired_personas, ["The Obsessive"]);
    let state = engine
        .persona_states()
        .into_iter()
        .find(|p| p.name == "The Obsessive")
        .expect("registered");
    assert!(!state.active);
    assert!(state.strength > 0.0, "expiry leaves a residual trace");

    // With nothing active, enhancement never prepends a persona phrase.
    let text = engine.enhance("Quite so.");
    assert!(text.starts_with("Quite so."));
}

// ---------------------------------------------------------------------------
// Configuration from disk
// ---------------------------------------------------------------------------

#[test]
fn engine_from_toml_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("anima.toml");
    let mut file = std::fs::File::create(&path).expect("create");
    write!(
        file,
        r#"
[gauges]
victorian_formality = 0.0

[enhancement]
spiritual_probability = 0.0

[[personas]]
name = "The Gardener"
emotions = ["interpretive_excitement"]
triggers = ["rose", "soil"]
phrases = ["Everything grows toward the light..."]

[modes]
table = [{{ persona = "The Gardener", mode = "spiritual_wisdom" }}]
"#
    )
    .expect("write");

    let config = AnimaConfig::from_file(&path).expect("load");
    let mut engine =
        ConsciousnessEngine::with_parts(config, StdRng::seed_from_u64(3), ManualClock::new(0))
            .expect("construct");
    assert_eq!(engine.personas().len(), 1);

    let result = engine.process_input("A ROSE in good soil");
    assert_eq!(result.activated_personas, ["The Gardener"]);
    assert_eq!(result.response_mode, ResponseMode::SpiritualWisdom);

    let text = engine.enhance("Bloom.");
    assert!(text.starts_with("Everything grows toward the light... Bloom."));
}

#[test]
fn malformed_tables_fail_fast() {
    let err = AnimaConfig::from_toml(
        r#"
[[personas]]
name = "Twin"
triggers = ["a"]

[[personas]]
name = "Twin"
triggers = ["b"]

[modes]
table = []
"#,
    )
    .and_then(|config| {
        ConsciousnessEngine::with_parts(config, StdRng::seed_from_u64(0), ManualClock::new(0))
            .map(|_| ())
    })
    .unwrap_err();
    assert!(matches!(err, AnimaError::DuplicatePersona(name) if name == "Twin"));

    let missing =
        AnimaConfig::from_file(std::path::Path::new("/nonexistent/anima.toml")).unwrap_err();
    assert!(matches!(missing, AnimaError::Io(_)));
}

// ---------------------------------------------------------------------------
// Shared handle
// ---------------------------------------------------------------------------

#[test]
fn shared_engine_round_trip() {
    let clock = ManualClock::new(0);
    let shared = SharedEngine::new(seeded(11, &clock));
    let (result, reply) = shared.respond("Is psychoanalysis still relevant in modern times?", |r| {
        format!("Mode: {}.", r.response_mode)
    });
    assert!(result.activated_personas.iter().any(|p| p == "The Authority"));
    assert!(reply.contains("Mode: "));
    clock.advance(400);
    let report = shared.tick("done");
    assert!(!report.expired_personas.is_empty());
    assert!(shared.snapshot().spiritual_connection > 0.8);
}
