//! Mutex-guarded engine handle for concurrent hosts.
//!
//! `process_input`, `enhance` and `tick` all read-modify-write the same
//! emotion vector and persona set, so they must never interleave on one
//! engine. [`SharedEngine`] takes the lock for the whole of each call.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::Rng;
use rand::rngs::StdRng;

use crate::clock::{Clock, SystemClock};
use crate::engine::{ConsciousnessEngine, InteractionResult, TickReport};
use crate::snapshot::ConsciousnessSnapshot;

/// Cloneable, thread-safe handle to one engine.
#[derive(Debug)]
pub struct SharedEngine<R = StdRng, C = SystemClock> {
    inner: Arc<Mutex<ConsciousnessEngine<R, C>>>,
}

impl<R, C> Clone for SharedEngine<R, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Rng, C: Clock> SharedEngine<R, C> {
    /// Wrap an engine.
    #[must_use]
    pub fn new(engine: ConsciousnessEngine<R, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// See [`ConsciousnessEngine::process_input`].
    pub fn process_input(&self, text: &str) -> InteractionResult {
        self.inner.lock().process_input(text)
    }

    /// See [`ConsciousnessEngine::enhance`].
    pub fn enhance(&self, base_text: &str) -> String {
        self.inner.lock().enhance(base_text)
    }

    /// Process input and enhance a response under a single lock, so no
    /// other caller's tick or input can land between the two.
    pub fn respond<F>(&self, text: &str, base_response: F) -> (InteractionResult, String)
    where
        F: FnOnce(&InteractionResult) -> String,
    {
        let mut engine = self.inner.lock();
        let result = engine.process_input(text);
        let base = base_response(&result);
        let enhanced = engine.enhance(&base);
        (result, enhanced)
    }

    /// See [`ConsciousnessEngine::tick`].
    pub fn tick(&self, outcome: &str) -> TickReport {
        self.inner.lock().tick(outcome)
    }

    /// See [`ConsciousnessEngine::snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> ConsciousnessSnapshot {
        self.inner.lock().snapshot()
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut ConsciousnessEngine<R, C>) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
