use crate::engine::SimilarityEngine;
use crate::reconcile::compute_with;
use crate::MISMATCH_SENTINEL;
use parking_lot::RwLock;
use std::sync::Arc;
use vecsim_core::{EngineConfig, MismatchMode, Result, SimilarityMode};

/// Thread-safe handle to a [`SimilarityEngine`]
///
/// Clones share the same mode stacks. Pushes and pops take the write lock,
/// computations take the read lock. A push/compute/pop sequence from one
/// thread can interleave with another thread's; use
/// [`compute_with_modes`](Self::compute_with_modes) or
/// [`with_engine`](Self::with_engine) when the modes must be fixed for a call.
#[derive(Debug, Clone, Default)]
pub struct SharedSimilarityEngine {
    inner: Arc<RwLock<SimilarityEngine>>,
}

impl SharedSimilarityEngine {
    pub fn new(engine: SimilarityEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::new(SimilarityEngine::with_config(config))
    }

    pub fn push_similarity_mode(&self, mode: SimilarityMode) {
        self.inner.write().push_similarity_mode(mode);
    }

    pub fn pop_similarity_mode(&self) {
        self.inner.write().pop_similarity_mode();
    }

    pub fn current_similarity_mode(&self) -> SimilarityMode {
        self.inner.read().current_similarity_mode()
    }

    pub fn push_mismatch_mode(&self, mode: MismatchMode) {
        self.inner.write().push_mismatch_mode(mode);
    }

    pub fn pop_mismatch_mode(&self) {
        self.inner.write().pop_mismatch_mode();
    }

    pub fn current_mismatch_mode(&self) -> MismatchMode {
        self.inner.read().current_mismatch_mode()
    }

    pub fn try_compute(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        self.inner.read().try_compute(a, b)
    }

    pub fn compute(&self, a: &[f64], b: &[f64]) -> f64 {
        self.try_compute(a, b).unwrap_or(MISMATCH_SENTINEL)
    }

    /// Compute with explicit modes, bypassing the stacks entirely
    pub fn compute_with_modes(
        &self,
        a: &[f64],
        b: &[f64],
        similarity: SimilarityMode,
        mismatch: MismatchMode,
    ) -> Result<f64> {
        compute_with(a, b, similarity, mismatch)
    }

    /// Run `f` with exclusive access to the engine
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut SimilarityEngine) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Copy of the engine's current state
    pub fn snapshot(&self) -> SimilarityEngine {
        self.inner.read().clone()
    }
}

impl From<SimilarityEngine> for SharedSimilarityEngine {
    fn from(engine: SimilarityEngine) -> Self {
        Self::new(engine)
    }
}
