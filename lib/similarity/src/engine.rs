use crate::reconcile::compute_with;
use crate::MISMATCH_SENTINEL;
use std::ops::{Deref, DerefMut};
use tracing::{debug, warn};
use vecsim_core::{EngineConfig, MismatchMode, ModeStack, Result, SimilarityMode};

/// Similarity engine with stackable metric and mismatch modes
///
/// The engine owns one stack per mode kind. Callers push temporary overrides,
/// compute, and pop them again; the bottom of each stack is never removed.
/// An engine is meant for single-threaded use, see
/// [`SharedSimilarityEngine`](crate::SharedSimilarityEngine) otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityEngine {
    similarity: ModeStack<SimilarityMode>,
    mismatch: ModeStack<MismatchMode>,
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityEngine {
    /// Create an engine defaulting to cosine similarity and bailing on mismatch
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            similarity: ModeStack::new(config.similarity),
            mismatch: ModeStack::new(config.mismatch),
        }
    }

    pub fn push_similarity_mode(&mut self, mode: SimilarityMode) {
        self.similarity.push(mode);
        debug!(%mode, depth = self.similarity.depth(), "pushed similarity mode");
    }

    /// Pop the current similarity mode; no-op when only the default remains
    pub fn pop_similarity_mode(&mut self) {
        match self.similarity.pop() {
            Some(mode) => debug!(%mode, depth = self.similarity.depth(), "popped similarity mode"),
            None => debug!("similarity mode stack at default, pop ignored"),
        }
    }

    #[inline]
    pub fn current_similarity_mode(&self) -> SimilarityMode {
        self.similarity.current()
    }

    pub fn push_mismatch_mode(&mut self, mode: MismatchMode) {
        self.mismatch.push(mode);
        debug!(%mode, depth = self.mismatch.depth(), "pushed mismatch mode");
    }

    /// Pop the current mismatch mode; no-op when only the default remains
    pub fn pop_mismatch_mode(&mut self) {
        match self.mismatch.pop() {
            Some(mode) => debug!(%mode, depth = self.mismatch.depth(), "popped mismatch mode"),
            None => debug!("mismatch mode stack at default, pop ignored"),
        }
    }

    #[inline]
    pub fn current_mismatch_mode(&self) -> MismatchMode {
        self.mismatch.current()
    }

    pub fn similarity_stack(&self) -> &ModeStack<SimilarityMode> {
        &self.similarity
    }

    pub fn mismatch_stack(&self) -> &ModeStack<MismatchMode> {
        &self.mismatch
    }

    /// The currently active modes
    pub fn active_config(&self) -> EngineConfig {
        EngineConfig::new(self.current_similarity_mode(), self.current_mismatch_mode())
    }

    /// Drop all overrides on both stacks
    pub fn reset_modes(&mut self) {
        self.similarity.reset();
        self.mismatch.reset();
    }

    /// Compute the score of `a` against `b` under the active modes
    ///
    /// Fails with `LengthMismatch` when the lengths differ and the active
    /// mismatch mode is `Bail`.
    pub fn try_compute(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        compute_with(
            a,
            b,
            self.current_similarity_mode(),
            self.current_mismatch_mode(),
        )
    }

    /// Like [`try_compute`](Self::try_compute), but reports any failure as
    /// [`MISMATCH_SENTINEL`]
    pub fn compute(&self, a: &[f64], b: &[f64]) -> f64 {
        self.try_compute(a, b).unwrap_or(MISMATCH_SENTINEL)
    }

    /// Push a similarity mode for the lifetime of the returned guard
    pub fn override_similarity(&mut self, mode: SimilarityMode) -> ModeGuard<'_> {
        let restore_depth = self.similarity.depth();
        self.push_similarity_mode(mode);
        ModeGuard {
            engine: self,
            stack: GuardedStack::Similarity,
            restore_depth,
        }
    }

    /// Push a mismatch mode for the lifetime of the returned guard
    pub fn override_mismatch(&mut self, mode: MismatchMode) -> ModeGuard<'_> {
        let restore_depth = self.mismatch.depth();
        self.push_mismatch_mode(mode);
        ModeGuard {
            engine: self,
            stack: GuardedStack::Mismatch,
            restore_depth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardedStack {
    Similarity,
    Mismatch,
}

/// Scoped mode override
///
/// Dereferences to the engine. On drop the overridden stack is restored to
/// the depth it had before the override was pushed, which also discards any
/// push made through the guard and left unpopped. Popping through the guard
/// below that depth removes entries pushed before the guard existed; they are
/// not restored on drop.
#[derive(Debug)]
pub struct ModeGuard<'a> {
    engine: &'a mut SimilarityEngine,
    stack: GuardedStack,
    restore_depth: usize,
}

impl Deref for ModeGuard<'_> {
    type Target = SimilarityEngine;

    fn deref(&self) -> &SimilarityEngine {
        self.engine
    }
}

impl DerefMut for ModeGuard<'_> {
    fn deref_mut(&mut self) -> &mut SimilarityEngine {
        self.engine
    }
}

impl Drop for ModeGuard<'_> {
    fn drop(&mut self) {
        let depth = match self.stack {
            GuardedStack::Similarity => self.engine.similarity.depth(),
            GuardedStack::Mismatch => self.engine.mismatch.depth(),
        };
        if depth < self.restore_depth {
            warn!(
                stack = ?self.stack,
                depth,
                restore_depth = self.restore_depth,
                "mode stack popped below its override guard"
            );
        }
        match self.stack {
            GuardedStack::Similarity => self.engine.similarity.truncate(self.restore_depth),
            GuardedStack::Mismatch => self.engine.mismatch.truncate(self.restore_depth),
        }
        debug!(stack = ?self.stack, depth = self.restore_depth, "mode override released");
    }
}
