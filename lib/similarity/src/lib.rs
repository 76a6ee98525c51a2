//! # vecsim Similarity
//!
//! Similarity and distance scores between two numeric vectors.
//!
//! ## Features
//!
//! - **Seven metrics**: Cosine, Tanimoto, Ochiai, Jaccard index/distance, Dice, Hamming
//! - **Mode stacks**: Push a metric or mismatch policy, compute, pop it back off
//! - **Scoped overrides**: Guards that restore the previous mode on drop
//! - **Mismatch policies**: Bail on differing lengths, or truncate to the shorter one
//!
//! ## Example
//!
//! ```rust
//! use vecsim_similarity::{SimilarityEngine, SimilarityMode, MismatchMode, MISMATCH_SENTINEL};
//!
//! let mut engine = SimilarityEngine::new();
//! assert_eq!(engine.compute(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), 0.0);
//!
//! // Lengths differ and the default policy bails
//! assert_eq!(engine.compute(&[1.0, 2.0, 3.0], &[1.0, 2.0]), MISMATCH_SENTINEL);
//!
//! let mut engine = engine.override_mismatch(MismatchMode::Truncate);
//! engine.push_similarity_mode(SimilarityMode::Hamming);
//! assert_eq!(engine.compute(&[1.0, 2.0, 3.0], &[1.0, 5.0]), 1.0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │  similarity  │   │   mismatch   │
//! │  ModeStack   │   │  ModeStack   │
//! └──────┬───────┘   └──────┬───────┘
//!        │ current()        │ current()
//!        ▼                  ▼
//! ┌─────────────────────────────────┐
//! │ compute_with(a, b, sim, policy) │
//! │   lengths differ? ─> reconcile  │
//! │   equal ─────────> metric::score│
//! └─────────────────────────────────┘
//! ```

pub mod engine;
pub mod metric;
pub mod reconcile;
pub mod shared;
pub mod value_set;

pub use engine::{ModeGuard, SimilarityEngine};
pub use reconcile::{compute_with, reconcile};
pub use shared::SharedSimilarityEngine;
pub use value_set::ValueSet;

// Re-export core types used in this crate's signatures
pub use vecsim_core::{EngineConfig, Error, MismatchMode, ModeStack, Result, SimilarityMode};

/// Score returned by `compute` when the inputs cannot be compared
///
/// Tanimoto and Hamming are not bounded to [0, 1], so this is a convention
/// rather than an out-of-band value. Use `try_compute` to tell the cases apart.
pub const MISMATCH_SENTINEL: f64 = -1.0;
