//! # vecsim
//!
//! Similarity and distance scores between numeric vectors under a selectable
//! metric, with configurable handling of vectors of differing length.
//!
//! ## Quick Start
//!
//! ```rust
//! use vecsim::prelude::*;
//!
//! let mut engine = SimilarityEngine::new();
//!
//! // Cosine by default
//! let score = engine.compute(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]);
//! assert!((score - 1.0).abs() < 1e-12);
//!
//! // Temporary override, popped again afterwards
//! engine.push_similarity_mode(SimilarityMode::Hamming);
//! assert_eq!(engine.compute(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0]), 1.0);
//! engine.pop_similarity_mode();
//!
//! // Explicit error instead of the -1.0 sentinel
//! let err = engine.try_compute(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
//! assert_eq!(err, Error::LengthMismatch { left: 3, right: 2 });
//! ```
//!
//! ## Crate Structure
//!
//! - `vecsim-core` - Modes, mode stacks, engine configuration, errors
//! - `vecsim-similarity` - Metric functions, length reconciliation, engines
//!
//! ## Metrics
//!
//! | Mode | Score |
//! |---|---|
//! | Cosine | dot(A,B) / (‖A‖·‖B‖) |
//! | Tanimoto | dot(A,B) / (‖A‖² + ‖B‖² − dot(A,B)) |
//! | Ochiai | \|A∩B\| / √(\|A\|·\|B\|) over distinct values |
//! | JaccardIndex | \|A∩B\| / \|A∪B\| over distinct values |
//! | JaccardDistance | 1 − JaccardIndex |
//! | Dice | 2·\|A∩B\| / (\|A\| + \|B\|) over distinct values |
//! | Hamming | number of differing positions |

// Re-export core types
pub use vecsim_core::{EngineConfig, Error, MismatchMode, ModeStack, Result, SimilarityMode};

// Re-export the engine
pub use vecsim_similarity::{
    compute_with, reconcile, ModeGuard, SharedSimilarityEngine, SimilarityEngine, ValueSet,
    MISMATCH_SENTINEL,
};

/// Metric functions over equal-length slices
pub mod metric {
    pub use vecsim_similarity::metric::{
        cosine, dice, dot, hamming, jaccard_distance, jaccard_index, magnitude, ochiai, score,
        tanimoto,
    };
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        compute_with, EngineConfig, Error, MismatchMode, ModeGuard, Result,
        SharedSimilarityEngine, SimilarityEngine, SimilarityMode, MISMATCH_SENTINEL,
    };
}
