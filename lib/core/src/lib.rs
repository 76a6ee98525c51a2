//! # vecsim Core
//!
//! Core types for the vecsim similarity engine.
//!
//! - [`SimilarityMode`] - Which metric a computation runs
//! - [`MismatchMode`] - What to do when vector lengths differ
//! - [`ModeStack`] - Non-empty LIFO stack of modes with a protected default
//! - [`EngineConfig`] - Default modes for a fresh engine
//!
//! ## Example
//!
//! ```rust
//! use vecsim_core::{ModeStack, SimilarityMode};
//!
//! let mut stack = ModeStack::new(SimilarityMode::Cosine);
//! stack.push(SimilarityMode::Hamming);
//! assert_eq!(stack.current(), SimilarityMode::Hamming);
//!
//! stack.pop();
//! stack.pop(); // no-op, the default is protected
//! assert_eq!(stack.current(), SimilarityMode::Cosine);
//! ```

pub mod config;
pub mod error;
pub mod mode;
pub mod stack;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use mode::{MismatchMode, SimilarityMode};
pub use stack::ModeStack;
