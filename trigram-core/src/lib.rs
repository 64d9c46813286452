//! Trigram-based random sentence generation.
//!
//! This crate provides a small word-level Markov text generator:
//! - Whitespace corpus loading
//! - Trigram model construction (sequential or chunked over threads)
//! - Weighted random-walk sentence generation with bounded retries
//!
//! The model is built once and is read-only afterwards, so any number of
//! generators may borrow it at the same time.

/// Trigram model, its building blocks and the sentence generator.
pub mod model;

/// Corpus loading (file reading and whitespace tokenization).
pub mod io;

/// Error taxonomy shared by every stage of the pipeline.
pub mod error;

pub use error::{TrigramError, TrigramResult};
pub use model::generation_config::GenerationConfig;
pub use model::generator::Generator;
pub use model::prefix::Prefix;
pub use model::trigram_model::TrigramModel;
