//! Trigram model and sentence generation.
//!
//! - Two-token lookup keys (`Prefix`)
//! - Per-prefix weighted tail counts (`State`)
//! - The full model (`TrigramModel`)
//! - Generation parameters (`GenerationConfig`)
//! - The random-walk sentence generator (`Generator`)

/// Weighted random-walk sentence generation over a built model.
///
/// Handles start selection, tail sampling and termination, each bounded.
pub mod generator;

/// Model mapping two-token prefixes to weighted tails.
///
/// Supports sequential and multi-threaded construction and merging.
pub mod trigram_model;

/// Ordered pair of consecutive tokens used as a model key.
pub mod prefix;

/// Tail counts observed after a single prefix.
///
/// Not exposed publicly.
mod state;

/// Generation parameters: termination rule and retry/step bounds.
pub mod generation_config;
