use rand::Rng;

use super::generation_config::GenerationConfig;
use super::prefix::{Prefix, ends_with_any};
use super::trigram_model::TrigramModel;
use crate::error::{TrigramError, TrigramResult};

/// Sentence generator walking a borrowed [`TrigramModel`].
///
/// # Responsibilities
/// - Pick a prefix that can open a sentence (bounded retries)
/// - Extend the sentence by weighted sampling of tails
/// - Stop on a terminal token once the minimum length is reached (bounded steps)
///
/// The generator never mutates the model; randomness is supplied per call,
/// so each thread can walk the same model with its own random stream.
#[derive(Debug, Clone)]
pub struct Generator<'m> {
	model: &'m TrigramModel,
	config: GenerationConfig,
}

impl<'m> Generator<'m> {
	pub fn new(model: &'m TrigramModel, config: GenerationConfig) -> Self {
		Self { model, config }
	}

	pub fn config(&self) -> &GenerationConfig {
		&self.config
	}

	/// Generates one sentence.
	///
	/// # Errors
	/// - [`TrigramError::DegenerateModel`] if the model is empty (checked first).
	/// - [`TrigramError::NoStartPrefix`] if no start prefix was drawn within
	///   `max_start_attempts`.
	/// - [`TrigramError::MissingPrefix`] if the walk reaches a prefix with no entry,
	///   which happens when it runs into the last two tokens of the corpus.
	/// - [`TrigramError::StepLimitExceeded`] if no sentence end was reached
	///   within `max_steps`.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> TrigramResult<String> {
		if self.model.is_empty() {
			return Err(TrigramError::DegenerateModel);
		}

		let mut state = self.select_start(rng)?.clone();
		let mut sentence: Vec<String> = vec![state.first().to_owned(), state.second().to_owned()];

		for _ in 0..self.config.max_steps() {
			let tail = self
				.model
				.state(&state)
				.and_then(|s| s.predict(rng))
				.ok_or_else(|| TrigramError::MissingPrefix { prefix: state.to_string() })?;

			sentence.push(tail.to_owned());
			if sentence.len() >= self.config.min_length() && ends_with_any(tail, self.config.terminals()) {
				return Ok(sentence.join(" "));
			}
			state = state.advance(tail);
		}

		Err(TrigramError::StepLimitExceeded { steps: self.config.max_steps() })
	}

	/// Generates `count` sentences, stopping at the first failure.
	///
	/// # Errors
	/// Returns the first error raised by [`Generator::generate`].
	pub fn generate_many<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> TrigramResult<Vec<String>> {
		(0..count).map(|_| self.generate(rng)).collect()
	}

	/// Draws prefixes uniformly until one can open a sentence.
	fn select_start<R: Rng + ?Sized>(&self, rng: &mut R) -> TrigramResult<&'m Prefix> {
		let attempts = self.config.max_start_attempts();
		for attempt in 1..=attempts {
			let Some(prefix) = self.model.random_prefix(rng) else {
				return Err(TrigramError::DegenerateModel);
			};
			if prefix.can_start(self.config.terminals()) {
				if attempt > attempts / 2 {
					log::warn!("start prefix '{prefix}' found after {attempt} of {attempts} attempts");
				}
				return Ok(prefix);
			}
		}
		Err(TrigramError::NoStartPrefix { attempts })
	}
}
