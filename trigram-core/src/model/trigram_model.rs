use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use rand::Rng;
use rand::prelude::IteratorRandom;

use super::prefix::Prefix;
use super::state::State;
use crate::error::{TrigramError, TrigramResult};

/// Word-level trigram model.
///
/// Maps every two-token prefix observed in the corpus to the tokens that
/// followed it, with their occurrence counts.
///
/// # Invariants
/// - Every key was observed as the first two tokens of at least one trigram
/// - `count(p, t)` equals the number of times `(p.first, p.second, t)`
///   occurred consecutively in the corpus
///
/// The model is built once and only read afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrigramModel {
	states: HashMap<Prefix, State>,
}

impl TrigramModel {
	/// Builds a model from an ordered token sequence.
	///
	/// Sequences shorter than three tokens yield an empty model.
	pub fn build<S: AsRef<str>>(tokens: &[S]) -> Self {
		let mut model = Self::default();
		for window in tokens.windows(3) {
			model.add_trigram(window[0].as_ref(), window[1].as_ref(), window[2].as_ref());
		}
		model
	}

	/// Builds the same model as [`TrigramModel::build`], splitting the work
	/// over worker threads.
	///
	/// # Behavior
	/// - Splits the trigram start positions into chunks (CPU cores * factor).
	/// - Each chunk reads two extra tokens past its end so that trigrams
	///   crossing a chunk boundary are counted exactly once.
	/// - Partial models are sent back over a channel and merged.
	///
	/// # Errors
	/// Returns [`TrigramError::Merge`] if a worker fails to report its model.
	pub fn build_parallel<S: AsRef<str> + Sync>(tokens: &[S]) -> TrigramResult<Self> {
		if tokens.len() < 3 {
			return Ok(Self::default());
		}

		let positions = tokens.len() - 2;
		let factor = 8;
		let chunks = num_cpus::get() * factor;
		let chunk_size = positions.div_ceil(chunks).max(1);

		let (tx, rx) = mpsc::channel();
		let mut spawned = 0;
		thread::scope(|scope| {
			for start in (0..positions).step_by(chunk_size) {
				let end = (start + chunk_size + 2).min(tokens.len());
				let chunk = &tokens[start..end];
				let tx = tx.clone();
				spawned += 1;
				scope.spawn(move || {
					let partial = Self::build(chunk);
					log::debug!("chunk at {start}: {} prefixes", partial.len());
					// The receiver outlives the scope, so this cannot fail.
					let _ = tx.send(partial);
				});
			}
		});
		drop(tx);

		let mut model = Self::default();
		let mut received = 0;
		for partial in rx.iter() {
			model.merge(&partial)?;
			received += 1;
		}

		if received != spawned {
			return Err(TrigramError::Merge(format!(
				"expected {spawned} partial models, received {received}"
			)));
		}

		Ok(model)
	}

	fn add_trigram(&mut self, first: &str, second: &str, tail: &str) {
		let key = Prefix::new(first, second);
		self.states
			.entry(key.clone())
			.or_insert_with(|| State::new(key))
			.add_transition(tail);
	}

	/// Merges another model into this one, summing counts per prefix and tail.
	///
	/// # Errors
	/// Returns [`TrigramError::Merge`] if two states under one key disagree on it.
	pub fn merge(&mut self, other: &Self) -> TrigramResult<()> {
		for (key, state) in &other.states {
			if let Some(existing) = self.states.get_mut(key) {
				existing.merge(state).map_err(TrigramError::Merge)?;
			} else {
				self.states.insert(key.clone(), state.clone());
			}
		}
		Ok(())
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Total number of trigrams counted (sum of every count).
	pub fn trigram_count(&self) -> usize {
		self.states.values().map(State::total).sum()
	}

	/// Iterates over every prefix, in no particular order.
	pub fn prefixes(&self) -> impl Iterator<Item = &Prefix> {
		self.states.keys()
	}

	pub(crate) fn state(&self, prefix: &Prefix) -> Option<&State> {
		self.states.get(prefix)
	}

	/// Tail counts observed after `prefix`, if the prefix is known.
	pub fn tails(&self, prefix: &Prefix) -> Option<&HashMap<String, usize>> {
		self.states.get(prefix).map(State::tails)
	}

	/// Number of times `tail` followed `prefix` (0 if never).
	pub fn count(&self, prefix: &Prefix, tail: &str) -> usize {
		self.tails(prefix)
			.and_then(|tails| tails.get(tail))
			.copied()
			.unwrap_or(0)
	}

	/// Returns a prefix drawn uniformly at random, or `None` if the model is empty.
	pub fn random_prefix<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Prefix> {
		self.states.keys().choose(rng)
	}
}
