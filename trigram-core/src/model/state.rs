use std::collections::HashMap;

use rand::Rng;

use super::prefix::Prefix;

/// Represents a state in the trigram model.
///
/// A `State` corresponds to one two-token prefix (`key`) and stores every
/// observed tail token following it, weighted by its number of observations.
///
/// ## Invariants
/// - All tails belong to the same `key`
/// - Each tail count is strictly positive
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
	key: Prefix,
	/// Example: { "sat." => 2, "ran." => 1 }
	tails: HashMap<String, usize>,
}

impl State {
	/// Creates a new empty state for the given prefix.
	pub fn new(key: Prefix) -> Self {
		Self { key, tails: HashMap::new() }
	}

	/// Read-only view of the tail counts.
	pub fn tails(&self) -> &HashMap<String, usize> {
		&self.tails
	}

	/// Total number of observations leaving this state.
	pub fn total(&self) -> usize {
		self.tails.values().sum()
	}

	/// Records one more occurrence of `tail` after this prefix.
	pub fn add_transition(&mut self, tail: &str) {
		match self.tails.get_mut(tail) {
			Some(count) => *count += 1,
			None => {
				self.tails.insert(tail.to_owned(), 1);
			}
		}
	}

	/// Picks a tail with probability proportional to its count.
	///
	/// Draws a uniform value below the total and subtracts counts until
	/// it falls inside a bucket. Returns `None` if the state has no tails.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let total = self.total();
		if total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..total);
		for (tail, count) in &self.tails {
			if r < *count {
				return Some(tail.as_str());
			}
			r -= count;
		}
		None
	}

	/// Merges another state for the same prefix into this one, summing counts.
	///
	/// # Errors
	/// Returns an error if the keys differ.
	pub fn merge(&mut self, other: &Self) -> Result<(), String> {
		if self.key != other.key {
			return Err(format!("key mismatch: '{}' vs '{}'", self.key, other.key));
		}

		for (tail, count) in &other.tails {
			*self.tails.entry(tail.clone()).or_insert(0) += *count;
		}

		Ok(())
	}
}
