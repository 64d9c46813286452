use crate::error::{TrigramError, TrigramResult};

/// Default number of sentences the driver asks for.
pub const DEFAULT_SENTENCE_COUNT: usize = 10;

/// Parameters controlling sentence generation.
///
/// # Responsibilities
/// - Sentence termination rule (`min_length`, `terminals`)
/// - Bounds on start selection and walk length
/// - Number of sentences requested per run
///
/// # Invariants
/// - `min_length >= 2`
/// - `terminals` is not empty
/// - `max_start_attempts >= 1` and `max_steps >= 1`
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
	min_length: usize,
	terminals: Vec<char>,
	max_start_attempts: usize,
	max_steps: usize,

	/// Number of sentences a run asks for.
	pub sentence_count: usize,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			min_length: 5,
			terminals: vec!['.', '!', '?'],
			max_start_attempts: 10_000,
			max_steps: 1_000,
			sentence_count: DEFAULT_SENTENCE_COUNT,
		}
	}
}

impl GenerationConfig {
	/// Minimum number of tokens before a sentence may end.
	pub fn min_length(&self) -> usize {
		self.min_length
	}

	/// Characters that end a sentence when they end a token.
	pub fn terminals(&self) -> &[char] {
		&self.terminals
	}

	/// Maximum number of random draws when looking for a start prefix.
	pub fn max_start_attempts(&self) -> usize {
		self.max_start_attempts
	}

	/// Maximum number of tokens appended after the start prefix.
	pub fn max_steps(&self) -> usize {
		self.max_steps
	}

	/// # Errors
	/// Returns an error if `min_length < 2`; the start prefix alone holds two tokens.
	pub fn set_min_length(&mut self, min_length: usize) -> TrigramResult<()> {
		if min_length < 2 {
			return Err(TrigramError::InvalidConfig(format!(
				"min_length must be >= 2, got {min_length}"
			)));
		}
		self.min_length = min_length;
		Ok(())
	}

	/// # Errors
	/// Returns an error if `terminals` is empty.
	pub fn set_terminals(&mut self, terminals: &[char]) -> TrigramResult<()> {
		if terminals.is_empty() {
			return Err(TrigramError::InvalidConfig("terminals must not be empty".to_owned()));
		}
		self.terminals = terminals.to_vec();
		Ok(())
	}

	/// # Errors
	/// Returns an error if `attempts` is zero.
	pub fn set_max_start_attempts(&mut self, attempts: usize) -> TrigramResult<()> {
		if attempts == 0 {
			return Err(TrigramError::InvalidConfig("max_start_attempts must be >= 1".to_owned()));
		}
		self.max_start_attempts = attempts;
		Ok(())
	}

	/// # Errors
	/// Returns an error if `steps` is zero.
	pub fn set_max_steps(&mut self, steps: usize) -> TrigramResult<()> {
		if steps == 0 {
			return Err(TrigramError::InvalidConfig("max_steps must be >= 1".to_owned()));
		}
		self.max_steps = steps;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = GenerationConfig::default();
		assert_eq!(config.min_length(), 5);
		assert_eq!(config.terminals(), ['.', '!', '?']);
		assert_eq!(config.sentence_count, 10);
		assert!(config.max_start_attempts() > 0);
		assert!(config.max_steps() > 0);
	}

	#[test]
	fn setters_validate() {
		let mut config = GenerationConfig::default();
		assert!(matches!(config.set_min_length(1), Err(TrigramError::InvalidConfig(_))));
		assert!(config.set_terminals(&[]).is_err());
		assert!(config.set_max_start_attempts(0).is_err());
		assert!(config.set_max_steps(0).is_err());
		assert_eq!(config, GenerationConfig::default());

		config.set_min_length(2).unwrap();
		config.set_terminals(&[';']).unwrap();
		config.set_max_start_attempts(3).unwrap();
		config.set_max_steps(4).unwrap();
		assert_eq!(config.min_length(), 2);
		assert_eq!(config.terminals(), [';']);
		assert_eq!(config.max_start_attempts(), 3);
		assert_eq!(config.max_steps(), 4);
	}
}
