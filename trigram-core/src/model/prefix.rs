use std::fmt;

/// Ordered pair of consecutive tokens used as a model key.
///
/// The display form is the two tokens joined by a single space,
/// e.g. `"The cat"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix {
	first: String,
	second: String,
}

impl Prefix {
	/// Creates a prefix from two tokens.
	pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
		Self { first: first.into(), second: second.into() }
	}

	/// Parses the display form `"first second"`.
	///
	/// Returns `None` unless the key holds exactly two tokens.
	pub fn from_key(key: &str) -> Option<Self> {
		let mut parts = key.split_whitespace();
		let prefix = Self::new(parts.next()?, parts.next()?);
		match parts.next() {
			Some(_) => None,
			None => Some(prefix),
		}
	}

	pub fn first(&self) -> &str {
		&self.first
	}

	pub fn second(&self) -> &str {
		&self.second
	}

	/// Returns the prefix reached after emitting `tail`: `(second, tail)`.
	pub fn advance(&self, tail: &str) -> Self {
		Self::new(self.second.clone(), tail)
	}

	/// Whether this prefix plausibly opens a sentence.
	///
	/// The first token must start with an uppercase letter and must not end
	/// with one of `terminals`.
	pub fn can_start(&self, terminals: &[char]) -> bool {
		let starts_upper = self.first.chars().next().is_some_and(char::is_uppercase);
		starts_upper && !ends_with_any(&self.first, terminals)
	}
}

impl fmt::Display for Prefix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.first, self.second)
	}
}

/// Whether the last character of `token` is one of `terminals`.
pub(crate) fn ends_with_any(token: &str, terminals: &[char]) -> bool {
	token.chars().next_back().is_some_and(|c| terminals.contains(&c))
}

#[cfg(test)]
mod tests {
	use super::*;

	const TERMINALS: [char; 3] = ['.', '!', '?'];

	#[test]
	fn display_joins_with_single_space() {
		assert_eq!(Prefix::new("The", "cat").to_string(), "The cat");
	}

	#[test]
	fn from_key_round_trips_display() {
		let p = Prefix::new("The", "cat");
		assert_eq!(Prefix::from_key(&p.to_string()), Some(p));
		assert_eq!(Prefix::from_key("one"), None);
		assert_eq!(Prefix::from_key("one two three"), None);
	}

	#[test]
	fn advance_shifts_window() {
		let next = Prefix::new("The", "cat").advance("sat.");
		assert_eq!(next, Prefix::new("cat", "sat."));
	}

	#[test]
	fn can_start_requires_uppercase_and_no_terminal() {
		assert!(Prefix::new("The", "cat").can_start(&TERMINALS));
		assert!(Prefix::new("Élan", "vital").can_start(&TERMINALS));
		assert!(!Prefix::new("the", "cat").can_start(&TERMINALS));
		assert!(!Prefix::new("Mr.", "Smith").can_start(&TERMINALS));
		assert!(!Prefix::new("Stop!", "now").can_start(&TERMINALS));
		assert!(!Prefix::new("\"Hello", "there").can_start(&TERMINALS));
	}

	#[test]
	fn ends_with_any_checks_last_char() {
		assert!(ends_with_any("sat.", &TERMINALS));
		assert!(ends_with_any("why?", &TERMINALS));
		assert!(!ends_with_any("sat", &TERMINALS));
		assert!(!ends_with_any("", &TERMINALS));
	}
}
