use std::path::PathBuf;

/// Errors produced while loading a corpus, building a model or generating.
#[derive(Debug, thiserror::Error)]
pub enum TrigramError {
	/// The corpus could not be opened or read (missing, unreadable, not UTF-8).
	#[error("cannot read corpus '{}': {source}", .path.display())]
	Io {
		/// Path that failed.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// The model holds no trigram (the corpus had fewer than three tokens).
	#[error("trigram model is empty: corpus needs at least 3 tokens")]
	DegenerateModel,

	/// No prefix able to start a sentence was drawn within the retry bound.
	#[error("no sentence start found after {attempts} attempts")]
	NoStartPrefix {
		/// Number of draws made.
		attempts: usize,
	},

	/// The walk did not reach a sentence end within the step cap.
	#[error("sentence did not terminate within {steps} steps")]
	StepLimitExceeded {
		/// Number of steps taken.
		steps: usize,
	},

	/// The walk reached a prefix that has no entry in the model.
	#[error("prefix '{prefix}' is missing from the model")]
	MissingPrefix {
		/// Display form of the missing prefix.
		prefix: String,
	},

	/// A configuration value was rejected.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	/// Partial models could not be combined.
	#[error("model merge failed: {0}")]
	Merge(String),
}

impl TrigramError {
	/// Returns `true` for the errors raised while walking a built model.
	pub fn is_generation_error(&self) -> bool {
		matches!(
			self,
			Self::NoStartPrefix { .. } | Self::StepLimitExceeded { .. } | Self::MissingPrefix { .. }
		)
	}
}

/// Result type for trigram operations.
pub type TrigramResult<T> = Result<T, TrigramError>;
