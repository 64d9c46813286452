use std::fs;
use std::path::Path;

use crate::error::{TrigramError, TrigramResult};

/// Reads a UTF-8 text file and returns its whitespace-delimited tokens.
///
/// - Reads the entire file into memory
/// - Tokens keep their casing and punctuation
///
/// # Errors
/// Returns [`TrigramError::Io`] if the file cannot be opened or is not valid UTF-8.
pub fn read_tokens<P: AsRef<Path>>(filename: P) -> TrigramResult<Vec<String>> {
	let path = filename.as_ref();
	let contents = fs::read_to_string(path).map_err(|source| TrigramError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	let tokens = tokenize(&contents);
	log::debug!("read {} tokens from {}", tokens.len(), path.display());
	Ok(tokens)
}

/// Splits text on any run of whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn tokenize_splits_on_any_whitespace_run() {
		let tokens = tokenize("  The cat\tsat.\n\nThe   dog ran!\r\n");
		assert_eq!(tokens, ["The", "cat", "sat.", "The", "dog", "ran!"]);
	}

	#[test]
	fn tokenize_keeps_case_and_punctuation() {
		assert_eq!(tokenize("Hello, World? yes."), ["Hello,", "World?", "yes."]);
	}

	#[test]
	fn tokenize_empty_text() {
		assert!(tokenize("").is_empty());
		assert!(tokenize(" \n\t ").is_empty());
	}

	#[test]
	fn read_tokens_from_temp_file() {
		let path = std::env::temp_dir().join("trigram_core_io_read_tokens.txt");
		let mut f = fs::File::create(&path).unwrap();
		writeln!(f, "The cat sat.").unwrap();
		writeln!(f, "  The dog ran.  ").unwrap();
		f.sync_all().unwrap();
		drop(f);

		let result = read_tokens(&path);
		let _ = fs::remove_file(&path);
		assert_eq!(result.unwrap(), ["The", "cat", "sat.", "The", "dog", "ran."]);
	}

	#[test]
	fn read_tokens_rejects_invalid_utf8() {
		let path = std::env::temp_dir().join("trigram_core_io_invalid_utf8.txt");
		fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

		let result = read_tokens(&path);
		let _ = fs::remove_file(&path);
		assert!(matches!(result, Err(TrigramError::Io { .. })));
	}

	#[test]
	fn read_tokens_missing_file_is_io_error() {
		let result = read_tokens("/nonexistent/trigram_core_never_exists.txt");
		match result {
			Err(TrigramError::Io { path, source }) => {
				assert!(path.ends_with("trigram_core_never_exists.txt"));
				assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
			}
			other => panic!("expected Io error, got {other:?}"),
		}
	}
}
