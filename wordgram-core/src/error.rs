use std::io;
use std::path::PathBuf;

/// Errors raised by `NGramModel` construction and queries.
///
/// An unknown context is not an error: queries return an empty
/// distribution (or `None`) instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
	#[error("n must be >= 2, got {n}")]
	InvalidOrder { n: usize },

	#[error("context must contain exactly {expected} words, got {actual}")]
	InvalidContextLength { expected: usize, actual: usize },
}

/// Errors raised while loading a training corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The corpus source exists but holds no text at all.
	#[error("no training data available in {}", .path.display())]
	Empty { path: PathBuf },
}

/// Errors raised by `GenerationInput` setters.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
	#[error("top_k must be >= 1")]
	InvalidTopK,
}
