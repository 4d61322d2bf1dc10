use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::ConfigError;

/// Default number of words appended by a generation call.
pub const DEFAULT_MAX_WORDS: usize = 32;

/// Default number of probability entries shown for a query.
pub const DEFAULT_TOP_K: usize = 5;

/// Strategy used to build the random source of a generation run.
///
/// # Variants
/// - `Entropy`: seed from the operating system; runs differ.
/// - `Fixed(u64)`: seed from the given value; runs are reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SeedMode {
	#[default]
	Entropy,
	Fixed(u64),
}

impl SeedMode {
	/// Builds the random source described by this mode.
	pub fn make_rng(&self) -> StdRng {
		match self {
			SeedMode::Entropy => StdRng::from_os_rng(),
			SeedMode::Fixed(seed) => StdRng::seed_from_u64(*seed),
		}
	}
}

impl From<Option<u64>> for SeedMode {
	fn from(seed: Option<u64>) -> Self {
		seed.map_or(SeedMode::Entropy, SeedMode::Fixed)
	}
}

/// Query-time parameters for predictions and generation.
///
/// # Responsibilities
/// - Bound the length of generated continuations (`max_words`)
/// - Limit how many distribution entries are reported (`top_k`)
/// - Describe how the random source is seeded (`seed`)
///
/// # Invariants
/// - `top_k` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Maximum number of words appended to the initial context.
	pub max_words: usize,

	/// Number of most likely entries reported for a query.
	top_k: usize,

	/// Random source seeding strategy.
	pub seed: SeedMode,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			max_words: DEFAULT_MAX_WORDS,
			top_k: DEFAULT_TOP_K,
			seed: SeedMode::Entropy,
		}
	}
}

impl GenerationInput {
	/// Returns the current top-k value.
	pub fn top_k(&self) -> usize {
		self.top_k
	}

	/// Sets how many distribution entries are reported.
	///
	/// # Errors
	/// Returns `ConfigError::InvalidTopK` if `top_k` is 0.
	pub fn set_top_k(&mut self, top_k: usize) -> Result<(), ConfigError> {
		if top_k == 0 {
			return Err(ConfigError::InvalidTopK);
		}
		self.top_k = top_k;
		Ok(())
	}
}
