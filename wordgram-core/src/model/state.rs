use std::collections::HashMap;

/// Represents a context state in a word n-gram model.
///
/// A `State` corresponds to one `n - 1` word context and stores every
/// observed next word together with how many times it followed the context.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Invariants
/// - Each transition count is strictly positive
/// - `total` is always the sum of all transition counts
#[derive(Clone, Debug, Default)]
pub(crate) struct State {
	/// Outgoing transitions indexed by the next word.
	/// Example: { "sat" => 2, "ran" => 1 }
	transitions: HashMap<String, u64>,
	/// Sum of all values in `transitions`.
	total: u64,
}

impl State {
	/// Records an occurrence of a transition toward `next_word`.
	///
	/// The count and the total are updated together.
	pub(crate) fn add_transition(&mut self, next_word: &str) {
		*self.transitions.entry(next_word.to_owned()).or_insert(0) += 1;
		self.total += 1;
	}

	pub(crate) fn total(&self) -> u64 {
		self.total
	}

	pub(crate) fn transitions(&self) -> &HashMap<String, u64> {
		&self.transitions
	}
}
