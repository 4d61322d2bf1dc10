use std::cmp::Ordering;

use rand::Rng;

use super::state::State;

/// Next-word probability distribution for one context.
///
/// Entries are sorted by descending probability. Equal probabilities are
/// ordered by ascending word, so the order is stable for a given model and
/// the first entry is always the same argmax.
///
/// An empty distribution means the context was never seen during training.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProbabilityDistribution {
	entries: Vec<(String, f64)>,
}

impl ProbabilityDistribution {
	/// Builds the distribution of `state`, probability = count / total.
	pub(crate) fn from_state(state: &State) -> Self {
		let total = state.total() as f64;
		let mut entries: Vec<(String, f64)> = state
			.transitions()
			.iter()
			.map(|(word, count)| (word.clone(), *count as f64 / total))
			.collect();

		entries.sort_by(|a, b| match b.1.total_cmp(&a.1) {
			Ordering::Equal => a.0.cmp(&b.0),
			ordering => ordering,
		});

		Self { entries }
	}

	/// `true` when the context is unknown to the model.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Iterates over `(word, probability)` pairs, most likely first.
	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.entries.iter().map(|(word, p)| (word.as_str(), *p))
	}

	/// Returns at most `k` entries, most likely first.
	pub fn top(&self, k: usize) -> impl Iterator<Item = (&str, f64)> {
		self.iter().take(k)
	}

	/// Most likely next word, or `None` for an unknown context.
	pub fn most_likely(&self) -> Option<&str> {
		self.entries.first().map(|(word, _)| word.as_str())
	}

	/// Running sums of the probabilities, in entry order.
	pub fn cumulative(&self) -> Vec<f64> {
		self.entries
			.iter()
			.scan(0.0, |sum, (_, p)| {
				*sum += p;
				Some(*sum)
			})
			.collect()
	}

	/// Inverse-CDF selection for a uniform draw `u` in `[0, 1)`.
	///
	/// Returns the first entry whose cumulative probability is `>= u`.
	/// Rounding can leave the last cumulative value slightly below 1.0; a draw
	/// above it selects the last entry.
	pub fn pick(&self, u: f64) -> Option<&str> {
		let cumulative = self.cumulative();
		let index = cumulative
			.iter()
			.position(|c| u <= *c)
			.unwrap_or_else(|| cumulative.len().saturating_sub(1));
		self.entries.get(index).map(|(word, _)| word.as_str())
	}

	/// Draws `u` from `rng` and selects a word with `pick`.
	///
	/// Consumes no randomness when the distribution is empty.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if self.is_empty() {
			return None;
		}
		let u: f64 = rng.random();
		self.pick(u)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn distribution(entries: &[(&str, f64)]) -> ProbabilityDistribution {
		ProbabilityDistribution {
			entries: entries.iter().map(|(w, p)| (w.to_string(), *p)).collect(),
		}
	}

	fn state(words: &[&str]) -> State {
		let mut state = State::default();
		for word in words {
			state.add_transition(word);
		}
		state
	}

	#[test]
	fn test_sorted_descending_with_word_tie_break() {
		let d = ProbabilityDistribution::from_state(&state(&["sat", "ran", "ate", "sat"]));
		let words: Vec<&str> = d.iter().map(|(w, _)| w).collect();
		assert_eq!(words, vec!["sat", "ate", "ran"]);
		assert_eq!(d.most_likely(), Some("sat"));
	}

	#[test]
	fn test_cumulative_sums() {
		let d = distribution(&[("a", 0.5), ("b", 0.25), ("c", 0.25)]);
		assert_eq!(d.cumulative(), vec![0.5, 0.75, 1.0]);
	}

	#[test]
	fn test_pick_uses_inclusive_upper_bound() {
		let d = distribution(&[("a", 0.5), ("b", 0.25), ("c", 0.25)]);
		assert_eq!(d.pick(0.0), Some("a"));
		assert_eq!(d.pick(0.5), Some("a"));
		assert_eq!(d.pick(0.500001), Some("b"));
		assert_eq!(d.pick(0.75), Some("b"));
		assert_eq!(d.pick(0.9), Some("c"));
	}

	#[test]
	fn test_pick_falls_back_to_last_entry() {
		// Cumulative tops out at 0.9.
		let d = distribution(&[("a", 0.6), ("b", 0.3)]);
		assert_eq!(d.pick(0.95), Some("b"));
	}

	#[test]
	fn test_empty_distribution() {
		let d = ProbabilityDistribution::default();
		assert!(d.is_empty());
		assert_eq!(d.most_likely(), None);
		assert_eq!(d.pick(0.3), None);
		assert!(d.cumulative().is_empty());
	}

	#[test]
	fn test_top_limits_entries() {
		let d = distribution(&[("a", 0.4), ("b", 0.3), ("c", 0.2), ("d", 0.1)]);
		let top: Vec<&str> = d.top(2).map(|(w, _)| w).collect();
		assert_eq!(top, vec!["a", "b"]);
		assert_eq!(d.top(10).count(), 4);
	}
}
