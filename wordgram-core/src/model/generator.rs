use rand::Rng;

use super::generation_input::GenerationInput;
use super::ngram_model::NGramModel;
use crate::error::ModelError;

impl NGramModel {
	/// Generates a word sequence starting from `initial_context`.
	///
	/// # Parameters
	/// - `initial_context`: exactly `n - 1` words, kept at the start of the output.
	/// - `max_words`: upper bound on the number of appended words.
	/// - `rng`: random source used for every sampling step.
	///
	/// # Returns
	/// - `Ok(Vec<String>)`: the initial context followed by the generated words.
	///   Fewer than `max_words` words are appended when the window reaches a
	///   context with no recorded continuation.
	/// - `Err(ModelError::InvalidContextLength)`: if the context has the wrong size.
	///
	/// # Notes
	/// - The window drops its oldest word and takes the new one at each step.
	/// - Output varies between runs unless `rng` is seeded.
	pub fn generate<S, R>(&self, initial_context: &[S], max_words: usize, rng: &mut R) -> Result<Vec<String>, ModelError>
	where
		S: AsRef<str>,
		R: Rng + ?Sized,
	{
		if initial_context.len() != self.context_len() {
			return Err(ModelError::InvalidContextLength {
				expected: self.context_len(),
				actual: initial_context.len(),
			});
		}

		let mut sequence: Vec<String> = initial_context.iter().map(|w| w.as_ref().to_owned()).collect();
		let mut window: Vec<String> = sequence.clone();

		for step in 0..max_words {
			let next_word = match self.sample_next(window.as_slice(), rng)? {
				Some(word) => word,
				None => {
					log::debug!("Generation stopped after {} words: unknown context", step);
					break;
				}
			};

			window.remove(0);
			window.push(next_word.clone());
			sequence.push(next_word);
		}

		Ok(sequence)
	}

	/// Generates a continuation using the length and seed of `input`.
	pub fn generate_with<S: AsRef<str>>(&self, initial_context: &[S], input: &GenerationInput) -> Result<Vec<String>, ModelError> {
		let mut rng = input.seed.make_rng();
		self.generate(initial_context, input.max_words, &mut rng)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::generation_input::SeedMode;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn trained(n: usize, text: &str) -> NGramModel {
		let mut model = NGramModel::new(n).unwrap();
		model.train(text);
		model
	}

	#[test]
	fn test_zero_words_returns_initial_context() {
		let model = trained(3, "the cat sat the cat ran");
		let mut rng = StdRng::seed_from_u64(0);
		assert_eq!(model.generate(&["the", "cat"], 0, &mut rng).unwrap(), vec!["the", "cat"]);
	}

	#[test]
	fn test_zero_words_on_unknown_context() {
		let model = trained(3, "the cat sat the cat ran");
		let mut rng = StdRng::seed_from_u64(0);
		assert_eq!(model.generate(&["no", "match"], 0, &mut rng).unwrap(), vec!["no", "match"]);
	}

	#[test]
	fn test_deterministic_chain() {
		// Every context has a single continuation.
		let model = trained(2, "a b c d e");
		let mut rng = StdRng::seed_from_u64(42);
		assert_eq!(model.generate(&["a"], 3, &mut rng).unwrap(), vec!["a", "b", "c", "d"]);
	}

	#[test]
	fn test_stops_at_unknown_context() {
		let model = trained(2, "a b c d e");
		let mut rng = StdRng::seed_from_u64(42);
		let words = model.generate(&["c"], 50, &mut rng).unwrap();
		assert_eq!(words, vec!["c", "d", "e"]);
	}

	#[test]
	fn test_bounded_by_max_words() {
		// "a" always follows "a".
		let model = trained(2, "a a a a");
		let mut rng = StdRng::seed_from_u64(3);
		let words = model.generate(&["a"], 7, &mut rng).unwrap();
		assert_eq!(words.len(), 8);
		assert!(words.iter().all(|w| w == "a"));
	}

	#[test]
	fn test_window_slides_for_trigrams() {
		let model = trained(3, "one two three four five");
		let mut rng = StdRng::seed_from_u64(0);
		let words = model.generate(&["one", "two"], 10, &mut rng).unwrap();
		assert_eq!(words, vec!["one", "two", "three", "four", "five"]);
	}

	#[test]
	fn test_invalid_context_length() {
		let model = trained(3, "the cat sat the cat ran");
		let mut rng = StdRng::seed_from_u64(0);
		assert_eq!(
			model.generate(&["the"], 5, &mut rng).unwrap_err(),
			ModelError::InvalidContextLength { expected: 2, actual: 1 }
		);
	}

	#[test]
	fn test_seeded_generation_is_reproducible() {
		let model = trained(2, "the dog ran the cat sat the dog sat the cat ran the end");
		let first = model.generate(&["the"], 20, &mut StdRng::seed_from_u64(9)).unwrap();
		let second = model.generate(&["the"], 20, &mut StdRng::seed_from_u64(9)).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn test_generate_with_input() {
		let model = trained(2, "a b c d e");
		let mut input = GenerationInput::default();
		input.max_words = 2;
		input.seed = SeedMode::Fixed(1);
		assert_eq!(model.generate_with(&["a"], &input).unwrap(), vec!["a", "b", "c"]);
	}
}
