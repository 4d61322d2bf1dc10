use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;

use super::context::ContextKey;
use super::distribution::ProbabilityDistribution;
use super::state::State;
use super::tokenizer::tokenize;
use crate::error::ModelError;

/// Outcome of a single training call.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TrainingOutcome {
	/// The text produced at least one n-gram and counts were updated.
	Trained,
	/// The text had fewer than `n` words; the model was left untouched.
	InsufficientData { required: usize },
}

/// Summary returned by `NGramModel::train`.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainingReport {
	#[serde(flatten)]
	pub outcome: TrainingOutcome,
	/// Number of tokens in the text of this call.
	pub words: usize,
	/// Number of distinct contexts in the model after this call.
	pub contexts: usize,
}

impl TrainingReport {
	pub fn is_trained(&self) -> bool {
		self.outcome == TrainingOutcome::Trained
	}
}

/// Represents a word n-gram model.
///
/// The `NGramModel` stores one state per context of `n - 1` words and
/// derives next-word probabilities from the observed counts.
///
/// # Responsibilities
/// - Build the model from raw text (tokenized with `tokenize`)
/// - Accumulate transition counts for each context
/// - Return the sorted next-word distribution of a context
/// - Predict the most likely next word, or sample one with a caller-supplied RNG
///
/// # Invariants
/// - `n` is always >= 2
/// - Each state in `states` corresponds to a unique context of `n - 1` words
/// - All transition counts are >= 1 and each state's total is their sum
///
/// Training takes `&mut self` and queries take `&self`: a trained model can be
/// shared between readers, training must be exclusive.
#[derive(Clone, Debug)]
pub struct NGramModel {
	/// The order of the model (number of words in the n-gram)
	n: usize, // must be >= 2

	/// Mapping from a context key (`n - 1` words) to its state
	states: HashMap<ContextKey, State>,
}

impl NGramModel {
	/// Creates a new, empty n-gram model of order `n`.
	///
	/// # Errors
	/// Returns `ModelError::InvalidOrder` if `n < 2`.
	pub fn new(n: usize) -> Result<Self, ModelError> {
		if n < 2 {
			return Err(ModelError::InvalidOrder { n });
		}
		Ok(Self { n, states: HashMap::new() })
	}

	/// Order of the model.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Number of words a context must contain (`n - 1`).
	pub fn context_len(&self) -> usize {
		self.n - 1
	}

	/// Number of distinct contexts seen so far.
	pub fn context_count(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Tokenizes `text` and adds every n-gram it contains to the model.
	///
	/// Counts accumulate across calls, so several documents can be fed one
	/// after the other. Text shorter than `n` words is ignored and reported as
	/// `TrainingOutcome::InsufficientData`.
	pub fn train(&mut self, text: &str) -> TrainingReport {
		let words = tokenize(text);
		if words.len() < self.n {
			log::warn!(
				"Text too short for a {}-gram model: {} words, need at least {}",
				self.n,
				words.len(),
				self.n
			);
			return TrainingReport {
				outcome: TrainingOutcome::InsufficientData { required: self.n },
				words: words.len(),
				contexts: self.states.len(),
			};
		}

		for window in words.windows(self.n) {
			let (context, next_word) = window.split_at(self.n - 1);
			self.states
				.entry(ContextKey::from_words(context))
				.or_default()
				.add_transition(&next_word[0]);
		}

		log::info!(
			"Trained on {} words, {} unique {}-word contexts",
			words.len(),
			self.states.len(),
			self.n - 1
		);

		TrainingReport {
			outcome: TrainingOutcome::Trained,
			words: words.len(),
			contexts: self.states.len(),
		}
	}

	/// Trains on several documents in order, one report per document.
	pub fn train_all<I, S>(&mut self, texts: I) -> Vec<TrainingReport>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		texts.into_iter().map(|text| self.train(text.as_ref())).collect()
	}

	/// Looks up the state of `context` after validating its length.
	fn state<S: AsRef<str>>(&self, context: &[S]) -> Result<Option<&State>, ModelError> {
		if context.len() != self.context_len() {
			return Err(ModelError::InvalidContextLength {
				expected: self.context_len(),
				actual: context.len(),
			});
		}
		Ok(self.states.get(&ContextKey::from_words(context)))
	}

	/// Returns the next-word distribution of `context`, most likely first.
	///
	/// An unknown context yields an empty distribution.
	///
	/// # Errors
	/// Returns `ModelError::InvalidContextLength` if `context` does not hold
	/// exactly `n - 1` words.
	pub fn probabilities<S: AsRef<str>>(&self, context: &[S]) -> Result<ProbabilityDistribution, ModelError> {
		Ok(self
			.state(context)?
			.map(ProbabilityDistribution::from_state)
			.unwrap_or_default())
	}

	/// Returns the most likely next word, `None` for an unknown context.
	///
	/// Ties are broken by ascending word, so repeated calls on the same model
	/// always agree.
	pub fn predict_next<S: AsRef<str>>(&self, context: &[S]) -> Result<Option<String>, ModelError> {
		Ok(self.probabilities(context)?.most_likely().map(str::to_owned))
	}

	/// Samples a next word proportionally to its probability.
	///
	/// Uses inverse-CDF selection over the sorted distribution with one
	/// uniform draw from `rng`. Returns `None` for an unknown context.
	pub fn sample_next<S, R>(&self, context: &[S], rng: &mut R) -> Result<Option<String>, ModelError>
	where
		S: AsRef<str>,
		R: Rng + ?Sized,
	{
		Ok(self.probabilities(context)?.sample(rng).map(str::to_owned))
	}

	/// Raw next-word counts of `context`, `None` for an unknown context.
	pub fn next_word_counts<S: AsRef<str>>(&self, context: &[S]) -> Result<Option<&HashMap<String, u64>>, ModelError> {
		Ok(self.state(context)?.map(State::transitions))
	}

	/// Number of n-grams observed with `context`, 0 for an unknown context.
	pub fn context_total<S: AsRef<str>>(&self, context: &[S]) -> Result<u64, ModelError> {
		Ok(self.state(context)?.map_or(0, State::total))
	}

	/// Iterates over `(context, total)` pairs in arbitrary order.
	pub(crate) fn context_totals(&self) -> impl Iterator<Item = (&str, u64)> {
		self.states.iter().map(|(key, state)| (key.as_str(), state.total()))
	}

	/// Checks that every state's total equals the sum of its counts.
	pub fn totals_consistent(&self) -> bool {
		self.states
			.values()
			.all(|state| state.transitions().values().sum::<u64>() == state.total())
	}
}
