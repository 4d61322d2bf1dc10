use std::fmt;

use serde::Serialize;

use super::ngram_model::NGramModel;

/// Summary statistics of a trained model.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ModelStats {
	/// Order of the model.
	pub n: usize,
	/// Number of distinct contexts.
	pub unique_contexts: usize,
	/// Number of n-grams counted, summed over all contexts.
	pub total_ngrams: u64,
	/// Contexts with the most observations, most frequent first.
	pub most_common: Vec<ContextFrequency>,
}

/// One entry of `ModelStats::most_common`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ContextFrequency {
	pub context: String,
	pub count: u64,
}

impl NGramModel {
	/// Computes the statistics of the model, keeping the `top` most common
	/// contexts. Contexts with equal counts are listed alphabetically.
	pub fn stats(&self, top: usize) -> ModelStats {
		let mut contexts: Vec<(&str, u64)> = self.context_totals().collect();
		let total_ngrams: u64 = contexts.iter().map(|(_, total)| total).sum();

		contexts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

		ModelStats {
			n: self.order(),
			unique_contexts: contexts.len(),
			total_ngrams,
			most_common: contexts
				.into_iter()
				.take(top)
				.map(|(context, count)| ContextFrequency { context: context.to_owned(), count })
				.collect(),
		}
	}
}

impl fmt::Display for ModelStats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "=== Model Statistics ===")?;
		writeln!(f, "N-gram size: {}", self.n)?;
		writeln!(f, "Unique contexts: {}", self.unique_contexts)?;
		writeln!(f, "Total n-grams: {}", self.total_ngrams)?;
		writeln!(f)?;
		writeln!(f, "Most common contexts:")?;
		for entry in &self.most_common {
			writeln!(f, "  \"{}\": {} times", entry.context, entry.count)?;
		}
		Ok(())
	}
}
