//! Word-level n-gram language model library.
//!
//! This crate provides a word n-gram modeling engine including:
//! - Text normalization into lowercase alphanumeric tokens
//! - Context-keyed frequency counting over a sliding window
//! - Probability distributions, argmax prediction and weighted sampling
//! - Bounded text generation with an injected random source
//! - Corpus loading from files or directories
//!
//! A model is built for a fixed order `n`: contexts are always `n - 1` words.

/// Error types shared by the model and the corpus loader.
pub mod error;

/// Core n-gram model, tokenizer and generation logic.
pub mod model;

/// Corpus loading (single file or directory of `.txt` files).
pub mod io;

pub use error::{ConfigError, CorpusError, ModelError};
pub use model::distribution::ProbabilityDistribution;
pub use model::generation_input::{GenerationInput, SeedMode};
pub use io::{Corpus, load_corpus, read_corpus};
pub use model::ngram_model::{NGramModel, TrainingOutcome, TrainingReport};
pub use model::stats::{ContextFrequency, ModelStats};
pub use model::tokenizer::tokenize;
