//! Top-level module for the word n-gram system.
//!
//! This module provides a single runtime-parameterized n-gram model, including:
//! - Text normalization (`tokenize`)
//! - Context keys and per-context transition state
//! - The model itself (`NGramModel`): training, prediction, sampling
//! - Bounded text generation
//! - Query-time configuration (`GenerationInput`)
//! - Model statistics (`ModelStats`)

/// Text normalization into lowercase alphanumeric word tokens.
pub mod tokenizer;

/// Canonical hashable representation of an `n - 1` word context.
///
/// Not exposed publicly.
mod context;

/// Internal representation of a single context state.
///
/// Tracks next-word counts together with their running total.
/// This module is not exposed publicly.
mod state;

/// Sorted next-word probability distribution and inverse-CDF selection.
pub mod distribution;

/// Fixed-order word n-gram model (`n >= 2`).
///
/// Handles text ingestion, transition counting, probability derivation,
/// deterministic prediction and weighted sampling.
pub mod ngram_model;

/// Sliding-window text generation on top of `NGramModel`.
pub mod generator;

/// Query-time configuration: generation length, top-k, random source.
pub mod generation_input;

/// Summary statistics of a trained model.
pub mod stats;
