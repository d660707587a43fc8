//! Text analysis for classification.
//!
//! This module turns raw text into countable features: tokenizers split the
//! text, token filters normalize and prune the tokens, and analyzers wire the
//! two together and fold the result into [`FeatureCounts`](features::FeatureCounts).

pub mod analyzer;
pub mod features;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
