//! Analyzers combine tokenizers and filters into a complete pipeline.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → FeatureCounts
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - one tokenizer plus a filter chain
//! - [`BayesAnalyzer`](bayes::BayesAnalyzer) - the classifier's default: normalized words
//!   merged with raw punctuation runs

use crate::analysis::features::FeatureCounts;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a classifier holding an analyzer can be
/// shared across threads behind a lock.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and count the resulting features.
    ///
    /// # Examples
    ///
    /// ```
    /// use falcata::analysis::analyzer::Analyzer;
    /// use falcata::analysis::analyzer::bayes::BayesAnalyzer;
    ///
    /// let analyzer = BayesAnalyzer::new().unwrap();
    /// let features = analyzer.features("Apples, apples and bananas!").unwrap();
    ///
    /// assert_eq!(features.get("appl"), 2);
    /// assert_eq!(features.get("banana"), 1);
    /// assert_eq!(features.get("!"), 1);
    /// assert_eq!(features.get("and"), 0);
    /// ```
    fn features(&self, text: &str) -> Result<FeatureCounts> {
        Ok(FeatureCounts::from_tokens(self.analyze(text)?))
    }
}

pub mod bayes;
pub mod pipeline;

pub use bayes::BayesAnalyzer;
pub use pipeline::PipelineAnalyzer;
