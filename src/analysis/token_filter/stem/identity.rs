//! Pass-through stemmer.

use crate::analysis::token_filter::stem::Stemmer;

/// Stemmer that leaves every word as it is.
///
/// Plugging it into a [`BayesAnalyzer`] keeps surface forms as features,
/// which makes classifier behavior easy to reason about in isolation from
/// Porter's rules.
///
/// [`BayesAnalyzer`]: crate::analysis::analyzer::BayesAnalyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_owned()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
