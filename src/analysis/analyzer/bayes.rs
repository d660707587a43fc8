//! The classifier's default analyzer.
//!
//! Words go through `Lowercase → Stem → Stop → MinLength`. The stop list is
//! matched against stems, so a listed word whose stem is not listed ("this"
//! stems to "thi") still becomes a feature. Punctuation runs from the same
//! text are appended verbatim.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::length::MinLengthFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::{StemFilter, Stemmer};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::symbol::SymbolTokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::config::AnalyzerConfig;
use crate::error::Result;

/// Analyzer producing word and symbol features for classification.
#[derive(Clone)]
pub struct BayesAnalyzer {
    words: PipelineAnalyzer,
    symbols: Option<Arc<dyn Tokenizer>>,
    stemmer: Arc<dyn Stemmer>,
}

impl BayesAnalyzer {
    /// Create an analyzer with the default configuration (Porter stemming).
    pub fn new() -> Result<Self> {
        Self::from_config(&AnalyzerConfig::default())
    }

    /// Create an analyzer with the default configuration and a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Result<Self> {
        Self::build(&AnalyzerConfig::default(), stemmer)
    }

    /// Create an analyzer from configuration.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        Self::build(config, config.stemmer.build())
    }

    /// Create an analyzer from configuration, overriding the stemmer.
    pub fn build(config: &AnalyzerConfig, stemmer: Arc<dyn Stemmer>) -> Result<Self> {
        let words = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StemFilter::with_stemmer(stemmer.clone())))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(MinLengthFilter::with_min_length(
                config.min_word_length,
            )));

        let symbols: Option<Arc<dyn Tokenizer>> = if config.include_symbols {
            Some(Arc::new(SymbolTokenizer::new()?))
        } else {
            None
        };

        Ok(BayesAnalyzer {
            words,
            symbols,
            stemmer,
        })
    }

    /// Get the stemmer used for words.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }
}

impl Analyzer for BayesAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let words = self.words.analyze(text)?;

        match &self.symbols {
            Some(symbols) => {
                let symbols = symbols.tokenize(text)?;
                Ok(Box::new(words.chain(symbols)))
            }
            None => Ok(words),
        }
    }

    fn name(&self) -> &'static str {
        "bayes"
    }
}

impl std::fmt::Debug for BayesAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BayesAnalyzer")
            .field("words", &self.words)
            .field("symbols", &self.symbols.is_some())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}
