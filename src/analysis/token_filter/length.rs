//! Minimum length filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default minimum length, in characters, of a word feature.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// A filter that removes word tokens shorter than a minimum length.
///
/// Length is measured in characters, after any earlier filters (stemming in
/// particular) have run. Symbol tokens are never removed.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a filter with the default minimum length.
    pub fn new() -> Self {
        Self::with_min_length(DEFAULT_MIN_WORD_LENGTH)
    }

    /// Create a filter keeping only words of at least `min_length` characters.
    pub fn with_min_length(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }

    /// Get the minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for MinLengthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !token.is_word() || token.char_len() >= min_length)
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
