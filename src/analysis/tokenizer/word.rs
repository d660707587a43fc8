//! Word tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{FalcataError, Result};

/// Characters that are neither word characters nor whitespace.
const STRIP_PATTERN: &str = r"[^\w\s]";

/// A tokenizer that yields the words of a text.
///
/// Every character that is not a word character or whitespace is deleted
/// first, so punctuation inside a word joins its halves ("don't" becomes
/// "dont"). The remainder is split on any Unicode whitespace, so tabs and
/// line breaks separate words the same way spaces do.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    strip: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Result<Self> {
        let strip = Regex::new(STRIP_PATTERN)
            .map_err(|e| FalcataError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer {
            strip: Arc::new(strip),
        })
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Word strip pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let stripped = self.strip.replace_all(text, "");

        let tokens: Vec<Token> = stripped
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
