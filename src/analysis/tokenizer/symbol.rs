//! Symbol tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{FalcataError, Result};

/// Maximal runs of characters that are neither word characters nor whitespace.
const SYMBOL_PATTERN: &str = r"[^\w\s]+";

/// A tokenizer that yields punctuation runs.
///
/// Word characters and whitespace both act as separators, so `"wow!!! ok?"`
/// produces `"!!!"` and `"?"`. Empty runs are never produced.
#[derive(Clone, Debug)]
pub struct SymbolTokenizer {
    pattern: Arc<Regex>,
}

impl SymbolTokenizer {
    /// Create a new symbol tokenizer.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(SYMBOL_PATTERN)
            .map_err(|e| FalcataError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(SymbolTokenizer {
            pattern: Arc::new(pattern),
        })
    }
}

impl Default for SymbolTokenizer {
    fn default() -> Self {
        Self::new().expect("Symbol pattern should be valid")
    }
}

impl Tokenizer for SymbolTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| Token::symbol(mat.as_str(), position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "symbol"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenKind;

    #[test]
    fn test_symbol_tokenizer() {
        let tokenizer = SymbolTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("wow!!! ok?").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "!!!");
        assert_eq!(tokens[0].kind, TokenKind::Symbol);
        assert_eq!(tokens[1].text, "?");
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_word_characters_separate_runs() {
        let tokenizer = SymbolTokenizer::new().unwrap();
        let texts: Vec<String> = tokenizer
            .tokenize("e.g. a-b")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(texts, vec![".", ".", "-"]);
    }

    #[test]
    fn test_plain_words_produce_nothing() {
        let tokenizer = SymbolTokenizer::new().unwrap();
        assert_eq!(tokenizer.tokenize("just words here").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
    }

    #[test]
    fn test_whitespace_is_never_part_of_a_run() {
        let tokenizer = SymbolTokenizer::new().unwrap();
        let texts: Vec<String> = tokenizer
            .tokenize("apple\nbanana.\tcar ;\n\t;")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(texts, vec![".", ";", ";"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SymbolTokenizer::new().unwrap().name(), "symbol");
    }
}
