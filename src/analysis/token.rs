//! Token types for text analysis.
//!
//! Tokens are the units that flow through the analysis pipeline. A tokenizer
//! produces them, filters rewrite or drop them, and the feature counter folds
//! whatever reaches the end into per-feature counts.
//!
//! # Examples
//!
//! ```
//! use falcata::analysis::token::{Token, TokenKind};
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.kind, TokenKind::Word);
//!
//! let symbol = Token::symbol("!?", 1);
//! assert_eq!(symbol.kind, TokenKind::Symbol);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// Whether the token came from the word stream or the symbol stream
    pub kind: TokenKind,
}

/// Which stream a token was produced by.
///
/// Word tokens are normalized (lowercased, stemmed, filtered); symbol tokens
/// are counted verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A run of word characters
    Word,
    /// A run of punctuation or other non-word, non-space characters
    Symbol,
}

impl Token {
    /// Create a new word token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            kind: TokenKind::Word,
        }
    }

    /// Create a new symbol token with the given text and position.
    pub fn symbol<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            kind: TokenKind::Symbol,
        }
    }

    /// Get the length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if this is a word token.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Replace the text of this token, keeping its position and kind.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens flowing through the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
