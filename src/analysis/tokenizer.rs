//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline. Text is split two
//! ways and both results become features:
//!
//! - [`word::WordTokenizer`] - runs of word characters, after punctuation is
//!   stripped out of the text
//! - [`symbol::SymbolTokenizer`] - the punctuation runs themselves
//!
//! # Examples
//!
//! ```
//! use falcata::analysis::tokenizer::Tokenizer;
//! use falcata::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so an analyzer can be shared by a
/// classifier behind a lock.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod symbol;
pub mod word;

pub use symbol::SymbolTokenizer;
pub use word::WordTokenizer;
