//! Token filter implementations for token transformation.
//!
//! Filters rewrite or drop the tokens produced by a tokenizer. Every filter in
//! this crate only touches word tokens; symbol tokens pass through unchanged.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts words to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//! - [`stem::StemFilter`] - Reduces words to their stem form
//! - [`length::MinLengthFilter`] - Removes words that are too short
//!
//! # Filter Chaining
//!
//! ```text
//! WordTokenizer → Lowercase → Stem → Stop → MinLength
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod length;
pub mod lowercase;
pub mod stem;
pub mod stop;

pub use length::MinLengthFilter;
pub use lowercase::LowercaseFilter;
pub use stem::StemFilter;
pub use stop::StopFilter;
