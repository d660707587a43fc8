//! # Falcata
//!
//! A multinomial naive Bayes text classifier.
//!
//! ## Features
//!
//! - Pluggable text analysis pipeline (tokenizers, filters, stemmers)
//! - Porter stemming and English stop-word removal by default
//! - Incremental training and untraining of documents
//! - Log-probability scoring with deterministic tie-breaking
//! - Binary and JSON model snapshots with atomic file saves
//!
//! ## Example
//!
//! ```
//! use falcata::prelude::*;
//!
//! # fn main() -> falcata::error::Result<()> {
//! let mut classifier = NaiveBayesClassifier::new(["spam", "ham"])?;
//! classifier.train("spam", "Win a free prize now! Click here!!!")?;
//! classifier.train("ham", "Meeting notes attached, see agenda for tomorrow")?;
//!
//! let result = classifier.classify("free prize inside!!!")?;
//! assert_eq!(result.label(), Some("spam"));
//!
//! let bytes = classifier.to_bytes(SnapshotFormat::Binary)?;
//! let restored = NaiveBayesClassifier::from_bytes(&bytes)?;
//! assert_eq!(restored.classify("free prize inside!!!")?, result);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod persistence;
pub mod util;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, BayesAnalyzer};
    pub use crate::analysis::features::FeatureCounts;
    pub use crate::analysis::token_filter::stem::{IdentityStemmer, PorterStemmer, Stemmer};
    pub use crate::classifier::{Classification, NaiveBayesClassifier, SharedClassifier};
    pub use crate::config::{AnalyzerConfig, ClassifierConfig, ScoringConfig, StemmerKind};
    pub use crate::error::{FalcataError, Result};
    pub use crate::persistence::SnapshotFormat;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
