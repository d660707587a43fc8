//! Configuration for analysis and scoring.
//!
//! Every field has a default matching the classifier's standard behavior, so
//! a partial JSON document only needs to name what it changes:
//!
//! ```
//! use falcata::config::{ClassifierConfig, StemmerKind};
//!
//! let config = ClassifierConfig::from_json_str(r#"{ "analyzer": { "stemmer": "identity" } }"#).unwrap();
//! assert_eq!(config.analyzer.stemmer, StemmerKind::Identity);
//! assert_eq!(config.analyzer.min_word_length, 3);
//! assert_eq!(config.scoring.unseen_feature_count, 0.1);
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::length::DEFAULT_MIN_WORD_LENGTH;
use crate::analysis::token_filter::stem::{IdentityStemmer, PorterStemmer, Stemmer};
use crate::error::{FalcataError, Result};

/// Top-level classifier configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Text analysis settings.
    pub analyzer: AnalyzerConfig,
    /// Scoring settings.
    pub scoring: ScoringConfig,
}

impl ClassifierConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ClassifierConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()
    }
}

/// Which stemming algorithm the default analyzer uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemmerKind {
    /// Porter's algorithm.
    #[default]
    Porter,
    /// Leave words unchanged.
    Identity,
}

impl StemmerKind {
    /// Instantiate the stemmer.
    pub fn build(self) -> Arc<dyn Stemmer> {
        match self {
            StemmerKind::Porter => Arc::new(PorterStemmer::new()),
            StemmerKind::Identity => Arc::new(IdentityStemmer::new()),
        }
    }
}

/// Settings for turning text into features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Stemming algorithm applied to lowercased words.
    pub stemmer: StemmerKind,
    /// Words shorter than this (after stemming, in characters) are dropped.
    pub min_word_length: usize,
    /// Whether punctuation runs are counted as features.
    pub include_symbols: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            stemmer: StemmerKind::Porter,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            include_symbols: true,
        }
    }
}

/// Smoothing constants used when scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Count assumed for a query feature the category has never seen.
    pub unseen_feature_count: f64,
    /// Document count assumed for a category with no training documents.
    pub empty_category_documents: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            unseen_feature_count: 0.1,
            empty_category_documents: 0.1,
        }
    }
}

impl ScoringConfig {
    /// Both constants must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("unseen_feature_count", self.unseen_feature_count),
            ("empty_category_documents", self.empty_category_documents),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FalcataError::invalid_argument(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_config_default() {
        let config = ClassifierConfig::default();
        assert_eq!(config.analyzer.stemmer, StemmerKind::Porter);
        assert_eq!(config.analyzer.min_word_length, 3);
        assert!(config.analyzer.include_symbols);
        assert_eq!(config.scoring.unseen_feature_count, 0.1);
        assert_eq!(config.scoring.empty_category_documents, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            ClassifierConfig::from_json_str(r#"{ "scoring": { "unseen_feature_count": 0.5 } }"#)
                .unwrap();
        assert_eq!(config.scoring.unseen_feature_count, 0.5);
        assert_eq!(config.scoring.empty_category_documents, 0.1);
        assert_eq!(config.analyzer, AnalyzerConfig::default());
    }

    #[test]
    fn test_rejects_non_positive_smoothing() {
        let result =
            ClassifierConfig::from_json_str(r#"{ "scoring": { "empty_category_documents": 0.0 } }"#);
        assert!(matches!(result, Err(FalcataError::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = ClassifierConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(FalcataError::Json(_))));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "analyzer": { "include_symbols": false } }"#).unwrap();

        let config = ClassifierConfig::from_json_file(&path).unwrap();
        assert!(!config.analyzer.include_symbols);
    }

    #[test]
    fn test_stemmer_kind_build() {
        assert_eq!(StemmerKind::Porter.build().name(), "porter");
        assert_eq!(StemmerKind::Identity.build().name(), "identity");
    }
}
