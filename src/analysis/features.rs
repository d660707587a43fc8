//! Feature counting.
//!
//! A [`FeatureCounts`] is the bag-of-features view of one text: every
//! surviving token text mapped to the number of times it occurred.

use ahash::AHashMap;

use crate::analysis::token::TokenStream;

/// Mapping from feature to its occurrence count within one text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureCounts {
    counts: AHashMap<String, u64>,
}

impl FeatureCounts {
    /// Create an empty feature mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a token stream into counts.
    pub fn from_tokens(tokens: TokenStream) -> Self {
        let mut features = Self::new();
        for token in tokens {
            features.add(token.text, 1);
        }
        features
    }

    /// Add `count` occurrences of `feature`.
    pub fn add<S: Into<String>>(&mut self, feature: S, count: u64) {
        *self.counts.entry(feature.into()).or_insert(0) += count;
    }

    /// Get the count for a feature, or 0 when absent.
    pub fn get(&self, feature: &str) -> u64 {
        self.counts.get(feature).copied().unwrap_or(0)
    }

    /// Check whether a feature is present.
    pub fn contains(&self, feature: &str) -> bool {
        self.counts.contains_key(feature)
    }

    /// Number of distinct features.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if there are no features.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over (feature, count) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(feature, &count)| (feature.as_str(), count))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FeatureCounts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut features = Self::new();
        for (feature, count) in iter {
            features.add(feature, count);
        }
        features
    }
}
