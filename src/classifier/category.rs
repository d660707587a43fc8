//! Per-category statistics.

use ahash::AHashMap;

use crate::error::{FalcataError, Result};

/// Normalize a category name: surrounding whitespace is trimmed and the rest
/// is lowercased. Empty names are rejected.
pub fn normalize_category(name: &str) -> Result<String> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(FalcataError::invalid_argument(
            "category name must not be empty",
        ));
    }
    Ok(normalized)
}

/// Frequency table and counters for one category.
///
/// The word mass always equals the sum of the feature table's counts, and no
/// feature is ever stored with a zero count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStats {
    pub(crate) name: String,
    pub(crate) features: AHashMap<String, u64>,
    pub(crate) documents: u64,
    pub(crate) word_mass: u64,
}

impl CategoryStats {
    pub(crate) fn empty(name: String) -> Self {
        CategoryStats {
            name,
            features: AHashMap::new(),
            documents: 0,
            word_mass: 0,
        }
    }

    /// Rebuild a category from persisted parts, checking its invariants.
    pub(crate) fn from_parts(
        name: String,
        features: AHashMap<String, u64>,
        documents: u64,
        word_mass: u64,
    ) -> Result<Self> {
        let stats = CategoryStats {
            name,
            features,
            documents,
            word_mass,
        };
        stats.check_invariants()?;
        Ok(stats)
    }

    /// The normalized category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of training documents currently applied.
    pub fn documents(&self) -> u64 {
        self.documents
    }

    /// Sum of all feature counts.
    pub fn word_mass(&self) -> u64 {
        self.word_mass
    }

    /// Count stored for `feature`, or 0 when absent.
    pub fn feature_count(&self, feature: &str) -> u64 {
        self.features.get(feature).copied().unwrap_or(0)
    }

    /// Number of distinct features.
    pub fn vocabulary_size(&self) -> usize {
        self.features.len()
    }

    /// Iterate over (feature, count) pairs in no particular order.
    pub fn features(&self) -> impl Iterator<Item = (&str, u64)> {
        self.features
            .iter()
            .map(|(feature, &count)| (feature.as_str(), count))
    }

    /// Features sorted by name, for deterministic output.
    pub fn sorted_features(&self) -> Vec<(&str, u64)> {
        let mut features: Vec<(&str, u64)> = self.features().collect();
        features.sort_unstable_by(|a, b| a.0.cmp(b.0));
        features
    }

    pub(crate) fn check_invariants(&self) -> Result<()> {
        match normalize_category(&self.name) {
            Ok(normalized) if normalized == self.name => {}
            _ => {
                return Err(FalcataError::corrupt(format!(
                    "category name {:?} is not normalized",
                    self.name
                )));
            }
        }

        if let Some((feature, _)) = self.features.iter().find(|(_, count)| **count == 0) {
            return Err(FalcataError::corrupt(format!(
                "feature {feature:?} in category {:?} has a zero count",
                self.name
            )));
        }

        let sum = self
            .features
            .values()
            .try_fold(0u64, |acc, &count| acc.checked_add(count));
        if sum != Some(self.word_mass) {
            return Err(FalcataError::corrupt(format!(
                "word mass {} of category {:?} does not match its feature counts",
                self.word_mass, self.name
            )));
        }

        Ok(())
    }
}
