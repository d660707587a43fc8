//! In-memory naive Bayes model state.
//!
//! The model knows nothing about text: it merges and removes already-counted
//! [`FeatureCounts`] and exposes the counters scoring reads. Every mutating
//! method resolves its category before touching any state, so a failed call
//! leaves the model unchanged.

use ahash::AHashMap;
use tracing::warn;

use crate::analysis::features::FeatureCounts;
use crate::classifier::category::{CategoryStats, normalize_category};
use crate::error::{FalcataError, Result};

/// Ordered set of categories with their frequency tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BayesModel {
    categories: Vec<CategoryStats>,
    index: AHashMap<String, usize>,
    total_word_mass: u64,
}

impl BayesModel {
    /// Create a model with one empty category per distinct name.
    ///
    /// Names are case-folded; a repeated name collapses onto its first
    /// occurrence. Fails with `InvalidArgument` when no names are given or any
    /// name is empty.
    pub fn new<I, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut model = BayesModel {
            categories: Vec::new(),
            index: AHashMap::new(),
            total_word_mass: 0,
        };

        for name in categories {
            let name = normalize_category(name.as_ref())?;
            if !model.index.contains_key(&name) {
                model.push_category(name);
            }
        }

        if model.categories.is_empty() {
            return Err(FalcataError::invalid_argument(
                "at least one category is required",
            ));
        }

        Ok(model)
    }

    /// Rebuild a model from decoded parts. Any broken invariant is reported
    /// as `Corrupt`.
    pub(crate) fn from_parts(categories: Vec<CategoryStats>, total_word_mass: u64) -> Result<Self> {
        if categories.is_empty() {
            return Err(FalcataError::corrupt("model has no categories"));
        }

        let mut index = AHashMap::with_capacity(categories.len());
        let mut mass_sum = 0u64;
        for (position, stats) in categories.iter().enumerate() {
            stats.check_invariants()?;
            if index.insert(stats.name.clone(), position).is_some() {
                return Err(FalcataError::corrupt(format!(
                    "duplicate category {:?}",
                    stats.name
                )));
            }
            mass_sum = mass_sum
                .checked_add(stats.word_mass)
                .ok_or_else(|| FalcataError::corrupt("total word mass overflows"))?;
        }

        if mass_sum != total_word_mass {
            return Err(FalcataError::corrupt(format!(
                "total word mass {total_word_mass} does not match category sum {mass_sum}"
            )));
        }

        Ok(BayesModel {
            categories,
            index,
            total_word_mass,
        })
    }

    fn push_category(&mut self, name: String) {
        self.index.insert(name.clone(), self.categories.len());
        self.categories.push(CategoryStats::empty(name));
    }

    /// Append a new empty category.
    pub fn add_category(&mut self, name: &str) -> Result<()> {
        let name = normalize_category(name)?;
        if self.index.contains_key(&name) {
            return Err(FalcataError::already_exists(format!(
                "category {name:?}"
            )));
        }
        self.push_category(name);
        Ok(())
    }

    /// Position of a category in declaration order.
    pub fn resolve(&self, name: &str) -> Result<usize> {
        let name = normalize_category(name)?;
        self.index
            .get(&name)
            .copied()
            .ok_or_else(|| FalcataError::not_found(format!("category {name:?}")))
    }

    /// Look up a category by (case-insensitive) name.
    pub fn category(&self, name: &str) -> Option<&CategoryStats> {
        self.resolve(name).ok().map(|position| &self.categories[position])
    }

    /// Check whether a category exists.
    pub fn has_category(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[CategoryStats] {
        &self.categories
    }

    /// Category names in declaration order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|stats| stats.name()).collect()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a constructed model; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Sum of every category's document count.
    pub fn total_documents(&self) -> u64 {
        self.categories.iter().map(|stats| stats.documents).sum()
    }

    /// Sum of every category's word mass.
    pub fn total_word_mass(&self) -> u64 {
        self.total_word_mass
    }

    /// Merge one document's features into a category.
    pub fn train(&mut self, category: &str, features: &FeatureCounts) -> Result<()> {
        let position = self.resolve(category)?;
        self.apply(position, features);
        Ok(())
    }

    /// Remove one document's features from a category.
    pub fn untrain(&mut self, category: &str, features: &FeatureCounts) -> Result<()> {
        let position = self.resolve(category)?;
        self.revert(position, features);
        Ok(())
    }

    pub(crate) fn apply(&mut self, position: usize, features: &FeatureCounts) {
        let stats = &mut self.categories[position];
        stats.documents += 1;

        for (feature, count) in features.iter() {
            if count == 0 {
                continue;
            }
            *stats.features.entry(feature.to_string()).or_insert(0) += count;
            stats.word_mass += count;
            self.total_word_mass += count;
        }
    }

    pub(crate) fn revert(&mut self, position: usize, features: &FeatureCounts) {
        let stats = &mut self.categories[position];

        match stats.documents.checked_sub(1) {
            Some(documents) => stats.documents = documents,
            None => warn!(
                category = %stats.name,
                "untraining a category with no documents; document count stays at zero"
            ),
        }

        for (feature, count) in features.iter() {
            let stored = stats.feature_count(feature);
            if stored == 0 {
                continue;
            }

            let debit = if stored <= count {
                stats.features.remove(feature);
                stored
            } else {
                stats.features.insert(feature.to_string(), stored - count);
                count
            };

            match stats.word_mass.checked_sub(debit) {
                Some(word_mass) => stats.word_mass = word_mass,
                None => warn!(category = %stats.name, debit, "word mass would go negative; left unchanged"),
            }
            match self.total_word_mass.checked_sub(debit) {
                Some(total) => self.total_word_mass = total,
                None => warn!(debit, "total word mass would go negative; left unchanged"),
            }
        }
    }
}
