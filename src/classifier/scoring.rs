//! Log-probability scoring.

use std::collections::HashMap;

use crate::analysis::features::FeatureCounts;
use crate::classifier::model::BayesModel;
use crate::config::ScoringConfig;

/// Per-category scores for one text, in category declaration order.
///
/// Scores are unnormalized joint log-likelihoods: only their order is
/// meaningful, and higher is better.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    scores: Vec<(String, f64)>,
}

impl Classification {
    /// The highest-scoring category. Ties go to the earliest category.
    pub fn best(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (category, score) in &self.scores {
            match best {
                Some((_, top)) if *score <= top => {}
                _ => best = Some((category.as_str(), *score)),
            }
        }
        best
    }

    /// Name of the highest-scoring category.
    pub fn label(&self) -> Option<&str> {
        self.best().map(|(category, _)| category)
    }

    /// Score of a category, looked up case-insensitively.
    pub fn score(&self, category: &str) -> Option<f64> {
        let category = category.trim().to_lowercase();
        self.scores
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, score)| *score)
    }

    /// Iterate over (category, score) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores
            .iter()
            .map(|(category, score)| (category.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Convert into an unordered category → score map.
    pub fn into_map(self) -> HashMap<String, f64> {
        self.scores.into_iter().collect()
    }
}

impl IntoIterator for Classification {
    type Item = (String, f64);
    type IntoIter = std::vec::IntoIter<(String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.into_iter()
    }
}

/// Score every category of `model` against one text's features.
///
/// Each distinct feature contributes `ln(count / word_mass)` once, whatever
/// its count in the query; an unseen feature uses
/// [`ScoringConfig::unseen_feature_count`] and an empty category's word mass
/// is taken as 1. The category prior `ln(documents / total_documents)` is
/// added last, with [`ScoringConfig::empty_category_documents`] standing in
/// for a category that has no documents. A model with no documents at all
/// uses the uniform prior.
pub fn score(model: &BayesModel, features: &FeatureCounts, config: &ScoringConfig) -> Classification {
    // Fixed summation order keeps scores bit-for-bit reproducible.
    let mut query: Vec<&str> = features.iter().map(|(feature, _)| feature).collect();
    query.sort_unstable();

    let total_documents = model.total_documents();
    let uniform_prior = (1.0 / model.len() as f64).ln();

    let scores = model
        .categories()
        .iter()
        .map(|stats| {
            let word_mass = match stats.word_mass() {
                0 => 1.0,
                mass => mass as f64,
            };

            let mut score = 0.0;
            for feature in &query {
                let likelihood = match stats.feature_count(feature) {
                    0 => config.unseen_feature_count,
                    count => count as f64,
                };
                score += (likelihood / word_mass).ln();
            }

            let prior = if total_documents == 0 {
                uniform_prior
            } else {
                let documents = match stats.documents() {
                    0 => config.empty_category_documents,
                    documents => documents as f64,
                };
                (documents / total_documents as f64).ln()
            };

            (stats.name().to_string(), score + prior)
        })
        .collect();

    Classification { scores }
}
