//! Naive Bayes text classifier.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::analysis::analyzer::{Analyzer, BayesAnalyzer};
use crate::analysis::features::FeatureCounts;
use crate::classifier::category::CategoryStats;
use crate::classifier::model::BayesModel;
use crate::classifier::scoring::{self, Classification};
use crate::config::ClassifierConfig;
use crate::error::{FalcataError, Result};
use crate::persistence::{self, SnapshotFormat};

/// Multinomial naive Bayes classifier over a fixed, ordered category set.
///
/// Training text is turned into features by an [`Analyzer`] (by default a
/// [`BayesAnalyzer`] built from the configuration) and merged into a
/// [`BayesModel`]. Every mutating call validates its category and analyzes
/// its text before touching the model, so a failed call changes nothing.
#[derive(Clone)]
pub struct NaiveBayesClassifier {
    model: BayesModel,
    analyzer: Arc<dyn Analyzer>,
    config: ClassifierConfig,
}

impl NaiveBayesClassifier {
    /// Create a classifier with the default configuration.
    ///
    /// Category names are trimmed and lowercased, here and in every later call
    /// that takes one, so `" Spam"` and `"spam"` name the same category.
    /// Names that normalize to the same string collapse onto the first, and a
    /// name that is empty after trimming is `InvalidArgument`.
    pub fn new<I, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(categories, ClassifierConfig::default())
    }

    /// Create a classifier whose analyzer is built from `config`.
    pub fn with_config<I, S>(categories: I, config: ClassifierConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let model = BayesModel::new(categories)?;
        Self::from_model(model, config)
    }

    /// Create a classifier with a custom analyzer.
    ///
    /// The analyzer section of `config` is ignored; its scoring section still
    /// applies.
    pub fn with_analyzer<I, S>(
        categories: I,
        analyzer: Arc<dyn Analyzer>,
        config: ClassifierConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let model = BayesModel::new(categories)?;
        Self::from_parts(model, analyzer, config)
    }

    /// Wrap an existing model, building the analyzer from `config`.
    pub fn from_model(model: BayesModel, config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = Arc::new(BayesAnalyzer::from_config(&config.analyzer)?);
        Self::from_parts(model, analyzer, config)
    }

    fn from_parts(
        model: BayesModel,
        analyzer: Arc<dyn Analyzer>,
        config: ClassifierConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(NaiveBayesClassifier {
            model,
            analyzer,
            config,
        })
    }

    /// Append a new, untrained category.
    pub fn add_category(&mut self, name: &str) -> Result<()> {
        self.model.add_category(name)?;
        debug!(category = %name, "added category");
        Ok(())
    }

    /// Train one document of `category`.
    pub fn train(&mut self, category: &str, text: &str) -> Result<()> {
        let position = self.model.resolve(category)?;
        let features = self.analyzer.features(text)?;
        self.model.apply(position, &features);
        debug!(
            category = %category,
            features = features.len(),
            tokens = features.total(),
            "trained document"
        );
        Ok(())
    }

    /// Remove one previously trained document from `category`.
    ///
    /// Untraining text that was never trained is allowed: counts that would
    /// drop below zero are clamped.
    pub fn untrain(&mut self, category: &str, text: &str) -> Result<()> {
        let position = self.model.resolve(category)?;
        let features = self.analyzer.features(text)?;
        self.model.revert(position, &features);
        debug!(
            category = %category,
            features = features.len(),
            "untrained document"
        );
        Ok(())
    }

    /// Train one document read to the end from `reader`.
    pub fn train_reader<R: Read>(&mut self, category: &str, reader: R) -> Result<()> {
        self.model.resolve(category)?;
        let text = read_text(reader)?;
        self.train(category, &text)
    }

    /// Untrain one document read to the end from `reader`.
    pub fn untrain_reader<R: Read>(&mut self, category: &str, reader: R) -> Result<()> {
        self.model.resolve(category)?;
        let text = read_text(reader)?;
        self.untrain(category, &text)
    }

    /// Train the contents of a file as one document.
    pub fn train_file<P: AsRef<Path>>(&mut self, category: &str, path: P) -> Result<()> {
        self.model.resolve(category)?;
        let file = File::open(path.as_ref())?;
        self.train_reader(category, file)
    }

    /// Untrain the contents of a file as one document.
    pub fn untrain_file<P: AsRef<Path>>(&mut self, category: &str, path: P) -> Result<()> {
        self.model.resolve(category)?;
        let file = File::open(path.as_ref())?;
        self.untrain_reader(category, file)
    }

    /// Train many `(category, text)` documents at once.
    ///
    /// Every category is resolved and every text analyzed first; an unknown
    /// category fails the whole batch without training anything. Returns the
    /// number of documents trained.
    pub fn train_batch<I, C, T>(&mut self, documents: I) -> Result<usize>
    where
        I: IntoIterator<Item = (C, T)>,
        C: AsRef<str>,
        T: AsRef<str>,
    {
        let prepared = documents
            .into_iter()
            .map(|(category, text)| {
                let position = self.model.resolve(category.as_ref())?;
                let features = self.analyzer.features(text.as_ref())?;
                Ok((position, features))
            })
            .collect::<Result<Vec<(usize, FeatureCounts)>>>()?;

        for (position, features) in &prepared {
            self.model.apply(*position, features);
        }
        debug!(documents = prepared.len(), "trained batch");
        Ok(prepared.len())
    }

    /// Score every category against `text`.
    pub fn classify(&self, text: &str) -> Result<Classification> {
        let features = self.analyzer.features(text)?;
        let classification = scoring::score(&self.model, &features, &self.config.scoring);
        debug!(
            features = features.len(),
            best = ?classification.best(),
            "classified text"
        );
        Ok(classification)
    }

    /// Name of the most likely category for `text`.
    pub fn classify_label(&self, text: &str) -> Result<String> {
        let classification = self.classify(text)?;
        classification
            .label()
            .map(str::to_string)
            .ok_or_else(|| FalcataError::invalid_argument("classifier has no categories"))
    }

    /// Category names in declaration order.
    pub fn categories(&self) -> Vec<&str> {
        self.model.category_names()
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.model.has_category(name)
    }

    /// Number of documents trained into `category`.
    pub fn document_count(&self, category: &str) -> Result<u64> {
        Ok(self.stats(category)?.documents())
    }

    /// Sum of feature counts of `category`.
    pub fn word_mass(&self, category: &str) -> Result<u64> {
        Ok(self.stats(category)?.word_mass())
    }

    pub fn total_word_mass(&self) -> u64 {
        self.model.total_word_mass()
    }

    /// Count of `feature` in `category`, 0 when absent.
    pub fn feature_count(&self, category: &str, feature: &str) -> Result<u64> {
        Ok(self.stats(category)?.feature_count(feature))
    }

    /// Number of distinct features of `category`.
    pub fn vocabulary_size(&self, category: &str) -> Result<usize> {
        Ok(self.stats(category)?.vocabulary_size())
    }

    fn stats(&self, category: &str) -> Result<&CategoryStats> {
        let position = self.model.resolve(category)?;
        Ok(&self.model.categories()[position])
    }

    pub fn model(&self) -> &BayesModel {
        &self.model
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Write a snapshot of the model.
    pub fn save<W: Write>(&self, writer: W, format: SnapshotFormat) -> Result<()> {
        persistence::write_model(&self.model, writer, format)
    }

    /// Encode a snapshot of the model into memory.
    pub fn to_bytes(&self, format: SnapshotFormat) -> Result<Vec<u8>> {
        persistence::to_bytes(&self.model, format)
    }

    /// Atomically write a snapshot of the model to `path`.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P, format: SnapshotFormat) -> Result<()> {
        persistence::save_model_to_path(&self.model, path.as_ref(), format)?;
        info!(
            path = %path.as_ref().display(),
            categories = self.model.len(),
            "saved classifier"
        );
        Ok(())
    }

    /// Read a snapshot in either format, using the default configuration.
    pub fn load<R: Read>(reader: R) -> Result<Self> {
        Self::load_with_config(reader, ClassifierConfig::default())
    }

    /// Read a snapshot in either format with a custom configuration.
    pub fn load_with_config<R: Read>(reader: R, config: ClassifierConfig) -> Result<Self> {
        let model = persistence::read_model(reader)?;
        Self::from_model(model, config)
    }

    /// Decode a snapshot held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let model = persistence::from_bytes(bytes)?;
        Self::from_model(model, ClassifierConfig::default())
    }

    /// Load a snapshot file written by [`save_to_path`](Self::save_to_path).
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let model = persistence::load_model_from_path(path.as_ref())?;
        info!(
            path = %path.as_ref().display(),
            categories = model.len(),
            "loaded classifier"
        );
        Self::from_model(model, ClassifierConfig::default())
    }
}

fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

impl std::fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("categories", &self.model.category_names())
            .field("total_word_mass", &self.model.total_word_mass())
            .field("analyzer", &self.analyzer.name())
            .field("config", &self.config)
            .finish()
    }
}
