//! Thread-safe classifier handle.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::classifier::naive_bayes::NaiveBayesClassifier;
use crate::classifier::scoring::Classification;
use crate::error::Result;

/// A cloneable handle sharing one classifier between threads.
///
/// Training takes the write lock; classification takes the read lock, so
/// concurrent classifications never block each other.
#[derive(Clone, Debug)]
pub struct SharedClassifier {
    inner: Arc<RwLock<NaiveBayesClassifier>>,
}

impl SharedClassifier {
    pub fn new(classifier: NaiveBayesClassifier) -> Self {
        SharedClassifier {
            inner: Arc::new(RwLock::new(classifier)),
        }
    }

    pub fn add_category(&self, name: &str) -> Result<()> {
        self.inner.write().add_category(name)
    }

    pub fn train(&self, category: &str, text: &str) -> Result<()> {
        self.inner.write().train(category, text)
    }

    pub fn untrain(&self, category: &str, text: &str) -> Result<()> {
        self.inner.write().untrain(category, text)
    }

    pub fn classify(&self, text: &str) -> Result<Classification> {
        self.inner.read().classify(text)
    }

    pub fn classify_label(&self, text: &str) -> Result<String> {
        self.inner.read().classify_label(text)
    }

    /// Borrow the classifier for several reads under one lock.
    pub fn read(&self) -> RwLockReadGuard<'_, NaiveBayesClassifier> {
        self.inner.read()
    }

    /// Borrow the classifier mutably.
    pub fn write(&self) -> RwLockWriteGuard<'_, NaiveBayesClassifier> {
        self.inner.write()
    }
}

impl From<NaiveBayesClassifier> for SharedClassifier {
    fn from(classifier: NaiveBayesClassifier) -> Self {
        Self::new(classifier)
    }
}
