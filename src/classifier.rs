//! Naive Bayes text classification.
//!
//! - [`model::BayesModel`] owns the per-category frequency tables and counters
//! - [`scoring::Classification`] holds per-category log-probability scores
//! - [`naive_bayes::NaiveBayesClassifier`] ties a model to an analyzer and is
//!   the main entry point
//! - [`shared::SharedClassifier`] shares one classifier between threads
//!
//! # Example
//!
//! ```
//! use falcata::classifier::NaiveBayesClassifier;
//!
//! # fn main() -> falcata::error::Result<()> {
//! let mut classifier = NaiveBayesClassifier::new(["fruit", "vehicle"])?;
//! classifier.train("fruit", "apple apple banana")?;
//! classifier.train("vehicle", "car truck road")?;
//!
//! assert_eq!(classifier.classify_label("apple banana")?, "fruit");
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod model;
pub mod naive_bayes;
pub mod scoring;
pub mod shared;

pub use category::CategoryStats;
pub use model::BayesModel;
pub use naive_bayes::NaiveBayesClassifier;
pub use scoring::Classification;
pub use shared::SharedClassifier;
