//! Error types for the Falcata library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`FalcataError`] enum. Constructor helpers keep call sites short.
//!
//! # Examples
//!
//! ```
//! use falcata::error::{FalcataError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FalcataError::invalid_argument("category list is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Falcata operations.
#[derive(Error, Debug)]
pub enum FalcataError {
    /// A required input was missing or empty.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A category name did not match any known category.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A category with the same (case-folded) name already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// A persisted model could not be decoded into a well-formed model.
    #[error("Corrupt model: {0}")]
    Corrupt(String),

    /// Analysis-related errors (tokenizer construction, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (reading training text, saving or loading snapshots)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON errors from configuration files
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with FalcataError.
pub type Result<T> = std::result::Result<T, FalcataError>;

impl FalcataError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FalcataError::InvalidArgument(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        FalcataError::NotFound(msg.into())
    }

    /// Create a new already exists error.
    pub fn already_exists<S: Into<String>>(msg: S) -> Self {
        FalcataError::AlreadyExists(msg.into())
    }

    /// Create a new corrupt snapshot error.
    pub fn corrupt<S: Into<String>>(msg: S) -> Self {
        FalcataError::Corrupt(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FalcataError::Analysis(msg.into())
    }
}
