//! Error types for the ms-corpus tools.
//!
//! This crate provides:
//! - [`MscError`] - Top-level error enum for all corpus tooling errors
//! - Domain-specific errors ([`FetchError`], [`CorpusError`])
//! - A [`Result`] alias used throughout the workspace
//!
//! Every failure propagates as a typed error; nothing is caught, logged and
//! swallowed. Callers can always tell "the credentials were bad" apart from
//! "a filesystem write failed".

use thiserror::Error;

/// Top-level error type for the ms-corpus tools.
#[derive(Error, Debug)]
pub enum MscError {
    /// Errors from listing or downloading bucket contents
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Errors from the text-to-table corpus transform
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors raised while fetching the corpus from object storage.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Credentials are missing or invalid and none could be derived
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The named bucket does not exist
    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    /// The bucket holds no objects, so no folder can be selected
    #[error("Bucket is empty: {0}")]
    EmptyBucket(String),

    /// Listing the bucket contents failed
    #[error("Listing failed: {0}")]
    Listing(String),

    /// A single object transfer failed; the run aborts here
    #[error("Transfer failed for {key}: {reason}")]
    Transfer { key: String, reason: String },

    /// Writing the metadata manifest failed
    #[error("Manifest write failed: {0}")]
    Manifest(String),

    /// Local filesystem error
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors raised while transforming downloaded statements into a table.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The transform target is not an existing directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// The directory holds an entry that is not a regular text file
    #[error("Unexpected entry (expected a regular .txt file): {0}")]
    UnexpectedEntry(String),

    /// A statement file could not be decoded as text
    #[error("Invalid text file {path}: {reason}")]
    InvalidText { path: String, reason: String },

    /// Local filesystem error
    #[error("I/O error: {0}")]
    Io(String),

    /// Writing the corpus table failed
    #[error("Table write failed: {0}")]
    TableWrite(String),
}

/// Result type alias using MscError.
pub type Result<T> = std::result::Result<T, MscError>;
