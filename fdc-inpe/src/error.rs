//! Error types for the INPE feed library
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for feed loading and parsing
#[derive(Error, Debug)]
pub enum FeedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Upstream answered with a non-success status
    #[error("Unexpected HTTP status {status} for {url}")]
    BadStatus { status: u16, url: String },

    /// Local feed file could not be read
    #[error("Failed to read local feed {}: {source}", .path.display())]
    LocalFeed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// The header row lacks a column the loader relies on
    #[error("Feed is missing required column: {0}")]
    MissingColumn(String),
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        FeedError::HttpRequest(Box::new(e))
    }
}

/// Type alias for Results using FeedError
pub type Result<T> = std::result::Result<T, FeedError>;
