//! Error types for wikiwalk operations.
//!
//! This module defines the main error type [`WikiError`] which covers
//! everything that can go wrong while fetching an article page. Extraction
//! itself never fails: missing page structure degrades to empty collections
//! (see [`crate::Extraction::content_found`]).
//!
//! # Example
//!
//! ```rust
//! use wikiwalk_core::{PageTarget, FetchConfig, WikiError};
//!
//! let target = PageTarget::search("   ");
//! assert!(matches!(target.resolve(&FetchConfig::default()), Err(WikiError::EmptyQuery)));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching and loading article pages.
#[derive(Error, Debug)]
pub enum WikiError {
    /// HTTP transport errors from reqwest.
    ///
    /// Connection failures, DNS errors, TLS problems and similar. The
    /// underlying message is kept so it can be shown to the user.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with anything other than `200 OK`.
    #[error("Unexpected HTTP status: {status}")]
    HttpStatus { status: u16 },

    /// Invalid URL provided or built from a query.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid CSS selector.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Search query was empty after trimming.
    #[error("Search query is empty")]
    EmptyQuery,

    /// File not found.
    ///
    /// Returned when a saved page is requested from a path that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors while reading saved pages.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Article serialization errors.
    #[error("Failed to serialize article: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for WikiError.
pub type Result<T> = std::result::Result<T, WikiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WikiError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_http_status_error() {
        let err = WikiError::HttpStatus { status: 404 };
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_file_not_found_error() {
        let err = WikiError::FileNotFound(PathBuf::from("/tmp/missing.html"));
        assert!(err.to_string().contains("missing.html"));
    }
}
