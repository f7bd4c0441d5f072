//! Error types for wsdldoc
//!
//! This module defines all error types used throughout the library.
//! Loading is the only stage that can fail: once a document tree exists,
//! extraction, resolution and rendering are total.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using wsdldoc Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wsdldoc operations
#[derive(Error, Debug)]
pub enum Error {
    /// The WSDL document could not be loaded or parsed
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Model serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to obtain a parsed WSDL document
#[derive(Error, Debug)]
pub enum LoadError {
    /// Remote fetch failed (after all retries for connection failures)
    #[error("failed to fetch '{url}' after {attempts} attempt(s): {message}")]
    Network {
        /// Requested URL
        url: String,
        /// Number of attempts made
        attempts: u32,
        /// Cause reported by the HTTP client
        message: String,
    },

    /// Local file does not exist
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Local file exists but could not be read
    #[error("failed to read '{}': {}", .path.display(), .source)]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Document is not well-formed XML
    #[error("malformed XML: {0}")]
    MalformedXml(#[from] ParseError),

    /// Document exceeds the configured size limit
    #[error("document size {size} bytes exceeds maximum {max} bytes")]
    TooLarge {
        /// Actual size in bytes
        size: usize,
        /// Configured maximum
        max: usize,
    },

    /// A URL was given but remote loading is disabled
    #[error("remote resources are not allowed: {0}")]
    RemoteDisabled(String),
}

/// XML parsing error
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Location in the document ("row:col")
    pub location: Option<String>,
    /// Document source that caused the error
    pub source: Option<String>,
}

impl ParseError {
    /// Create a new parse error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            source: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl From<roxmltree::Error> for ParseError {
    fn from(err: roxmltree::Error) -> Self {
        let pos = err.pos();
        ParseError::new(err.to_string()).with_location(format!("{}:{}", pos.row, pos.col))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref loc) = self.location {
            write!(f, "\n\nLocation: {}", loc)?;
        }

        if let Some(ref src) = self.source {
            write!(f, "\n\nSource:\n{}", src)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}
