//! Limits applied while loading WSDL documents
//!
//! A WSDL is untrusted input as soon as it comes from a URL, so both the raw
//! byte size and the number of parsed nodes are capped.

use crate::error::LoadError;
use roxmltree::ParsingOptions;

/// Loading limits configuration
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum document size in bytes
    pub max_document_size: usize,

    /// Maximum number of XML nodes the parser may allocate
    pub max_nodes: u32,

    /// Whether a DTD is accepted in the document prolog
    pub allow_dtd: bool,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_document_size: 100 * 1024 * 1024, // 100 MB
            max_nodes: 10_000_000,
            allow_dtd: false,
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_document_size: 10 * 1024 * 1024, // 10 MB
            max_nodes: 1_000_000,
            allow_dtd: false,
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_document_size: 1024 * 1024 * 1024, // 1 GB
            max_nodes: u32::MAX,
            allow_dtd: true,
        }
    }

    /// Check if the document size is within limits
    pub fn check_document_size(&self, size: usize) -> Result<(), LoadError> {
        if size > self.max_document_size {
            Err(LoadError::TooLarge {
                size,
                max: self.max_document_size,
            })
        } else {
            Ok(())
        }
    }

    /// Parser options derived from these limits
    pub fn parsing_options(&self) -> ParsingOptions {
        let mut options = ParsingOptions::default();
        options.allow_dtd = self.allow_dtd;
        options.nodes_limit = self.max_nodes;
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert!(limits.check_document_size(1024).is_ok());
        assert!(limits.check_document_size(200 * 1024 * 1024).is_err());
    }

    #[test]
    fn test_strict_limits() {
        let limits = Limits::strict();
        assert!(limits.max_document_size < Limits::default().max_document_size);
        assert!(limits.check_document_size(11 * 1024 * 1024).is_err());
    }

    #[test]
    fn test_permissive_limits() {
        let limits = Limits::permissive();
        assert!(limits.max_nodes > Limits::default().max_nodes);
        assert!(limits.parsing_options().allow_dtd);
    }

    #[test]
    fn test_too_large_reports_sizes() {
        let err = Limits::strict().check_document_size(usize::MAX).unwrap_err();
        assert!(matches!(err, LoadError::TooLarge { max, .. } if max == 10 * 1024 * 1024));
    }
}
