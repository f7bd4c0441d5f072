//! WSDL source location resolution
//!
//! A location is what the user typed on the command line: either an
//! `http`/`https` URL or a path on the local file system.

use std::path::PathBuf;
use url::Url;

/// Resource location - can be a URL, file path, or in-memory document
#[derive(Debug, Clone)]
pub enum Location {
    /// File system path
    Path(PathBuf),
    /// Remote URL (http or https)
    Url(Url),
    /// In-memory document text
    String(String),
}

impl Location {
    /// Classify a user-supplied source string.
    ///
    /// Only `http` and `https` URLs are remote; everything else, including
    /// strings that merely parse as a URL with some other scheme (such as a
    /// Windows drive letter), is treated as a file path.
    pub fn parse(s: &str) -> Self {
        if let Ok(url) = Url::parse(s) {
            if matches!(url.scheme(), "http" | "https") {
                return Location::Url(url);
            }
        }
        Location::Path(PathBuf::from(s))
    }

    /// Get the location as a string
    pub fn as_str(&self) -> String {
        match self {
            Location::Path(p) => p.to_string_lossy().to_string(),
            Location::Url(u) => u.to_string(),
            Location::String(_) => "<string>".to_string(),
        }
    }

    /// Check if this is a remote location (URL)
    pub fn is_remote(&self) -> bool {
        matches!(self, Location::Url(_))
    }

    /// Check if this is a local file
    pub fn is_file(&self) -> bool {
        matches!(self, Location::Path(_))
    }
}
