//! Loaded WSDL documents
//!
//! [`WsdlSource`] owns the raw text handed over by the [`Loader`](crate::loaders::Loader);
//! the parsed `roxmltree` tree borrows from it, so the source must outlive
//! every extraction pass.

use crate::error::{LoadError, ParseError};
use crate::limits::Limits;
use crate::locations::Location;
use roxmltree::Document;

/// Raw text of a WSDL document together with where it came from
#[derive(Debug, Clone)]
pub struct WsdlSource {
    /// Where the text was loaded from
    pub location: Location,
    /// Document text
    pub text: String,
}

impl WsdlSource {
    /// Create a new source
    pub fn new(location: Location, text: impl Into<String>) -> Self {
        Self {
            location,
            text: text.into(),
        }
    }

    /// Wrap an in-memory document
    pub fn from_string(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            location: Location::String(text.clone()),
            text,
        }
    }

    /// Parse the text into a namespace-aware tree
    pub fn parse(&self, limits: &Limits) -> Result<Document<'_>, LoadError> {
        Document::parse_with_options(&self.text, limits.parsing_options()).map_err(|e| {
            let row = e.pos().row;
            let mut err = ParseError::from(e);
            if let Some(line) = line_at(&self.text, row) {
                err = err.with_source(line);
            }
            LoadError::MalformedXml(err)
        })
    }
}

/// 1-based `row` of `text`, trimmed
fn line_at(text: &str, row: u32) -> Option<&str> {
    let index = usize::try_from(row).ok()?.checked_sub(1)?;
    text.lines()
        .nth(index)
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// The document's declared `targetNamespace`, or an empty string
pub fn target_namespace(doc: &Document<'_>) -> String {
    doc.root_element()
        .attribute("targetNamespace")
        .unwrap_or_default()
        .to_string()
}
