//! # wsdldoc
//!
//! Turns a SOAP service description (WSDL 1.1 with embedded XML Schema) into a
//! normalized domain model and renders it as a plain-text or hyperlinked HTML
//! report.
//!
//! ## Pipeline
//!
//! - [`loaders::Loader`] reads a file or fetches a URL (bounded retry)
//! - [`documents::WsdlSource::parse`] builds the namespace-aware XML tree
//! - [`extract::Extractor`] produces an immutable [`model::ParsedModel`]
//! - [`resolver::Resolver`] decides which references have a target
//! - [`render`] walks the model once and feeds a text or HTML sink
//!
//! ## Example
//!
//! ```rust,ignore
//! use wsdldoc::{load_model, render, Format, Location};
//!
//! let model = load_model(&Location::parse("service.wsdl"))?;
//! let html = render::render(&model, Format::Html)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod limits;

// Names and namespaces
pub mod names;
pub mod namespaces;

// Resource loading
pub mod documents;
pub mod loaders;
pub mod locations;

// Model and extraction
pub mod extract;
pub mod model;

// Cross-references
pub mod anchors;
pub mod resolver;

// Output
pub mod render;

// Re-exports for convenience
pub use error::{Error, LoadError, ParseError, Result};
pub use extract::{ExtractOptions, Extractor, FieldCollection};
pub use locations::Location;
pub use model::ParsedModel;
pub use render::Format;

use documents::{target_namespace, WsdlSource};
use limits::Limits;
use loaders::Loader;

/// Version of the wsdldoc library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse WSDL text held in memory with default limits and options
pub fn parse_str(xml: &str) -> Result<ParsedModel> {
    parse_source(
        &WsdlSource::from_string(xml),
        &Limits::default(),
        &ExtractOptions::default(),
    )
}

/// Parse an already loaded source
pub fn parse_source(
    source: &WsdlSource,
    limits: &Limits,
    options: &ExtractOptions,
) -> Result<ParsedModel> {
    let doc = source.parse(limits)?;
    let namespace = target_namespace(&doc);
    Ok(Extractor::with_options(options.clone()).extract(&doc, &namespace))
}

/// Load and parse a WSDL from a path or URL with default settings
pub fn load_model(location: &Location) -> Result<ParsedModel> {
    let loader = Loader::new();
    let source = loader.load(location)?;
    parse_source(&source, loader.limits(), &ExtractOptions::default())
}
