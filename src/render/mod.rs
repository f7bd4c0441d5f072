//! Report rendering
//!
//! Text and HTML share one traversal ([`blocks`]) and one resolver; each
//! format is an [`OutputSink`] that turns blocks into output. JSON is a plain
//! serialization of the model and bypasses the traversal.

mod blocks;
mod html;
mod text;

pub use blocks::{blocks, Block, PartTarget, Reference, Section};
pub use html::HtmlSink;
pub use text::TextSink;

use crate::error::Result;
use crate::model::ParsedModel;
use crate::resolver::Resolver;
use std::fmt;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    /// Sectioned plain-text report
    #[default]
    Text,
    /// Self-contained HTML page with cross-links
    Html,
    /// Model dump
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Text => "text",
            Format::Html => "html",
            Format::Json => "json",
        })
    }
}

/// A format-specific writer fed by the shared traversal
pub trait OutputSink {
    /// Consume one block
    fn emit(&mut self, block: &Block<'_>);

    /// Produce the finished document
    fn finish(self) -> String;
}

/// Feed every block of `model` into `sink`
pub fn render_with<S: OutputSink>(model: &ParsedModel, mut sink: S) -> String {
    let resolver = Resolver::new(model);
    for block in blocks(model, &resolver) {
        sink.emit(&block);
    }
    sink.finish()
}

/// Render `model` in `format`
pub fn render(model: &ParsedModel, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => render_with(model, TextSink::new()),
        Format::Html => render_with(model, HtmlSink::new()),
        Format::Json => serde_json::to_string_pretty(model)?,
    })
}
