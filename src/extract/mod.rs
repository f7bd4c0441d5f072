//! WSDL entity extraction
//!
//! Five independent passes over a parsed document, each a namespace-aware
//! structural query:
//!
//! - services and their ports
//! - bindings and their operations
//! - port types and their operations
//! - messages and their parts
//! - schema types (named complex types and top-level elements)
//!
//! Extraction never fails on well-formed input. Missing optional attributes
//! fall back to their documented defaults, and an absent section yields an
//! empty list.

mod bindings;
mod messages;
mod port_types;
mod services;
mod types;

use crate::anchors::{AnchorCheck, AnchorCollision, AnchorIndex, MESSAGE_PREFIX, TYPE_PREFIX};
use crate::model::ParsedModel;
use crate::namespaces::{children, first_descendant, Ns};
use roxmltree::{Document, Node};
use tracing::{debug, warn};

/// SOAP extension namespaces in merge order. Each one that has a value
/// overwrites the previous, so SOAP 1.2 wins over SOAP 1.1.
pub const SOAP_PRECEDENCE: [Ns; 2] = [Ns::Soap, Ns::Soap12];

/// How fields of a complex type are gathered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldCollection {
    /// Every descendant `xsd:element`, including those of nested anonymous
    /// types
    #[default]
    Descendants,
    /// Only `xsd:element` nodes reached through `sequence`/`all`/`choice`
    /// compositors directly under the type
    DirectChildren,
}

/// Extraction settings
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Field traversal for complex types
    pub field_collection: FieldCollection,
}

impl ExtractOptions {
    /// Set the field traversal
    pub fn with_field_collection(mut self, field_collection: FieldCollection) -> Self {
        self.field_collection = field_collection;
        self
    }
}

/// Builds a [`ParsedModel`] from a parsed WSDL tree
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Extractor with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor with the given options
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Run all passes over `doc`
    pub fn extract(&self, doc: &Document<'_>, target_namespace: &str) -> ParsedModel {
        let root = doc.root();

        let services = services::extract(root);
        debug!(count = services.len(), "extracted services");
        let bindings = bindings::extract(root);
        debug!(count = bindings.len(), "extracted bindings");
        let port_types = port_types::extract(root);
        debug!(count = port_types.len(), "extracted port types");
        let messages = messages::extract(root);
        debug!(count = messages.len(), "extracted messages");
        let types = types::extract(root, self.options.field_collection);
        debug!(count = types.len(), "extracted type entries");

        let mut model = ParsedModel {
            target_namespace: target_namespace.to_string(),
            services,
            bindings,
            port_types,
            messages,
            types,
            anchor_collisions: Vec::new(),
        };
        model.anchor_collisions = check_anchors(&model);
        model
    }
}

fn check_anchors(model: &ParsedModel) -> Vec<AnchorCollision> {
    let mut messages = AnchorIndex::new(MESSAGE_PREFIX);
    let mut types = AnchorIndex::new(TYPE_PREFIX);

    for message in &model.messages {
        report(messages.insert(&message.name), &message.name);
    }
    for entry in &model.types {
        report(types.insert(entry.name()), entry.name());
    }

    let mut collisions = messages.collisions();
    collisions.extend(types.collisions());
    collisions
}

fn report(check: AnchorCheck, name: &str) {
    match check {
        AnchorCheck::Fresh(_) => {}
        AnchorCheck::Duplicate(anchor) => {
            warn!(%anchor, name, "name defined more than once shares one anchor");
        }
        AnchorCheck::Collision { anchor, existing } => {
            warn!(%anchor, name, existing = %existing, "distinct names share one anchor");
        }
    }
}

/// Attribute value, or empty
fn attr(node: Node<'_, '_>, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}

/// Attribute value, or `default`
fn attr_or(node: Node<'_, '_>, name: &str, default: &str) -> String {
    node.attribute(name).unwrap_or(default).to_string()
}

/// Read `local` from every SOAP extension namespace under `node` and merge
/// last-writer-wins in [`SOAP_PRECEDENCE`] order.
fn merge_soap<'a, 'input, T>(
    node: Node<'a, 'input>,
    local: &'static str,
    read: impl Fn(Node<'a, 'input>) -> T,
) -> Option<T> {
    let mut merged = None;
    for ns in SOAP_PRECEDENCE {
        if let Some(found) = first_descendant(node, ns, local) {
            merged = Some(read(found));
        }
    }
    merged
}

/// Trimmed text of `./xsd:annotation/xsd:documentation`
fn schema_documentation(node: Node<'_, '_>) -> String {
    children(node, Ns::Xsd, "annotation")
        .flat_map(|a| children(a, Ns::Xsd, "documentation"))
        .next()
        .and_then(|d| d.text())
        .map(|t| t.trim().to_string())
        .unwrap_or_default()
}
