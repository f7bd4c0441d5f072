//! Reference resolution
//!
//! Decides whether a symbolic reference names an existing message or type
//! entry. Both renderers consult the same [`Resolver`]; they differ only in
//! what they do with a [`LinkState`].

use crate::anchors::{anchor_id, MESSAGE_PREFIX, TYPE_PREFIX};
use crate::model::ParsedModel;
use std::collections::HashSet;

/// Which name set a reference is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// `wsdl:message` names
    Message,
    /// Complex type and top-level element names
    Type,
}

impl Domain {
    /// Anchor prefix used for this domain
    pub fn prefix(self) -> &'static str {
        match self {
            Domain::Message => MESSAGE_PREFIX,
            Domain::Type => TYPE_PREFIX,
        }
    }
}

/// Result of resolving a reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    /// Target exists; carries its anchor id
    Resolved(String),
    /// No target; carries the text to display instead
    Unresolved(String),
}

impl LinkState {
    /// Whether the reference resolved
    pub fn is_resolved(&self) -> bool {
        matches!(self, LinkState::Resolved(_))
    }
}

/// Name sets built once from a model
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    message_names: HashSet<String>,
    type_names: HashSet<String>,
}

impl Resolver {
    /// Collect message and type names from `model`
    pub fn new(model: &ParsedModel) -> Self {
        let message_names = model.messages.iter().map(|m| m.name.clone()).collect();
        let type_names = model
            .types
            .iter()
            .map(|t| t.name())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            message_names,
            type_names,
        }
    }

    /// Whether `name` exists in `domain`
    pub fn contains(&self, name: &str, domain: Domain) -> bool {
        match domain {
            Domain::Message => self.message_names.contains(name),
            Domain::Type => self.type_names.contains(name),
        }
    }

    /// Resolve `name` within `domain`. Never crosses domains; the empty name
    /// is always `Unresolved("")`.
    pub fn resolve(&self, name: &str, domain: Domain) -> LinkState {
        if !name.is_empty() && self.contains(name, domain) {
            LinkState::Resolved(anchor_id(domain.prefix(), name))
        } else {
            LinkState::Unresolved(name.to_string())
        }
    }
}
