//! In-document anchor identifiers
//!
//! `anchor_id(prefix, name)` is the single naming rule shared by the resolver
//! (link targets) and the HTML renderer (element ids). Sanitizing is lossy,
//! so [`AnchorIndex`] records every anchor claimed more than once, whether by
//! distinct names or by the same name repeated.

use indexmap::IndexMap;
use serde::Serialize;

/// Anchor prefix for messages
pub const MESSAGE_PREFIX: &str = "msg";

/// Anchor prefix for type entries
pub const TYPE_PREFIX: &str = "type";

/// Replace `:`, space and `.` with `_`. Nothing else changes.
pub fn sanitize(name: &str) -> String {
    name.replace(|c: char| matches!(c, ':' | ' ' | '.'), "_")
}

/// `prefix + "_" + sanitize(name)`
pub fn anchor_id(prefix: &str, name: &str) -> String {
    format!("{}_{}", prefix, sanitize(name))
}

/// Outcome of registering a name with an [`AnchorIndex`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorCheck {
    /// First name to claim this anchor
    Fresh(String),
    /// The same name was registered before
    Duplicate(String),
    /// A different name already claimed this anchor
    Collision {
        /// The shared anchor
        anchor: String,
        /// Name that claimed it first
        existing: String,
    },
}

/// Why an anchor is claimed more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CollisionKind {
    /// Distinct names sanitize to the same anchor
    Distinct,
    /// One name is defined more than once, e.g. a complexType and an element
    /// sharing a name
    Repeated,
}

/// An anchor that more than one entry would emit as its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorCollision {
    /// Anchor prefix (`msg` or `type`)
    pub prefix: String,
    /// The shared anchor
    pub anchor: String,
    /// Distinct or repeated
    pub kind: CollisionKind,
    /// Distinct names claiming the anchor, in registration order
    pub names: Vec<String>,
    /// Number of entries claiming the anchor
    pub occurrences: usize,
}

#[derive(Debug, Clone, Default)]
struct Claim {
    names: Vec<String>,
    occurrences: usize,
}

/// Name → anchor injectivity check for one prefix
#[derive(Debug, Clone)]
pub struct AnchorIndex {
    prefix: String,
    by_anchor: IndexMap<String, Claim>,
}

impl AnchorIndex {
    /// Create an empty index for `prefix`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            by_anchor: IndexMap::new(),
        }
    }

    /// Register a name and report whether its anchor is still unique
    pub fn insert(&mut self, name: &str) -> AnchorCheck {
        let anchor = anchor_id(&self.prefix, name);
        let claim = self.by_anchor.entry(anchor.clone()).or_default();
        claim.occurrences += 1;

        let check = match claim.names.first() {
            None => AnchorCheck::Fresh(anchor),
            Some(_) if claim.names.iter().any(|n| n == name) => AnchorCheck::Duplicate(anchor),
            Some(first) => AnchorCheck::Collision {
                anchor,
                existing: first.clone(),
            },
        };
        if !matches!(check, AnchorCheck::Duplicate(_)) {
            claim.names.push(name.to_string());
        }
        check
    }

    /// All anchors claimed by more than one entry
    pub fn collisions(&self) -> Vec<AnchorCollision> {
        self.by_anchor
            .iter()
            .filter(|(_, claim)| claim.occurrences > 1)
            .map(|(anchor, claim)| AnchorCollision {
                prefix: self.prefix.clone(),
                anchor: anchor.clone(),
                kind: if claim.names.len() > 1 {
                    CollisionKind::Distinct
                } else {
                    CollisionKind::Repeated
                },
                names: claim.names.clone(),
                occurrences: claim.occurrences,
            })
            .collect()
    }
}
