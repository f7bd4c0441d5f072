//! `//wsdl:portType` and its abstract operations

use super::attr;
use crate::model::{Operation, PortType};
use crate::names::strip_namespace;
use crate::namespaces::{descendants, first_descendant, Ns};
use roxmltree::Node;

pub(super) fn extract(root: Node<'_, '_>) -> Vec<PortType> {
    descendants(root, Ns::Wsdl, "portType")
        .map(|pt| PortType {
            name: attr(pt, "name"),
            operations: descendants(pt, Ns::Wsdl, "operation").map(operation).collect(),
        })
        .collect()
}

fn operation(node: Node<'_, '_>) -> Operation {
    let message = |local: &'static str| {
        first_descendant(node, Ns::Wsdl, local)
            .map(|n| strip_namespace(n.attribute("message")))
            .unwrap_or_default()
    };

    Operation {
        name: attr(node, "name"),
        documentation: first_descendant(node, Ns::Wsdl, "documentation")
            .and_then(|d| d.text())
            .map(|t| t.trim().to_string())
            .unwrap_or_default(),
        input: message("input"),
        output: message("output"),
    }
}
