//! `//wsdl:binding` with its SOAP binding element and operations

use super::{attr, attr_or, merge_soap};
use crate::model::{Binding, BindingOperation};
use crate::names::strip_namespace;
use crate::namespaces::{descendants, Ns};
use roxmltree::Node;

/// Style assumed when a SOAP binding element omits `style`
pub const DEFAULT_STYLE: &str = "document";

pub(super) fn extract(root: Node<'_, '_>) -> Vec<Binding> {
    descendants(root, Ns::Wsdl, "binding").map(binding).collect()
}

fn binding(node: Node<'_, '_>) -> Binding {
    let (style, transport) = merge_soap(node, "binding", |b| {
        (attr_or(b, "style", DEFAULT_STYLE), attr(b, "transport"))
    })
    .unwrap_or_default();

    Binding {
        name: attr(node, "name"),
        port_type: strip_namespace(node.attribute("type")),
        style,
        transport,
        operations: descendants(node, Ns::Wsdl, "operation")
            .map(operation)
            .collect(),
    }
}

fn operation(node: Node<'_, '_>) -> BindingOperation {
    BindingOperation {
        name: attr(node, "name"),
        soap_action: merge_soap(node, "operation", |o| attr(o, "soapAction")).unwrap_or_default(),
    }
}
