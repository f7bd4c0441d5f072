//! `//wsdl:service` and `.//wsdl:port`

use super::{attr, merge_soap};
use crate::model::{Port, Service};
use crate::names::strip_namespace;
use crate::namespaces::{descendants, Ns};
use roxmltree::Node;

pub(super) fn extract(root: Node<'_, '_>) -> Vec<Service> {
    descendants(root, Ns::Wsdl, "service")
        .map(|service| Service {
            name: attr(service, "name"),
            ports: descendants(service, Ns::Wsdl, "port").map(port).collect(),
        })
        .collect()
}

fn port(node: Node<'_, '_>) -> Port {
    Port {
        name: attr(node, "name"),
        binding: strip_namespace(node.attribute("binding")),
        address: merge_soap(node, "address", |a| attr(a, "location")).unwrap_or_default(),
    }
}
