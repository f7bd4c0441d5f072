//! Namespaces recognised by the extractor
//!
//! Element matching is always by expanded name (namespace URI + local name),
//! so documents are free to bind any prefix to these namespaces.

use roxmltree::Node;

/// WSDL 1.1 namespace
pub const WSDL_NAMESPACE: &str = "http://schemas.xmlsoap.org/wsdl/";

/// SOAP 1.1 binding extension namespace
pub const SOAP_NAMESPACE: &str = "http://schemas.xmlsoap.org/wsdl/soap/";

/// SOAP 1.2 binding extension namespace
pub const SOAP12_NAMESPACE: &str = "http://schemas.xmlsoap.org/wsdl/soap12/";

/// XML Schema namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// A namespace the extractor queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ns {
    /// `wsdl:`
    Wsdl,
    /// `soap:`
    Soap,
    /// `soap12:`
    Soap12,
    /// `xsd:`
    Xsd,
}

impl Ns {
    /// The namespace URI
    pub fn uri(self) -> &'static str {
        match self {
            Ns::Wsdl => WSDL_NAMESPACE,
            Ns::Soap => SOAP_NAMESPACE,
            Ns::Soap12 => SOAP12_NAMESPACE,
            Ns::Xsd => XSD_NAMESPACE,
        }
    }
}

/// Whether `node` is the element `{ns}local`
pub fn is_element(node: &Node<'_, '_>, ns: Ns, local: &str) -> bool {
    node.is_element() && node.has_tag_name((ns.uri(), local))
}

/// Direct element children named `{ns}local` (the XPath `./ns:local` axis)
pub fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    ns: Ns,
    local: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |n| is_element(n, ns, local))
}

/// Descendant elements named `{ns}local`, excluding `node` itself (the XPath
/// `.//ns:local` axis), in document order
pub fn descendants<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    ns: Ns,
    local: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(move |n| is_element(n, ns, local))
}

/// First descendant element named `{ns}local`
pub fn first_descendant<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    ns: Ns,
    local: &'static str,
) -> Option<Node<'a, 'input>> {
    descendants(node, ns, local).next()
}
