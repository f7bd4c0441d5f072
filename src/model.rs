//! The normalized WSDL domain model
//!
//! A [`ParsedModel`] is built once by the [`Extractor`](crate::extract::Extractor)
//! and only read afterwards. Every reference field holds a namespace-stripped
//! local name; it may be empty (absent in the source) or name something that
//! does not exist. Both are valid states. Lists keep document order and
//! duplicates.

use crate::anchors::AnchorCollision;
use serde::Serialize;

/// Everything extracted from one WSDL document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedModel {
    /// `targetNamespace` of the definitions element, or empty
    pub target_namespace: String,
    /// `wsdl:service` elements
    pub services: Vec<Service>,
    /// `wsdl:binding` elements
    pub bindings: Vec<Binding>,
    /// `wsdl:portType` elements
    pub port_types: Vec<PortType>,
    /// `wsdl:message` elements
    pub messages: Vec<Message>,
    /// Named complex types and top-level schema elements
    pub types: Vec<TypeEntry>,
    /// Distinct names whose anchors coincide
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub anchor_collisions: Vec<AnchorCollision>,
}

impl ParsedModel {
    /// SOAP action for an operation of a port type.
    ///
    /// The first binding whose `type` names the port type and which declares
    /// an operation of the same name decides; an empty string means no action
    /// (no such binding, or the binding operation carries none).
    pub fn soap_action_for(&self, port_type: &str, operation: &str) -> &str {
        self.bindings
            .iter()
            .filter(|b| b.port_type == port_type)
            .find_map(|b| b.operations.iter().find(|op| op.name == operation))
            .map(|op| op.soap_action.as_str())
            .unwrap_or_default()
    }

    /// Bindings implementing the given port type, in document order
    pub fn bindings_for<'a>(&'a self, port_type: &'a str) -> impl Iterator<Item = &'a Binding> + 'a {
        self.bindings.iter().filter(move |b| b.port_type == port_type)
    }

    /// First type entry with the given name
    pub fn type_entry(&self, name: &str) -> Option<&TypeEntry> {
        self.types.iter().find(|t| t.name() == name)
    }

    /// Distinct names whose anchors coincide, detected during extraction
    pub fn anchor_collisions(&self) -> &[AnchorCollision] {
        &self.anchor_collisions
    }
}

/// A `wsdl:service`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Service {
    /// Service name
    pub name: String,
    /// Ports in document order
    pub ports: Vec<Port>,
}

/// A `wsdl:port` inside a service
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Port {
    /// Port name
    pub name: String,
    /// Referenced binding (stripped)
    pub binding: String,
    /// Endpoint address, SOAP 1.2 taking precedence over SOAP 1.1
    pub address: String,
}

/// A `wsdl:binding`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    /// Binding name
    pub name: String,
    /// Implemented port type (stripped `type` attribute); may not exist
    #[serde(rename = "type")]
    pub port_type: String,
    /// SOAP binding style, empty without a SOAP binding element
    pub style: String,
    /// SOAP transport URI, empty without a SOAP binding element
    pub transport: String,
    /// Operations in document order
    pub operations: Vec<BindingOperation>,
}

/// A `wsdl:operation` inside a binding
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingOperation {
    /// Operation name
    pub name: String,
    /// `soapAction` attribute, empty if absent
    pub soap_action: String,
}

/// A `wsdl:portType`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortType {
    /// Port type name
    pub name: String,
    /// Operations in document order
    pub operations: Vec<Operation>,
}

/// An abstract operation of a port type
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Operation {
    /// Operation name
    pub name: String,
    /// Trimmed `wsdl:documentation` text
    pub documentation: String,
    /// Input message (stripped), empty if absent
    pub input: String,
    /// Output message (stripped), empty if absent
    pub output: String,
}

/// A `wsdl:message`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message {
    /// Message name
    pub name: String,
    /// Parts in document order
    pub parts: Vec<Part>,
}

/// A `wsdl:part`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Part {
    /// Part name
    pub name: String,
    /// Referenced schema element (stripped)
    pub element: String,
    /// Referenced schema type (stripped)
    #[serde(rename = "type")]
    pub type_ref: String,
}

/// What a part points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartRef<'a> {
    /// `element="..."`
    Element(&'a str),
    /// `type="..."`
    Type(&'a str),
    /// Neither attribute present
    None,
}

impl Part {
    /// The part's reference; `element` wins when both are set
    pub fn reference(&self) -> PartRef<'_> {
        if !self.element.is_empty() {
            PartRef::Element(&self.element)
        } else if !self.type_ref.is_empty() {
            PartRef::Type(&self.type_ref)
        } else {
            PartRef::None
        }
    }
}

/// An entry of the type set: complex types and simple elements share one
/// namespace of names
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeEntry {
    /// Named complex type, or top-level element with an anonymous one
    ComplexType(ComplexType),
    /// Top-level element without a nested complex type
    Element(SimpleElement),
}

impl TypeEntry {
    /// Entry name
    pub fn name(&self) -> &str {
        match self {
            TypeEntry::ComplexType(ct) => &ct.name,
            TypeEntry::Element(el) => &el.name,
        }
    }

    /// Entry documentation, possibly empty
    pub fn documentation(&self) -> &str {
        match self {
            TypeEntry::ComplexType(ct) => &ct.documentation,
            TypeEntry::Element(el) => &el.documentation,
        }
    }
}

/// A complex type with its flattened field list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComplexType {
    /// Type name (the element name for promoted anonymous types)
    pub name: String,
    /// Annotation documentation
    pub documentation: String,
    /// Fields in document order
    pub fields: Vec<Field>,
}

/// A local `xsd:element` inside a complex type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name
    pub name: String,
    /// Field type (stripped), possibly empty
    #[serde(rename = "type")]
    pub type_ref: String,
    /// `minOccurs`, default "1"
    pub min_occurs: String,
    /// `maxOccurs`, default "1", may be "unbounded"
    pub max_occurs: String,
    /// `nillable`, default "false"
    pub nillable: String,
    /// Annotation documentation
    pub documentation: String,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            name: String::new(),
            type_ref: String::new(),
            min_occurs: "1".to_string(),
            max_occurs: "1".to_string(),
            nillable: "false".to_string(),
            documentation: String::new(),
        }
    }
}

impl Field {
    /// Whether `nillable` is literally "true"
    pub fn is_nillable(&self) -> bool {
        self.nillable == "true"
    }

    /// Occurrence range as `min..max`
    pub fn occurs(&self) -> String {
        format!("{}..{}", self.min_occurs, self.max_occurs)
    }
}

/// A top-level element with a scalar type
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleElement {
    /// Element name
    pub name: String,
    /// Annotation documentation
    pub documentation: String,
    /// Data type (stripped), possibly empty
    pub data_type: String,
}
