//! `//wsdl:types/xsd:schema` contents
//!
//! Per schema, every named `complexType` (at any depth) comes first, then the
//! schema's direct named `element` children. An element holding an anonymous
//! `complexType` is promoted to a complex type under the element's own name;
//! any other element becomes a [`SimpleElement`].

use super::{attr_or, schema_documentation, FieldCollection};
use crate::model::{ComplexType, Field, SimpleElement, TypeEntry};
use crate::names::strip_namespace;
use crate::namespaces::{children, descendants, is_element, Ns};
use roxmltree::Node;

/// Model group compositors walked by [`FieldCollection::DirectChildren`]
const COMPOSITORS: [&str; 3] = ["sequence", "all", "choice"];

pub(super) fn extract(root: Node<'_, '_>, collection: FieldCollection) -> Vec<TypeEntry> {
    let mut entries = Vec::new();

    let schemas = descendants(root, Ns::Wsdl, "types").flat_map(|t| children(t, Ns::Xsd, "schema"));
    for schema in schemas {
        for complex in descendants(schema, Ns::Xsd, "complexType") {
            let Some(name) = complex.attribute("name") else {
                continue;
            };
            entries.push(TypeEntry::ComplexType(ComplexType {
                name: name.to_string(),
                documentation: schema_documentation(complex),
                fields: fields(complex, collection),
            }));
        }

        for element in children(schema, Ns::Xsd, "element") {
            if let Some(entry) = top_level_element(element, collection) {
                entries.push(entry);
            }
        }
    }

    entries
}

fn top_level_element(element: Node<'_, '_>, collection: FieldCollection) -> Option<TypeEntry> {
    let name = element.attribute("name").filter(|n| !n.is_empty())?;
    let documentation = schema_documentation(element);

    let entry = match children(element, Ns::Xsd, "complexType").next() {
        Some(inner) => {
            let documentation = if documentation.is_empty() {
                schema_documentation(inner)
            } else {
                documentation
            };
            TypeEntry::ComplexType(ComplexType {
                name: name.to_string(),
                documentation,
                fields: fields(inner, collection),
            })
        }
        None => TypeEntry::Element(SimpleElement {
            name: name.to_string(),
            documentation,
            data_type: strip_namespace(element.attribute("type")),
        }),
    };
    Some(entry)
}

fn fields(complex: Node<'_, '_>, collection: FieldCollection) -> Vec<Field> {
    match collection {
        FieldCollection::Descendants => descendants(complex, Ns::Xsd, "element").map(field).collect(),
        FieldCollection::DirectChildren => {
            let mut out = Vec::new();
            direct_fields(complex, &mut out);
            out
        }
    }
}

fn direct_fields(node: Node<'_, '_>, out: &mut Vec<Field>) {
    for child in node.children().filter(|n| n.is_element()) {
        if is_element(&child, Ns::Xsd, "element") {
            out.push(field(child));
        } else if COMPOSITORS.iter().any(|c| is_element(&child, Ns::Xsd, c)) {
            direct_fields(child, out);
        }
    }
}

fn field(element: Node<'_, '_>) -> Field {
    let reference = element.attribute("ref");
    let (name, type_ref) = match element.attribute("name") {
        Some(name) => (name.to_string(), strip_namespace(element.attribute("type"))),
        None if reference.is_some() => (strip_namespace(reference), strip_namespace(reference)),
        None => (String::new(), strip_namespace(element.attribute("type"))),
    };

    Field {
        name,
        type_ref,
        min_occurs: attr_or(element, "minOccurs", "1"),
        max_occurs: attr_or(element, "maxOccurs", "1"),
        nillable: attr_or(element, "nillable", "false"),
        documentation: schema_documentation(element),
    }
}
