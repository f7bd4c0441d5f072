//! The shared traversal
//!
//! [`blocks`] walks a [`ParsedModel`] once, in report order, and resolves
//! every cross-reference through the [`Resolver`]. Sinks only decide how a
//! block looks.

use crate::anchors::anchor_id;
use crate::model::{
    ComplexType, Field, Message, Operation, ParsedModel, Part, PartRef, Port, PortType, Service,
    SimpleElement, TypeEntry,
};
use crate::resolver::{Domain, LinkState, Resolver};

/// Report sections, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Services and ports
    Services,
    /// Port type operations
    Operations,
    /// Messages and parts
    Messages,
    /// Complex types and elements
    Types,
}

impl Section {
    /// All sections in report order
    pub const ALL: [Section; 4] = [
        Section::Services,
        Section::Operations,
        Section::Messages,
        Section::Types,
    ];

    /// Fixed in-page anchor
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Services => "section-services",
            Section::Operations => "section-operations",
            Section::Messages => "section-messages",
            Section::Types => "section-types",
        }
    }

    /// Heading text
    pub fn title(self) -> &'static str {
        match self {
            Section::Services => "Services",
            Section::Operations => "Operations",
            Section::Messages => "Messages",
            Section::Types => "Data Types",
        }
    }
}

/// A reference together with how it resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'m> {
    /// Referenced name as written (stripped)
    pub name: &'m str,
    /// Resolution outcome
    pub link: LinkState,
}

impl<'m> Reference<'m> {
    fn new(name: &'m str, resolver: &Resolver, domain: Domain) -> Self {
        Self {
            name,
            link: resolver.resolve(name, domain),
        }
    }
}

/// What a message part points at, resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartTarget<'m> {
    /// `element="..."`
    Element(Reference<'m>),
    /// `type="..."`
    Type(Reference<'m>),
    /// Neither attribute
    None,
}

/// One renderable unit of the report
#[derive(Debug, Clone, PartialEq)]
pub enum Block<'m> {
    /// Document start
    Header {
        /// Target namespace, possibly empty
        target_namespace: &'m str,
    },
    /// Section start
    SectionStart {
        /// Which section
        section: Section,
        /// Whether the section has no entries
        empty: bool,
    },
    /// Section end
    SectionEnd(Section),
    /// Service start
    ServiceStart(&'m Service),
    /// Port of the current service
    Port(&'m Port),
    /// Service end
    ServiceEnd,
    /// Port type heading
    PortType(&'m PortType),
    /// Operation of the current port type
    Operation {
        /// The operation
        operation: &'m Operation,
        /// Input message
        input: Reference<'m>,
        /// Output message
        output: Reference<'m>,
        /// SOAP action from the first matching binding, possibly empty
        soap_action: &'m str,
    },
    /// Message start
    MessageStart {
        /// The message
        message: &'m Message,
        /// Its anchor
        anchor: String,
    },
    /// Part of the current message
    Part {
        /// The part
        part: &'m Part,
        /// What it points at
        target: PartTarget<'m>,
    },
    /// Message end
    MessageEnd,
    /// Complex type start
    ComplexTypeStart {
        /// The type
        complex: &'m ComplexType,
        /// Its anchor
        anchor: String,
    },
    /// Field of the current complex type
    Field {
        /// The field
        field: &'m Field,
        /// Field type
        target: Reference<'m>,
    },
    /// Complex type end
    ComplexTypeEnd,
    /// Top-level element with a scalar type
    SimpleElement {
        /// The element
        element: &'m SimpleElement,
        /// Its anchor
        anchor: String,
        /// Data type
        data_type: Reference<'m>,
    },
    /// Document end
    Footer,
}

/// Walk `model` in report order
pub fn blocks<'m>(model: &'m ParsedModel, resolver: &Resolver) -> Vec<Block<'m>> {
    let mut out = vec![Block::Header {
        target_namespace: &model.target_namespace,
    }];

    for section in Section::ALL {
        let empty = match section {
            Section::Services => model.services.is_empty(),
            Section::Operations => model.port_types.is_empty(),
            Section::Messages => model.messages.is_empty(),
            Section::Types => model.types.is_empty(),
        };
        out.push(Block::SectionStart { section, empty });
        match section {
            Section::Services => services(model, &mut out),
            Section::Operations => operations(model, resolver, &mut out),
            Section::Messages => messages(model, resolver, &mut out),
            Section::Types => types(model, resolver, &mut out),
        }
        out.push(Block::SectionEnd(section));
    }

    out.push(Block::Footer);
    out
}

fn services<'m>(model: &'m ParsedModel, out: &mut Vec<Block<'m>>) {
    for service in &model.services {
        out.push(Block::ServiceStart(service));
        out.extend(service.ports.iter().map(Block::Port));
        out.push(Block::ServiceEnd);
    }
}

fn operations<'m>(model: &'m ParsedModel, resolver: &Resolver, out: &mut Vec<Block<'m>>) {
    for port_type in &model.port_types {
        out.push(Block::PortType(port_type));
        for operation in &port_type.operations {
            out.push(Block::Operation {
                operation,
                input: Reference::new(&operation.input, resolver, Domain::Message),
                output: Reference::new(&operation.output, resolver, Domain::Message),
                soap_action: model.soap_action_for(&port_type.name, &operation.name),
            });
        }
    }
}

fn messages<'m>(model: &'m ParsedModel, resolver: &Resolver, out: &mut Vec<Block<'m>>) {
    for message in &model.messages {
        out.push(Block::MessageStart {
            message,
            anchor: anchor_id(Domain::Message.prefix(), &message.name),
        });
        for part in &message.parts {
            let target = match part.reference() {
                PartRef::Element(name) => {
                    PartTarget::Element(Reference::new(name, resolver, Domain::Type))
                }
                PartRef::Type(name) => PartTarget::Type(Reference::new(name, resolver, Domain::Type)),
                PartRef::None => PartTarget::None,
            };
            out.push(Block::Part { part, target });
        }
        out.push(Block::MessageEnd);
    }
}

fn types<'m>(model: &'m ParsedModel, resolver: &Resolver, out: &mut Vec<Block<'m>>) {
    for entry in &model.types {
        let anchor = anchor_id(Domain::Type.prefix(), entry.name());
        match entry {
            TypeEntry::ComplexType(complex) => {
                out.push(Block::ComplexTypeStart { complex, anchor });
                for field in &complex.fields {
                    out.push(Block::Field {
                        field,
                        target: Reference::new(&field.type_ref, resolver, Domain::Type),
                    });
                }
                out.push(Block::ComplexTypeEnd);
            }
            TypeEntry::Element(element) => out.push(Block::SimpleElement {
                element,
                anchor,
                data_type: Reference::new(&element.data_type, resolver, Domain::Type),
            }),
        }
    }
}
