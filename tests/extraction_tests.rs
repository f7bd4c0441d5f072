//! Extraction tests against a complete WSDL fixture

mod common;

use pretty_assertions::assert_eq;
use wsdldoc::model::{Port, TypeEntry};
use wsdldoc::namespaces::{Ns, WSDL_NAMESPACE};
use wsdldoc::{parse_str, ExtractOptions, Extractor, FieldCollection};

fn count(xml: &str, ns: Ns, local: &str) -> usize {
    let doc = roxmltree::Document::parse(xml).unwrap();
    doc.descendants()
        .filter(|n| n.is_element() && n.has_tag_name((ns.uri(), local)))
        .count()
}

#[test]
fn test_extraction_completeness() {
    let xml = common::fixture("user_service.wsdl");
    let model = parse_str(&xml).unwrap();

    assert_eq!(model.services.len(), count(&xml, Ns::Wsdl, "service"));
    assert_eq!(model.bindings.len(), count(&xml, Ns::Wsdl, "binding"));
    assert_eq!(model.port_types.len(), count(&xml, Ns::Wsdl, "portType"));
    assert_eq!(model.messages.len(), count(&xml, Ns::Wsdl, "message"));
    assert_eq!(model.types.len(), 4);
}

#[test]
fn test_target_namespace_and_services() {
    let model = parse_str(&common::fixture("user_service.wsdl")).unwrap();

    assert_eq!(model.target_namespace, "http://example.com/users");
    assert_eq!(
        model.services[0].ports,
        vec![Port {
            name: "UserSoapPort".into(),
            binding: "UserSoapBinding".into(),
            address: "http://example.com/soap12/users".into(),
        }]
    );
}

#[test]
fn test_operation_without_soap_operation() {
    let model = parse_str(&common::fixture("user_service.wsdl")).unwrap();

    let binding = &model.bindings[0];
    assert_eq!(binding.operations[1].name, "PlaceOrder");
    assert_eq!(binding.operations[1].soap_action, "");
    assert_eq!(model.soap_action_for("UserPortType", "PlaceOrder"), "");
    assert_eq!(
        model.soap_action_for("UserPortType", "GetUser"),
        "http://example.com/users/GetUser"
    );
}

#[test]
fn test_orphaned_binding_is_kept() {
    let model = parse_str(&common::fixture("user_service.wsdl")).unwrap();

    let audit = model.bindings.iter().find(|b| b.name == "AuditBinding").unwrap();
    assert_eq!(audit.port_type, "AuditPortType");
    assert!(model.port_types.iter().all(|pt| pt.name != audit.port_type));
    assert_eq!(audit.operations[0].soap_action, "http://example.com/audit");
    assert_eq!(audit.style, "document");
}

#[test]
fn test_promoted_element_fields() {
    let model = parse_str(&common::fixture("user_service.wsdl")).unwrap();

    let Some(TypeEntry::ComplexType(order)) = model.type_entry("Order") else {
        panic!("Order should be promoted to a complex type");
    };
    let fields: Vec<_> = order
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.min_occurs.as_str(), f.max_occurs.as_str()))
        .collect();
    assert_eq!(fields, vec![("id", "1", "1"), ("qty", "1", "1")]);
}

#[test]
fn test_field_attributes() {
    let model = parse_str(&common::fixture("user_service.wsdl")).unwrap();

    let Some(TypeEntry::ComplexType(request)) = model.type_entry("UserRequestType") else {
        panic!("UserRequestType should be a complex type");
    };
    assert_eq!(request.documentation, "Lookup criteria for a user.");
    assert_eq!(request.fields[0].documentation, "Primary key");
    assert_eq!(request.fields[1].type_ref, "Address");
    assert_eq!(request.fields[1].occurs(), "0..1");
    assert!(request.fields[1].is_nillable());

    let Some(TypeEntry::Element(name)) = model.type_entry("UserName") else {
        panic!("UserName should be a simple element");
    };
    assert_eq!(name.data_type, "string");
    assert_eq!(name.documentation, "Display name");
}

#[test]
fn test_direct_field_collection_option() {
    let xml = format!(
        r#"<definitions xmlns="{}" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
             <types><xsd:schema>
               <xsd:element name="Envelope">
                 <xsd:complexType><xsd:sequence>
                   <xsd:element name="header">
                     <xsd:complexType><xsd:sequence>
                       <xsd:element name="token" type="xsd:string"/>
                     </xsd:sequence></xsd:complexType>
                   </xsd:element>
                   <xsd:choice>
                     <xsd:element name="a" type="xsd:string"/>
                     <xsd:element name="b" type="xsd:string"/>
                   </xsd:choice>
                 </xsd:sequence></xsd:complexType>
               </xsd:element>
             </xsd:schema></types>
           </definitions>"#,
        WSDL_NAMESPACE
    );
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let names = |collection| {
        let options = ExtractOptions::default().with_field_collection(collection);
        let model = Extractor::with_options(options).extract(&doc, "");
        match &model.types[0] {
            TypeEntry::ComplexType(ct) => ct.fields.iter().map(|f| f.name.clone()).collect::<Vec<_>>(),
            other => panic!("unexpected entry {:?}", other),
        }
    };

    assert_eq!(names(FieldCollection::Descendants), vec!["header", "token", "a", "b"]);
    assert_eq!(names(FieldCollection::DirectChildren), vec!["header", "a", "b"]);
}

#[test]
fn test_foreign_namespace_is_ignored() {
    let model = parse_str(
        r#"<definitions xmlns="urn:not-wsdl">
             <message name="Lookalike"/>
           </definitions>"#,
    )
    .unwrap();
    assert!(model.messages.is_empty());
}
