//! Rendering tests: cross-links, omitted fields and idempotence

mod common;

use pretty_assertions::assert_eq;
use wsdldoc::render::{render, Format};
use wsdldoc::{parse_str, ParsedModel};

fn model() -> ParsedModel {
    parse_str(&common::fixture("user_service.wsdl")).unwrap()
}

fn html_block<'a>(html: &'a str, id: &str) -> &'a str {
    let start = html
        .find(&format!(r#"id="{}""#, id))
        .unwrap_or_else(|| panic!("missing id {}", id));
    let end = html[start..].find("</div>").unwrap() + start;
    &html[start..end]
}

#[test]
fn test_message_part_links_to_complex_type() {
    let html = render(&model(), Format::Html).unwrap();

    assert!(html.contains(r#"id="type_UserRequestType""#));
    let message = html_block(&html, "msg_GetUserRequest");
    assert!(message.contains(r##"<a href="#type_UserRequestType" class="ref-link">UserRequestType</a>"##));
}

#[test]
fn test_unresolved_references_are_plain_text() {
    let html = render(&model(), Format::Html).unwrap();

    // Output message that does not exist
    assert!(html.contains("PlaceOrderResponse"));
    assert!(!html.contains(r##"href="#msg_PlaceOrderResponse""##));

    // Built-in scalar type
    let message = html_block(&html, "msg_PlaceOrderRequest");
    assert!(message.contains("type: string"));
    assert!(message.contains(r##"element: <a href="#type_Order" class="ref-link">Order</a>"##));
}

#[test]
fn test_operation_links_to_messages() {
    let html = render(&model(), Format::Html).unwrap();
    assert!(html.contains(r##"<a href="#msg_GetUserRequest" class="ref-link">GetUserRequest</a>"##));
    assert!(html.contains(r##"<a href="#msg_GetUserResponse" class="ref-link">GetUserResponse</a>"##));
}

#[test]
fn test_field_and_element_types_link() {
    let html = render(&model(), Format::Html).unwrap();

    let request = html_block(&html, "type_UserRequestType");
    assert!(request.contains(r##"<a href="#type_Address" class="ref-link">Address</a>"##));
    assert!(request.contains("<td>0..1</td><td>✓</td>"));

    let name = html_block(&html, "type_UserName");
    assert!(name.contains("Display name"));
    assert!(name.contains("Data type:</span> string"));
}

#[test]
fn test_soap_action_omitted_when_absent() {
    let text = render(&model(), Format::Text).unwrap();

    let place_order = text.split("● PlaceOrder").nth(1).unwrap();
    let place_order = place_order.split("\n\n").next().unwrap();
    assert!(place_order.contains("Input: PlaceOrderRequest"));
    assert!(!place_order.contains("SOAPAction"));

    assert!(text.contains("    SOAPAction: http://example.com/users/GetUser"));
}

#[test]
fn test_orphaned_binding_not_rendered_under_port_types() {
    let model = model();
    let text = render(&model, Format::Text).unwrap();
    let html = render(&model, Format::Html).unwrap();

    assert!(!text.contains("http://example.com/audit"));
    assert!(!html.contains("http://example.com/audit"));
    assert!(model.bindings.iter().any(|b| b.name == "AuditBinding"));
}

#[test]
fn test_text_report_layout() {
    let text = render(&model(), Format::Text).unwrap();

    assert!(text.contains("Target namespace: http://example.com/users"));
    assert!(text.contains("[Service] UserService"));
    assert!(text.contains("  │  └─ Endpoint: http://example.com/soap12/users"));
    assert!(text.contains("  ● GetUser\n    Description: Fetch a single user."));
    assert!(text.contains("  ├─ parameters (element: UserRequestType)"));
    assert!(text.contains("  ├─ address: Address [0..1] (nullable)"));
    assert!(text.contains("  ├─ userId: string [1..1] - Primary key"));
    assert!(text.contains("  ├─ lines: string [1..unbounded]"));
    assert!(text.contains("[Element] UserName : string\n    Description: Display name"));
    assert!(!text.contains("<a href"));
}

#[test]
fn test_rendering_is_idempotent() {
    let model = model();
    for format in [Format::Text, Format::Html, Format::Json] {
        assert_eq!(render(&model, format).unwrap(), render(&model, format).unwrap());
    }
}

#[test]
fn test_json_dump_round_trips_names() {
    let json = render(&model(), Format::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["targetNamespace"], "http://example.com/users");
    assert_eq!(value["types"][2]["kind"], "complexType");
    assert_eq!(value["types"][2]["name"], "Order");
    assert_eq!(value["types"][3]["kind"], "element");
    assert_eq!(value["bindings"][0]["type"], "UserPortType");
}

#[test]
fn test_type_and_element_sharing_a_name_are_reported() {
    let model = parse_str(
        r#"<definitions xmlns="http://schemas.xmlsoap.org/wsdl/"
               xmlns:xsd="http://www.w3.org/2001/XMLSchema"
               targetNamespace="urn:users">
             <types>
               <xsd:schema targetNamespace="urn:users">
                 <xsd:complexType name="GetUser">
                   <xsd:sequence><xsd:element name="id" type="xsd:int"/></xsd:sequence>
                 </xsd:complexType>
                 <xsd:element name="GetUser" type="tns:GetUser"/>
               </xsd:schema>
             </types>
           </definitions>"#,
    )
    .unwrap();

    let html = render(&model, Format::Html).unwrap();
    assert_eq!(html.matches(r#"id="type_GetUser""#).count(), 2);

    let collisions = model.anchor_collisions();
    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].anchor, "type_GetUser");
    assert_eq!(collisions[0].occurrences, 2);

    let json = render(&model, Format::Json).unwrap();
    assert!(json.contains(r#""kind": "repeated""#));
}
