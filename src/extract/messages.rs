//! `//wsdl:message` and its parts

use super::attr;
use crate::model::{Message, Part};
use crate::names::strip_namespace;
use crate::namespaces::{descendants, Ns};
use roxmltree::Node;

pub(super) fn extract(root: Node<'_, '_>) -> Vec<Message> {
    descendants(root, Ns::Wsdl, "message")
        .map(|message| Message {
            name: attr(message, "name"),
            parts: descendants(message, Ns::Wsdl, "part")
                .map(|part| Part {
                    name: attr(part, "name"),
                    element: strip_namespace(part.attribute("element")),
                    type_ref: strip_namespace(part.attribute("type")),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_messages_keep_order_and_duplicates() {
        let doc = Document::parse(
            r#"<definitions xmlns="http://schemas.xmlsoap.org/wsdl/">
                 <message name="GetUserRequest">
                   <part name="parameters" element="tns:UserRequestType"/>
                 </message>
                 <message name="Legacy">
                   <part name="id" type="xsd:int"/>
                   <part name="note"/>
                 </message>
                 <message name="Legacy"/>
               </definitions>"#,
        )
        .unwrap();

        let messages = extract(doc.root());
        let names: Vec<_> = messages.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["GetUserRequest", "Legacy", "Legacy"]);

        assert_eq!(messages[0].parts[0].element, "UserRequestType");
        assert_eq!(messages[1].parts[0].type_ref, "int");
        assert_eq!(messages[1].parts[1], Part { name: "note".into(), ..Default::default() });
    }
}
