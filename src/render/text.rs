//! Plain-text report

use super::blocks::{Block, PartTarget, Section};
use super::OutputSink;

const RULE_WIDTH: usize = 80;

/// Writes the sectioned plain-text report. References appear as bare names.
#[derive(Debug, Default)]
pub struct TextSink {
    lines: Vec<String>,
    suppressed: bool,
}

impl TextSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, line: impl Into<String>) {
        if !self.suppressed {
            self.lines.push(line.into());
        }
    }

    fn rule() -> String {
        "=".repeat(RULE_WIDTH)
    }
}

impl OutputSink for TextSink {
    fn emit(&mut self, block: &Block<'_>) {
        match block {
            Block::Header { target_namespace } => {
                self.push(Self::rule());
                self.push("WSDL Analysis Report");
                self.push(Self::rule());
                self.push(format!("\nTarget namespace: {}\n", target_namespace));
            }
            Block::SectionStart { section, empty } => {
                // An empty type section is left out of the text report.
                if *section == Section::Types && *empty {
                    self.suppressed = true;
                    return;
                }
                self.push(format!("\n{}", Self::rule()));
                self.push(section.title());
                self.push(Self::rule());
            }
            Block::SectionEnd(_) => self.suppressed = false,
            Block::ServiceStart(service) => self.push(format!("\n[Service] {}", service.name)),
            Block::Port(port) => {
                self.push(format!("  ├─ Port: {}", port.name));
                self.push(format!("  │  ├─ Binding: {}", port.binding));
                self.push(format!("  │  └─ Endpoint: {}", port.address));
            }
            Block::ServiceEnd | Block::MessageEnd | Block::ComplexTypeEnd => {}
            Block::PortType(port_type) => self.push(format!("\n[PortType] {}", port_type.name)),
            Block::Operation {
                operation,
                input,
                output,
                soap_action,
            } => {
                self.push(format!("\n  ● {}", operation.name));
                if !operation.documentation.is_empty() {
                    self.push(format!("    Description: {}", operation.documentation));
                }
                self.push(format!("    Input: {}", input.name));
                self.push(format!("    Output: {}", output.name));
                if !soap_action.is_empty() {
                    self.push(format!("    SOAPAction: {}", soap_action));
                }
            }
            Block::MessageStart { message, .. } => {
                self.push(format!("\n[Message] {}", message.name))
            }
            Block::Part { part, target } => match target {
                PartTarget::Element(r) => {
                    self.push(format!("  ├─ {} (element: {})", part.name, r.name))
                }
                PartTarget::Type(r) => self.push(format!("  ├─ {} (type: {})", part.name, r.name)),
                PartTarget::None => {}
            },
            Block::ComplexTypeStart { complex, .. } => {
                self.push(format!("\n[ComplexType] {}", complex.name));
                if !complex.documentation.is_empty() {
                    self.push(format!("    Description: {}", complex.documentation));
                }
            }
            Block::Field { field, target } => {
                let nillable = if field.is_nillable() { " (nullable)" } else { "" };
                let doc = if field.documentation.is_empty() {
                    String::new()
                } else {
                    format!(" - {}", field.documentation)
                };
                self.push(format!(
                    "  ├─ {}: {} [{}]{}{}",
                    field.name,
                    target.name,
                    field.occurs(),
                    nillable,
                    doc
                ));
            }
            Block::SimpleElement {
                element, data_type, ..
            } => {
                let doc = if element.documentation.is_empty() {
                    String::new()
                } else {
                    format!("\n    Description: {}", element.documentation)
                };
                self.push(format!("\n[Element] {} : {}{}", element.name, data_type.name, doc));
            }
            Block::Footer => self.push(format!("\n{}", Self::rule())),
        }
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}
