//! Hyperlinked HTML report
//!
//! Messages and type entries carry their anchor as `id`; every resolved
//! reference becomes an `<a class="ref-link">`. The four section anchors in
//! the table of contents exist regardless of model content.

use super::blocks::{Block, PartTarget, Reference, Section};
use super::OutputSink;
use crate::resolver::LinkState;
use quick_xml::escape::escape;
use std::fmt::{self, Write};

const STYLE: &str = r#"
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            margin: 0;
            padding: 20px;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            border-radius: 10px;
            box-shadow: 0 10px 40px rgba(0,0,0,0.3);
            padding: 40px;
        }
        h1 { color: #667eea; border-bottom: 3px solid #667eea; padding-bottom: 10px; }
        h2 {
            color: #764ba2;
            margin-top: 30px;
            padding: 10px;
            background: #f0f0f0;
            border-left: 5px solid #667eea;
        }
        h3 { color: #555; margin-top: 20px; }
        .section { margin-bottom: 30px; }
        .service, .operation, .message, .type {
            background: #f9f9f9;
            border: 1px solid #ddd;
            border-radius: 5px;
            padding: 15px;
            margin: 10px 0;
        }
        .operation { background: #e8f4f8; }
        .label { font-weight: bold; color: #667eea; }
        .value { color: #333; margin-left: 10px; }
        .endpoint { word-break: break-all; color: #0066cc; }
        table { width: 100%; border-collapse: collapse; margin: 10px 0; }
        th, td { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }
        th { background-color: #667eea; color: white; }
        .badge { display: inline-block; padding: 3px 8px; border-radius: 3px; font-size: 0.85em; margin: 2px; }
        .badge-input { background: #4caf50; color: white; }
        .badge-output { background: #2196f3; color: white; }
        .ref-link {
            color: #0066cc;
            text-decoration: none;
            border-bottom: 1px dashed #0066cc;
            transition: all 0.2s ease;
        }
        .ref-link:hover { color: #004499; border-bottom-style: solid; background-color: #e8f4f8; }
        :target { animation: highlight 2s ease; }
        @keyframes highlight {
            0% { background-color: #ffeb3b; }
            100% { background-color: transparent; }
        }
        .toc { background: #f5f5f5; border: 1px solid #ddd; border-radius: 5px; padding: 15px; margin-bottom: 20px; }
        .toc h3 { margin-top: 0; color: #667eea; }
        .toc ul { list-style-type: none; padding-left: 0; }
        .toc li { margin: 5px 0; }
        .toc a { color: #667eea; text-decoration: none; }
        .toc a:hover { text-decoration: underline; }
"#;

/// Writes a self-contained HTML page
#[derive(Debug, Default)]
pub struct HtmlSink {
    out: String,
}

impl HtmlSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    fn link(reference: &Reference<'_>) -> String {
        match &reference.link {
            LinkState::Resolved(anchor) => format!(
                r##"<a href="#{}" class="ref-link">{}</a>"##,
                escape(anchor),
                escape(reference.name)
            ),
            LinkState::Unresolved(text) => escape(text).into_owned(),
        }
    }

    fn documentation(&mut self, doc: &str) -> fmt::Result {
        if !doc.is_empty() {
            write!(self.out, "<p><i>{}</i></p>", escape(doc))?;
        }
        Ok(())
    }

    fn header(&mut self, target_namespace: &str) -> fmt::Result {
        write!(
            self.out,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>WSDL Analysis Report</title>
    <style>{}</style>
</head>
<body>
    <div class="container">
        <h1>WSDL Analysis Report</h1>
        <p><span class="label">Target namespace:</span> <span class="value">{}</span></p>

        <div class="toc">
            <h3>Contents</h3>
            <ul>
"#,
            STYLE,
            escape(target_namespace)
        )?;
        for section in Section::ALL {
            writeln!(
                self.out,
                r##"                <li><a href="#{}">{}</a></li>"##,
                section.anchor(),
                section.title()
            )?;
        }
        self.out.push_str("            </ul>\n        </div>\n");
        Ok(())
    }

    fn write_block(&mut self, block: &Block<'_>) -> fmt::Result {
        match block {
            Block::Header { target_namespace } => self.header(target_namespace)?,
            Block::SectionStart { section, .. } => write!(
                self.out,
                r#"<div class="section" id="{}"><h2>{}</h2>"#,
                section.anchor(),
                section.title()
            )?,
            Block::SectionEnd(_) | Block::ServiceEnd => self.out.push_str("</div>"),
            Block::ServiceStart(service) => {
                write!(self.out, r#"<div class="service"><h3>{}</h3>"#, escape(&service.name))?
            }
            Block::Port(port) => write!(
                self.out,
                r#"
                <p><span class="label">Port:</span> <span class="value">{}</span></p>
                <p><span class="label">Binding:</span> <span class="value">{}</span></p>
                <p><span class="label">Endpoint:</span> <span class="value endpoint">{}</span></p>
            "#,
                escape(&port.name),
                escape(&port.binding),
                escape(&port.address)
            )?,
            Block::PortType(port_type) => write!(self.out, "<h3>{}</h3>", escape(&port_type.name))?,
            Block::Operation {
                operation,
                input,
                output,
                soap_action,
            } => {
                write!(self.out, r#"<div class="operation"><h4>{}</h4>"#, escape(&operation.name))?;
                self.documentation(&operation.documentation)?;
                write!(
                    self.out,
                    r#"<p><span class="badge badge-input">Input</span> {} <span class="badge badge-output">Output</span> {}</p>"#,
                    Self::link(input),
                    Self::link(output)
                )?;
                if !soap_action.is_empty() {
                    write!(
                        self.out,
                        r#"<p><span class="label">SOAPAction:</span> <span class="value">{}</span></p>"#,
                        escape(soap_action)
                    )?;
                }
                self.out.push_str("</div>");
            }
            Block::MessageStart { message, anchor } => write!(
                self.out,
                r#"<div class="message" id="{}"><h4>{}</h4><table><tr><th>Part</th><th>Element / Type</th></tr>"#,
                escape(anchor),
                escape(&message.name)
            )?,
            Block::Part { part, target } => {
                let cell = match target {
                    PartTarget::Element(r) => format!("element: {}", Self::link(r)),
                    PartTarget::Type(r) => format!("type: {}", Self::link(r)),
                    PartTarget::None => "type: ".to_string(),
                };
                write!(self.out, "<tr><td>{}</td><td>{}</td></tr>", escape(&part.name), cell)?;
            }
            Block::MessageEnd | Block::ComplexTypeEnd => self.out.push_str("</table></div>"),
            Block::ComplexTypeStart { complex, anchor } => {
                write!(
                    self.out,
                    r#"<div class="type" id="{}"><h4>{}</h4>"#,
                    escape(anchor),
                    escape(&complex.name)
                )?;
                self.documentation(&complex.documentation)?;
                self.out.push_str(
                    "<table><tr><th>Field</th><th>Type</th><th>Occurs</th><th>Nullable</th><th>Description</th></tr>",
                );
            }
            Block::Field { field, target } => write!(
                self.out,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&field.name),
                Self::link(target),
                escape(&field.occurs()),
                if field.is_nillable() { "✓" } else { "" },
                escape(&field.documentation)
            )?,
            Block::SimpleElement {
                element,
                anchor,
                data_type,
            } => {
                write!(
                    self.out,
                    r#"<div class="type" id="{}"><h4>{}</h4>"#,
                    escape(anchor),
                    escape(&element.name)
                )?;
                self.documentation(&element.documentation)?;
                write!(
                    self.out,
                    r#"<p><span class="label">Data type:</span> {}</p></div>"#,
                    Self::link(data_type)
                )?;
            }
            Block::Footer => self.out.push_str("</div></body></html>"),
        }
        Ok(())
    }
}

impl OutputSink for HtmlSink {
    fn emit(&mut self, block: &Block<'_>) {
        // Writing into a String never fails
        let _ = self.write_block(block);
    }

    fn finish(self) -> String {
        self.out
    }
}
