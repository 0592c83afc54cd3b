//! Event-driven parsing of gateway response documents.

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::error::{Error, Result};
use crate::xml::XmlNode;

impl XmlNode {
    /// Parse a gateway response document into an owned node tree.
    ///
    /// Attributes are ignored; the gateway's wire contract is entirely
    /// element-shaped. Text content is entity-unescaped and indentation
    /// whitespace between elements is dropped. Malformed XML is a hard
    /// error.
    pub fn parse(xml: &str) -> Result<XmlNode> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                    stack.push(XmlNode::named(name));
                }
                Event::Empty(start) => {
                    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                    attach(&mut stack, &mut root, XmlNode::named(name))?;
                }
                Event::Text(text) => {
                    let unescaped = text.unescape()?;
                    let trimmed = unescaped.trim();
                    if !trimmed.is_empty() {
                        if let Some(open) = stack.last_mut() {
                            open.push_text(trimmed);
                        }
                    }
                }
                Event::CData(data) => {
                    let raw = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    if let Some(open) = stack.last_mut() {
                        open.push_text(&raw);
                    }
                }
                Event::End(end) => {
                    let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                    let node = stack
                        .pop()
                        .ok_or_else(|| Error::Document("unbalanced closing tag".to_string()))?;
                    if node.name() != name {
                        return Err(Error::Document(format!(
                            "closing tag </{name}> does not match <{}>",
                            node.name()
                        )));
                    }
                    attach(&mut stack, &mut root, node)?;
                }
                Event::Eof => break,
                // Declarations, comments and processing instructions carry
                // no gateway data.
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(Error::Document("unclosed element at end of input".to_string()));
        }

        let root = root.ok_or_else(|| Error::Document("document has no root element".to_string()))?;
        debug!(root = %root.name(), "parsed gateway document");
        Ok(root)
    }
}

/// Hand a completed node to its parent, or make it the document root.
fn attach(stack: &mut Vec<XmlNode>, root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.push_child(node),
        None => {
            if root.is_some() {
                return Err(Error::Document("multiple root elements".to_string()));
            }
            *root = Some(node);
        }
    }
    Ok(())
}
