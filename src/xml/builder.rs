//! Sparse accumulation and serialization of outbound request documents.

use quick_xml::escape::escape;
use tracing::trace;

/// A field value held by a [`RequestBuilder`]: escaped-on-write text or a
/// nested builder serialized as a container element.
#[derive(Debug, Clone)]
enum FieldValue {
    Text(String),
    Nested(RequestBuilder),
}

/// Write-only accumulator that serializes caller intent into an outbound
/// gateway document.
///
/// Fluent setters take `mut self` and return `Self` so calls chain. Fields
/// that were never set are omitted entirely — optional gateway parameters
/// are only sent when the caller explicitly set them. Setting the same
/// field twice keeps the last value. Serialization is infallible.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    root: String,
    fields: Vec<(String, FieldValue)>,
}

impl RequestBuilder {
    /// Create a builder rooted at the given element name.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            fields: Vec::new(),
        }
    }

    /// Set a scalar field. The value is XML-escaped at serialization time.
    pub fn text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name.into(), FieldValue::Text(value.into()))
    }

    /// Set a nested field. The nested builder's fields are emitted inside a
    /// container element named after `name`; its own root name is unused.
    pub fn nested(self, name: impl Into<String>, builder: RequestBuilder) -> Self {
        self.set(name.into(), FieldValue::Nested(builder))
    }

    fn set(mut self, name: String, value: FieldValue) -> Self {
        // Last write wins, in place, so emission order stays first-set.
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    /// Serialize the accumulated fields as a hierarchical XML document.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_as(&self.root, &mut out);
        trace!(root = %self.root, fields = self.fields.len(), "serialized request");
        out
    }

    fn write_as(&self, element: &str, out: &mut String) {
        out.push('<');
        out.push_str(element);
        out.push('>');
        for (name, value) in &self.fields {
            match value {
                FieldValue::Text(text) => {
                    out.push('<');
                    out.push_str(name);
                    out.push('>');
                    out.push_str(&escape(text));
                    out.push_str("</");
                    out.push_str(name);
                    out.push('>');
                }
                FieldValue::Nested(builder) => builder.write_as(name, out),
            }
        }
        out.push_str("</");
        out.push_str(element);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XmlNode;

    #[test]
    fn test_single_field_round_trip() {
        let xml = RequestBuilder::new("clientToken")
            .text("customerId", "abc123")
            .to_xml();
        assert_eq!(xml, "<clientToken><customerId>abc123</customerId></clientToken>");

        let node = XmlNode::parse(&xml).unwrap();
        assert_eq!(node.name(), "clientToken");
        assert_eq!(node.find_str("customerId"), Some("abc123".to_string()));
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let xml = RequestBuilder::new("clientToken").to_xml();
        assert_eq!(xml, "<clientToken></clientToken>");
    }

    #[test]
    fn test_nested_builder_emits_container() {
        let options = RequestBuilder::new("options").text("verifyCard", "true");
        let xml = RequestBuilder::new("clientToken")
            .text("customerId", "abc123")
            .nested("options", options)
            .to_xml();
        assert_eq!(
            xml,
            "<clientToken><customerId>abc123</customerId>\
             <options><verifyCard>true</verifyCard></options></clientToken>"
        );
    }

    #[test]
    fn test_nested_root_name_is_ignored() {
        let inner = RequestBuilder::new("ignored").text("a", "1");
        let xml = RequestBuilder::new("r").nested("opts", inner).to_xml();
        assert_eq!(xml, "<r><opts><a>1</a></opts></r>");
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = RequestBuilder::new("r")
            .text("company", "Fish & Chips <Ltd>")
            .to_xml();
        assert_eq!(
            xml,
            "<r><company>Fish &amp; Chips &lt;Ltd&gt;</company></r>"
        );
    }

    #[test]
    fn test_last_write_wins_keeps_position() {
        let xml = RequestBuilder::new("r")
            .text("a", "1")
            .text("b", "2")
            .text("a", "3")
            .to_xml();
        assert_eq!(xml, "<r><a>3</a><b>2</b></r>");
    }

    #[test]
    fn test_deeply_nested_builders() {
        let level2 = RequestBuilder::new("x").text("leaf", "v");
        let level1 = RequestBuilder::new("x").nested("inner", level2);
        let xml = RequestBuilder::new("outer").nested("mid", level1).to_xml();
        assert_eq!(xml, "<outer><mid><inner><leaf>v</leaf></inner></mid></outer>");
    }
}
