//! Parsed document nodes and the typed accessor contract.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// A single element of a parsed gateway response document.
///
/// Owns its name, accumulated text content, and child nodes. All accessors
/// are read-only traversals; absent children surface as `None` or an empty
/// map, never as an error. Only decimal and timestamp accessors can fail,
/// and only when the field is present with malformed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    pub(crate) fn named(name: String) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// Element name of this node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content of this node.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// First child element with the given name, for nested-object
    /// construction. `None` when the gateway omitted the nested resource.
    pub fn find_first(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the named child, or `None` when absent.
    pub fn find_str(&self, name: &str) -> Option<String> {
        self.find_first(name).map(|c| c.text.clone())
    }

    /// Decimal value of the named child.
    ///
    /// `Ok(None)` when absent. Present-but-malformed text is a contract
    /// violation by the gateway and fails hard rather than defaulting.
    pub fn find_decimal(&self, name: &str) -> Result<Option<Decimal>> {
        match self.find_first(name) {
            None => Ok(None),
            Some(child) => child
                .text
                .parse::<Decimal>()
                .map(Some)
                .map_err(|_| Error::InvalidDecimal {
                    field: name.to_string(),
                    value: child.text.clone(),
                }),
        }
    }

    /// UTC timestamp value of the named child (RFC 3339 wire format).
    ///
    /// `Ok(None)` when absent; malformed text fails hard, same policy as
    /// [`find_decimal`](Self::find_decimal).
    pub fn find_datetime(&self, name: &str) -> Result<Option<DateTime<Utc>>> {
        match self.find_first(name) {
            None => Ok(None),
            Some(child) => DateTime::parse_from_rfc3339(&child.text)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(|_| Error::InvalidTimestamp {
                    field: name.to_string(),
                    value: child.text.clone(),
                }),
        }
    }

    /// String-to-string mapping built from the named container's children:
    /// each child's element name becomes a key, its text the value.
    ///
    /// An absent container yields an empty map; callers cannot distinguish
    /// absent from empty.
    pub fn find_map(&self, name: &str) -> HashMap<String, String> {
        match self.find_first(name) {
            None => HashMap::new(),
            Some(container) => container
                .children
                .iter()
                .map(|c| (c.name.clone(), c.text.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> XmlNode {
        XmlNode::parse(
            r#"<transaction>
                 <amount>10.00</amount>
                 <order-id>order-77</order-id>
                 <created-at>2026-03-14T09:26:53Z</created-at>
                 <custom-fields>
                   <foo>1</foo>
                   <bar>2</bar>
                 </custom-fields>
                 <billing>
                   <id>addr_1</id>
                 </billing>
               </transaction>"#,
        )
        .unwrap()
    }

    #[test]
    fn test_find_str_present_and_absent() {
        let node = sample();
        assert_eq!(node.find_str("order-id"), Some("order-77".to_string()));
        assert_eq!(node.find_str("no-such-field"), None);
    }

    #[test]
    fn test_find_decimal_exact() {
        let node = sample();
        assert_eq!(node.find_decimal("amount").unwrap(), Some(dec!(10.00)));
    }

    #[test]
    fn test_find_decimal_absent_is_none() {
        let node = sample();
        assert_eq!(node.find_decimal("missing").unwrap(), None);
    }

    #[test]
    fn test_find_decimal_malformed_fails() {
        let node = XmlNode::parse("<t><amount>abc</amount></t>").unwrap();
        let err = node.find_decimal("amount").unwrap_err();
        assert!(matches!(err, Error::InvalidDecimal { ref field, ref value }
            if field == "amount" && value == "abc"));
    }

    #[test]
    fn test_find_datetime_rfc3339() {
        let node = sample();
        let created = node.find_datetime("created-at").unwrap().unwrap();
        assert_eq!(created.to_rfc3339(), "2026-03-14T09:26:53+00:00");
    }

    #[test]
    fn test_find_datetime_malformed_fails() {
        let node = XmlNode::parse("<t><at>not-a-date</at></t>").unwrap();
        assert!(matches!(
            node.find_datetime("at"),
            Err(Error::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_find_map_collects_children() {
        let node = sample();
        let map = node.find_map("custom-fields");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("foo").map(String::as_str), Some("1"));
        assert_eq!(map.get("bar").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_find_map_absent_is_empty() {
        let node = sample();
        assert!(node.find_map("not-there").is_empty());
    }

    #[test]
    fn test_find_first_nested() {
        let node = sample();
        let billing = node.find_first("billing").unwrap();
        assert_eq!(billing.find_str("id"), Some("addr_1".to_string()));
        assert!(node.find_first("shipping").is_none());
    }
}
