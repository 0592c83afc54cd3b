//! Postal address resource

use serde::Serialize;

use crate::xml::XmlNode;

/// A billing or shipping address attached to a gateway resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub street_address: Option<String>,
    pub extended_address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country_name: Option<String>,
}

impl Address {
    /// Build an address from its document node.
    pub fn from_node(node: &XmlNode) -> Self {
        Self {
            id: node.find_str("id"),
            first_name: node.find_str("first-name"),
            last_name: node.find_str("last-name"),
            company: node.find_str("company"),
            street_address: node.find_str("street-address"),
            extended_address: node.find_str("extended-address"),
            locality: node.find_str("locality"),
            region: node.find_str("region"),
            postal_code: node.find_str("postal-code"),
            country_name: node.find_str("country-name"),
        }
    }
}
