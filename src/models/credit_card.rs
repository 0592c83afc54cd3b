//! Stored payment card resource

use serde::Serialize;

use crate::xml::XmlNode;

/// A payment card as the gateway reports it: vault token plus the
/// non-sensitive card summary (BIN, last four, expiration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditCard {
    pub token: Option<String>,
    pub bin: Option<String>,
    pub last_4: Option<String>,
    pub card_type: Option<String>,
    pub cardholder_name: Option<String>,
    pub customer_id: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
}

impl CreditCard {
    /// Build a card from its document node.
    pub fn from_node(node: &XmlNode) -> Self {
        Self {
            token: node.find_str("token"),
            bin: node.find_str("bin"),
            last_4: node.find_str("last-4"),
            card_type: node.find_str("card-type"),
            cardholder_name: node.find_str("cardholder-name"),
            customer_id: node.find_str("customer-id"),
            expiration_month: node.find_str("expiration-month"),
            expiration_year: node.find_str("expiration-year"),
        }
    }

    /// `MM/YYYY` expiration, when both parts are present.
    pub fn expiration_date(&self) -> Option<String> {
        match (&self.expiration_month, &self.expiration_year) {
            (Some(month), Some(year)) => Some(format!("{month}/{year}")),
            _ => None,
        }
    }

    /// BIN-and-last-four masked number, when both parts are present.
    pub fn masked_number(&self) -> Option<String> {
        match (&self.bin, &self.last_4) {
            (Some(bin), Some(last_4)) => Some(format!("{bin}******{last_4}")),
            _ => None,
        }
    }
}
