//! Customer resource

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::xml::XmlNode;

/// A vaulted customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Build a customer from its document node.
    pub fn from_node(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            id: node.find_str("id"),
            first_name: node.find_str("first-name"),
            last_name: node.find_str("last-name"),
            company: node.find_str("company"),
            email: node.find_str("email"),
            phone: node.find_str("phone"),
            website: node.find_str("website"),
            created_at: node.find_datetime("created-at")?,
            updated_at: node.find_datetime("updated-at")?,
        })
    }
}
