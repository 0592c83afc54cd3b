//! Transaction resource and its wire enumerations

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{Address, CreditCard, Customer};
use crate::xml::XmlNode;

/// Lifecycle state of a transaction as the gateway reports it.
///
/// The lookup from wire text is total: tokens the gateway adds after this
/// SDK ships resolve to [`Unrecognized`](Self::Unrecognized) instead of
/// failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Authorized,
    Authorizing,
    Failed,
    GatewayRejected,
    ProcessorDeclined,
    Settled,
    SettlementFailed,
    SubmittedForSettlement,
    Voided,
    Unrecognized,
}

impl TransactionStatus {
    /// Resolve a wire token. Exact, case-sensitive match; anything else is
    /// [`Unrecognized`](Self::Unrecognized). Never fails.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "authorized" => Self::Authorized,
            "authorizing" => Self::Authorizing,
            "failed" => Self::Failed,
            "gateway_rejected" => Self::GatewayRejected,
            "processor_declined" => Self::ProcessorDeclined,
            "settled" => Self::Settled,
            "settlement_failed" => Self::SettlementFailed,
            "submitted_for_settlement" => Self::SubmittedForSettlement,
            "voided" => Self::Voided,
            _ => Self::Unrecognized,
        }
    }

    /// Outbound wire token.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::Authorizing => "authorizing",
            Self::Failed => "failed",
            Self::GatewayRejected => "gateway_rejected",
            Self::ProcessorDeclined => "processor_declined",
            Self::Settled => "settled",
            Self::SettlementFailed => "settlement_failed",
            Self::SubmittedForSettlement => "submitted_for_settlement",
            Self::Voided => "voided",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Kind of money movement: a charge or a refund-style credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Sale,
    Credit,
    Unrecognized,
}

impl TransactionType {
    /// Resolve a wire token; unknown tokens map to
    /// [`Unrecognized`](Self::Unrecognized). Never fails.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "sale" => Self::Sale,
            "credit" => Self::Credit,
            _ => Self::Unrecognized,
        }
    }

    /// Outbound wire token.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Credit => "credit",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// A payment transaction record.
///
/// Immutable once constructed; absent optional fields are `None` (or an
/// empty map for `custom_fields`). Nested resources are owned by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: Option<String>,
    pub amount: Option<Decimal>,
    pub currency_iso_code: Option<String>,
    pub status: Option<TransactionStatus>,
    pub transaction_type: Option<TransactionType>,
    pub order_id: Option<String>,
    pub merchant_account_id: Option<String>,
    pub subscription_id: Option<String>,
    pub processor_authorization_code: Option<String>,
    pub processor_response_code: Option<String>,
    pub processor_response_text: Option<String>,
    pub avs_error_response_code: Option<String>,
    pub avs_postal_code_response_code: Option<String>,
    pub avs_street_address_response_code: Option<String>,
    pub cvv_response_code: Option<String>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub credit_card: Option<CreditCard>,
    pub customer: Option<Customer>,
    pub custom_fields: HashMap<String, String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Build a transaction from its document node.
    ///
    /// Fails only on present-but-malformed decimal or timestamp text;
    /// absent fields and unrecognized enum tokens never fail.
    pub fn from_node(node: &XmlNode) -> Result<Self> {
        let transaction = Self {
            id: node.find_str("id"),
            amount: node.find_decimal("amount")?,
            currency_iso_code: node.find_str("currency-iso-code"),
            status: node
                .find_str("status")
                .map(|raw| TransactionStatus::from_wire(&raw)),
            transaction_type: node
                .find_str("type")
                .map(|raw| TransactionType::from_wire(&raw)),
            order_id: node.find_str("order-id"),
            merchant_account_id: node.find_str("merchant-account-id"),
            subscription_id: node.find_str("subscription-id"),
            processor_authorization_code: node.find_str("processor-authorization-code"),
            processor_response_code: node.find_str("processor-response-code"),
            processor_response_text: node.find_str("processor-response-text"),
            avs_error_response_code: node.find_str("avs-error-response-code"),
            avs_postal_code_response_code: node.find_str("avs-postal-code-response-code"),
            avs_street_address_response_code: node.find_str("avs-street-address-response-code"),
            cvv_response_code: node.find_str("cvv-response-code"),
            billing_address: node.find_first("billing").map(Address::from_node),
            shipping_address: node.find_first("shipping").map(Address::from_node),
            credit_card: node.find_first("credit-card").map(CreditCard::from_node),
            customer: node
                .find_first("customer")
                .map(Customer::from_node)
                .transpose()?,
            custom_fields: node.find_map("custom-fields"),
            created_at: node.find_datetime("created-at")?,
            updated_at: node.find_datetime("updated-at")?,
        };
        debug!(id = ?transaction.id, status = ?transaction.status, "mapped transaction");
        Ok(transaction)
    }

    /// Parse a transaction response document.
    pub fn from_xml(xml: &str) -> Result<Self> {
        Self::from_node(&XmlNode::parse(xml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const RESPONSE: &str = r#"<transaction>
        <id>txn_b6a2</id>
        <amount>10.00</amount>
        <currency-iso-code>USD</currency-iso-code>
        <status>submitted_for_settlement</status>
        <type>sale</type>
        <order-id>order-77</order-id>
        <merchant-account-id>acct_main</merchant-account-id>
        <processor-response-code>1000</processor-response-code>
        <processor-response-text>Approved</processor-response-text>
        <cvv-response-code>M</cvv-response-code>
        <billing>
            <id>addr_b</id>
            <postal-code>60622</postal-code>
        </billing>
        <credit-card>
            <token>tok_9f</token>
            <bin>411111</bin>
            <last-4>1111</last-4>
        </credit-card>
        <customer>
            <id>cus_42</id>
            <email>dana@example.com</email>
        </customer>
        <custom-fields>
            <foo>1</foo>
            <bar>2</bar>
        </custom-fields>
        <created-at>2026-03-14T09:26:53Z</created-at>
        <updated-at>2026-03-14T09:27:10Z</updated-at>
    </transaction>"#;

    #[test]
    fn test_full_response_maps_every_field() {
        let txn = Transaction::from_xml(RESPONSE).unwrap();
        assert_eq!(txn.id.as_deref(), Some("txn_b6a2"));
        assert_eq!(txn.amount, Some(dec!(10.00)));
        assert_eq!(txn.currency_iso_code.as_deref(), Some("USD"));
        assert_eq!(txn.status, Some(TransactionStatus::SubmittedForSettlement));
        assert_eq!(txn.transaction_type, Some(TransactionType::Sale));
        assert_eq!(txn.processor_response_text.as_deref(), Some("Approved"));
        assert_eq!(
            txn.billing_address.as_ref().and_then(|a| a.postal_code.as_deref()),
            Some("60622")
        );
        assert_eq!(
            txn.credit_card.as_ref().and_then(|c| c.token.as_deref()),
            Some("tok_9f")
        );
        assert_eq!(
            txn.customer.as_ref().and_then(|c| c.id.as_deref()),
            Some("cus_42")
        );
        assert_eq!(txn.custom_fields.get("foo").map(String::as_str), Some("1"));
        assert_eq!(txn.custom_fields.get("bar").map(String::as_str), Some("2"));
        assert!(txn.created_at.is_some());
    }

    #[test]
    fn test_sparse_response_yields_nones() {
        let txn = Transaction::from_xml("<transaction><id>txn_1</id></transaction>").unwrap();
        assert_eq!(txn.id.as_deref(), Some("txn_1"));
        assert_eq!(txn.amount, None);
        assert_eq!(txn.status, None);
        assert_eq!(txn.billing_address, None);
        assert_eq!(txn.shipping_address, None);
        assert_eq!(txn.credit_card, None);
        assert_eq!(txn.customer, None);
        assert!(txn.custom_fields.is_empty());
    }

    #[test]
    fn test_known_status_tokens_resolve_exactly() {
        let cases = [
            ("authorized", TransactionStatus::Authorized),
            ("authorizing", TransactionStatus::Authorizing),
            ("failed", TransactionStatus::Failed),
            ("gateway_rejected", TransactionStatus::GatewayRejected),
            ("processor_declined", TransactionStatus::ProcessorDeclined),
            ("settled", TransactionStatus::Settled),
            ("settlement_failed", TransactionStatus::SettlementFailed),
            (
                "submitted_for_settlement",
                TransactionStatus::SubmittedForSettlement,
            ),
            ("voided", TransactionStatus::Voided),
        ];
        for (token, expected) in cases {
            assert_eq!(TransactionStatus::from_wire(token), expected);
            assert_eq!(expected.as_wire(), token);
        }
    }

    #[test]
    fn test_unknown_status_token_falls_back() {
        assert_eq!(
            TransactionStatus::from_wire("instant_teleportation"),
            TransactionStatus::Unrecognized
        );
        // Case-sensitive: a shouting gateway is still unrecognized.
        assert_eq!(
            TransactionStatus::from_wire("SETTLED"),
            TransactionStatus::Unrecognized
        );
    }

    #[test]
    fn test_unknown_type_token_falls_back() {
        assert_eq!(TransactionType::from_wire("sale"), TransactionType::Sale);
        assert_eq!(TransactionType::from_wire("credit"), TransactionType::Credit);
        assert_eq!(
            TransactionType::from_wire("barter"),
            TransactionType::Unrecognized
        );
    }

    #[test]
    fn test_unknown_status_in_document_does_not_fail_parse() {
        let txn = Transaction::from_xml(
            "<transaction><status>some_future_state</status></transaction>",
        )
        .unwrap();
        assert_eq!(txn.status, Some(TransactionStatus::Unrecognized));
    }

    #[test]
    fn test_malformed_amount_fails_construction() {
        let err = Transaction::from_xml("<transaction><amount>abc</amount></transaction>")
            .unwrap_err();
        assert!(matches!(err, crate::error::Error::InvalidDecimal { .. }));
    }

    #[test]
    fn test_malformed_timestamp_fails_construction() {
        let err = Transaction::from_xml(
            "<transaction><created-at>last tuesday</created-at></transaction>",
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::Error::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_amount_has_no_float_drift() {
        let txn =
            Transaction::from_xml("<transaction><amount>10.00</amount></transaction>").unwrap();
        let amount = txn.amount.unwrap();
        assert_eq!(amount, dec!(10.00));
        assert_eq!(amount.to_string(), "10.00");
    }

    #[test]
    fn test_each_parse_owns_fresh_nested_records() {
        let a = Transaction::from_xml(RESPONSE).unwrap();
        let mut b = Transaction::from_xml(RESPONSE).unwrap();
        b.custom_fields.insert("foo".to_string(), "9".to_string());
        assert_eq!(a.custom_fields.get("foo").map(String::as_str), Some("1"));
    }
}
