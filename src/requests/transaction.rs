//! Transaction submission requests (sale and credit).

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::TransactionType;
use crate::requests::Request;
use crate::xml::RequestBuilder;

/// Builds a `transaction` request: a sale charge or a credit against a
/// vaulted payment method.
#[derive(Debug, Clone)]
pub struct TransactionRequest {
    transaction_type: TransactionType,
    amount: Option<Decimal>,
    order_id: Option<String>,
    customer_id: Option<String>,
    merchant_account_id: Option<String>,
    payment_method_token: Option<String>,
    custom_fields: HashMap<String, String>,
    options: Option<TransactionOptionsRequest>,
}

impl TransactionRequest {
    /// Start a sale request.
    pub fn sale() -> Self {
        Self::with_type(TransactionType::Sale)
    }

    /// Start a credit (refund-style) request.
    pub fn credit() -> Self {
        Self::with_type(TransactionType::Credit)
    }

    fn with_type(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type,
            amount: None,
            order_id: None,
            customer_id: None,
            merchant_account_id: None,
            payment_method_token: None,
            custom_fields: HashMap::new(),
            options: None,
        }
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Route the transaction to a specific merchant account instead of the
    /// gateway default.
    pub fn merchant_account_id(mut self, merchant_account_id: impl Into<String>) -> Self {
        self.merchant_account_id = Some(merchant_account_id.into());
        self
    }

    /// Charge a vaulted payment method by its token.
    pub fn payment_method_token(mut self, token: impl Into<String>) -> Self {
        self.payment_method_token = Some(token.into());
        self
    }

    /// Attach a merchant-defined custom field.
    pub fn custom_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_fields.insert(key.into(), value.into());
        self
    }

    pub fn options(mut self, options: TransactionOptionsRequest) -> Self {
        self.options = Some(options);
        self
    }

    fn build(&self) -> RequestBuilder {
        let mut builder =
            RequestBuilder::new("transaction").text("type", self.transaction_type.as_wire());
        if let Some(amount) = self.amount {
            builder = builder.text("amount", amount.to_string());
        }
        if let Some(order_id) = &self.order_id {
            builder = builder.text("orderId", order_id);
        }
        if let Some(customer_id) = &self.customer_id {
            builder = builder.text("customerId", customer_id);
        }
        if let Some(merchant_account_id) = &self.merchant_account_id {
            builder = builder.text("merchantAccountId", merchant_account_id);
        }
        if let Some(token) = &self.payment_method_token {
            builder = builder.text("paymentMethodToken", token);
        }
        if !self.custom_fields.is_empty() {
            let mut fields = RequestBuilder::new("customFields");
            // Sorted for a deterministic document.
            let mut entries: Vec<_> = self.custom_fields.iter().collect();
            entries.sort_by(|(ka, _), (kb, _)| ka.cmp(kb));
            for (key, value) in entries {
                fields = fields.text(key, value);
            }
            builder = builder.nested("customFields", fields);
        }
        if let Some(options) = &self.options {
            builder = builder.nested("options", options.build());
        }
        builder
    }
}

impl Request for TransactionRequest {
    fn to_xml(&self) -> String {
        self.build().to_xml()
    }
}

/// Options nested inside a [`TransactionRequest`].
#[derive(Debug, Clone, Default)]
pub struct TransactionOptionsRequest {
    submit_for_settlement: Option<bool>,
}

impl TransactionOptionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authorize and capture in one round trip instead of authorize-only.
    pub fn submit_for_settlement(mut self, submit: bool) -> Self {
        self.submit_for_settlement = Some(submit);
        self
    }

    fn build(&self) -> RequestBuilder {
        let mut builder = RequestBuilder::new("options");
        if let Some(submit) = self.submit_for_settlement {
            builder = builder.text("submitForSettlement", submit.to_string());
        }
        builder
    }
}
