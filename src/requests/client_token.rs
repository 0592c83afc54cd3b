//! Client token requests: short-lived credentials that let end-user
//! devices talk to the gateway directly on the merchant's behalf.

use crate::requests::Request;
use crate::xml::RequestBuilder;

/// Builds a `clientToken` request.
#[derive(Debug, Clone, Default)]
pub struct ClientTokenRequest {
    customer_id: Option<String>,
    version: Option<u32>,
    options: Option<ClientTokenOptionsRequest>,
}

impl ClientTokenRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope the token to an existing vaulted customer.
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Pin the client token format version.
    pub fn version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn options(mut self, options: ClientTokenOptionsRequest) -> Self {
        self.options = Some(options);
        self
    }

    fn build(&self) -> RequestBuilder {
        let mut builder = RequestBuilder::new("clientToken");
        if let Some(customer_id) = &self.customer_id {
            builder = builder.text("customerId", customer_id);
        }
        if let Some(version) = self.version {
            builder = builder.text("version", version.to_string());
        }
        if let Some(options) = &self.options {
            builder = builder.nested("options", options.build());
        }
        builder
    }
}

impl Request for ClientTokenRequest {
    fn to_xml(&self) -> String {
        self.build().to_xml()
    }
}

/// Options nested inside a [`ClientTokenRequest`]. Only meaningful when the
/// token is scoped to a customer.
#[derive(Debug, Clone, Default)]
pub struct ClientTokenOptionsRequest {
    make_default: Option<bool>,
    verify_card: Option<bool>,
    fail_on_duplicate_payment_method: Option<bool>,
}

impl ClientTokenOptionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a payment method added with this token the customer's default.
    pub fn make_default(mut self, make_default: bool) -> Self {
        self.make_default = Some(make_default);
        self
    }

    /// Verify cards added with this token before vaulting them.
    pub fn verify_card(mut self, verify_card: bool) -> Self {
        self.verify_card = Some(verify_card);
        self
    }

    /// Reject payment methods the customer has already vaulted.
    pub fn fail_on_duplicate_payment_method(mut self, fail: bool) -> Self {
        self.fail_on_duplicate_payment_method = Some(fail);
        self
    }

    fn build(&self) -> RequestBuilder {
        let mut builder = RequestBuilder::new("options");
        if let Some(make_default) = self.make_default {
            builder = builder.text("makeDefault", make_default.to_string());
        }
        if let Some(verify_card) = self.verify_card {
            builder = builder.text("verifyCard", verify_card.to_string());
        }
        if let Some(fail) = self.fail_on_duplicate_payment_method {
            builder = builder.text("failOnDuplicatePaymentMethod", fail.to_string());
        }
        builder
    }
}
