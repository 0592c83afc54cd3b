//! Fluent request types serialized for the gateway.
//!
//! Each request accumulates caller intent through chained setters and
//! serializes it with [`RequestBuilder`](crate::xml::RequestBuilder).
//! Unset fields are never emitted.

mod client_token;
mod transaction;

pub use client_token::{ClientTokenOptionsRequest, ClientTokenRequest};
pub use transaction::{TransactionOptionsRequest, TransactionRequest};

/// An outbound gateway request. The transport collaborator consumes this
/// seam: it sends the serialized document and hands the response back to
/// the model constructors.
pub trait Request {
    /// Serialize the request as an XML document.
    fn to_xml(&self) -> String;
}
