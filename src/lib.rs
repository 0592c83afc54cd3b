//! VaultPay Rust SDK
//!
//! A typed transport shim for the VaultPay payment gateway's XML API.
//! Model objects deserialize gateway responses into immutable records;
//! fluent request builders serialize caller intent into outbound
//! documents. All payment semantics (transaction states, validation,
//! authorization flows) live server-side — this crate only moves typed
//! data across the wire boundary. Sending requests and receiving
//! responses is the job of an external transport collaborator.
//!
//! # Example
//!
//! ```rust
//! use vaultpay::{ClientTokenRequest, ClientTokenOptionsRequest, Request, Transaction};
//!
//! // Outbound: build a client token request.
//! let xml = ClientTokenRequest::new()
//!     .customer_id("abc123")
//!     .options(ClientTokenOptionsRequest::new().verify_card(true))
//!     .to_xml();
//! assert!(xml.starts_with("<clientToken>"));
//!
//! // Inbound: map a gateway response document.
//! let txn = Transaction::from_xml(
//!     "<transaction><id>txn_1</id><status>settled</status></transaction>",
//! ).unwrap();
//! assert_eq!(txn.id.as_deref(), Some("txn_1"));
//! ```
//!
//! Unknown enum tokens from the gateway never fail a parse: they resolve
//! to the type's `Unrecognized` member so newer gateway releases cannot
//! crash older clients.

pub mod config;
pub mod error;
pub mod models;
pub mod requests;
pub mod xml;

pub use config::{Configuration, Environment};
pub use error::{Error, Result};
pub use models::{Address, CreditCard, Customer, Transaction, TransactionStatus, TransactionType};
pub use requests::{
    ClientTokenOptionsRequest, ClientTokenRequest, Request, TransactionOptionsRequest,
    TransactionRequest,
};
pub use xml::{RequestBuilder, XmlNode};
