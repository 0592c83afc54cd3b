//! Typed resource records deserialized from gateway responses.
//!
//! Each record is an immutable value object built by a `from_node`
//! constructor over the [`XmlNode`](crate::xml::XmlNode) accessor contract.
//! Records share no base type; nested resources are owned by value and a
//! fresh object is produced per parse.

mod address;
mod credit_card;
mod customer;
mod transaction;

pub use address::Address;
pub use credit_card::CreditCard;
pub use customer::Customer;
pub use transaction::{Transaction, TransactionStatus, TransactionType};
