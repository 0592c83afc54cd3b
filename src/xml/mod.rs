//! XML document handling: response mapping and request building.
//!
//! The gateway speaks an element-shaped XML dialect in both directions.
//! [`XmlNode`] is the read side: an owned tree with typed named-child
//! accessors that resource records are constructed from. [`RequestBuilder`]
//! is the write side: a sparse accumulator that serializes caller intent
//! into an outbound document. Neither performs I/O.

mod builder;
mod node;
mod parse;

pub use builder::RequestBuilder;
pub use node::XmlNode;
