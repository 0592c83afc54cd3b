//! Error types for the VaultPay SDK

use thiserror::Error;

/// VaultPay SDK error type
#[derive(Error, Debug)]
pub enum Error {
    /// XML syntax error from the underlying reader
    #[error("XML syntax error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Structurally malformed gateway document
    #[error("malformed gateway document: {0}")]
    Document(String),

    /// A decimal field was present but its text is not a valid decimal
    #[error("invalid decimal in <{field}>: {value:?}")]
    InvalidDecimal { field: String, value: String },

    /// A timestamp field was present but its text is not a valid timestamp
    #[error("invalid timestamp in <{field}>: {value:?}")]
    InvalidTimestamp { field: String, value: String },

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for VaultPay SDK operations
pub type Result<T> = std::result::Result<T, Error>;
