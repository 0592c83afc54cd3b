//! Gateway environment and merchant configuration.
//!
//! This crate does not talk to the network itself; the transport
//! collaborator reads these values to know where to send serialized
//! requests and which merchant they belong to.

use crate::error::{Error, Result};

/// Which gateway deployment to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    /// Resolve an environment by name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "sandbox" => Ok(Self::Sandbox),
            "production" => Ok(Self::Production),
            other => Err(Error::Config(format!("unknown environment: {other:?}"))),
        }
    }

    /// Gateway API base URL for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => "https://api.sandbox.vaultpay.example.com",
            Self::Production => "https://api.vaultpay.example.com",
        }
    }
}

/// Merchant-level configuration for the gateway.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub environment: Environment,
    pub merchant_id: String,
    pub public_key: String,
    pub private_key: String,
}

impl Configuration {
    pub fn new(
        environment: Environment,
        merchant_id: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            merchant_id: merchant_id.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Base path all of this merchant's resources live under.
    pub fn merchant_path(&self) -> String {
        format!("{}/merchants/{}", self.environment.base_url(), self.merchant_id)
    }
}
