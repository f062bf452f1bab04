//! Error types for the ETF gateway
//!
//! This module provides a unified error handling system for the gateway, the
//! vendor client and the portfolio ledger. It defines standard error types
//! that can be used across crate boundaries and provides consistent error
//! conversion.

use std::fmt::Display;
use thiserror::Error;

/// ETF gateway error type
#[derive(Debug, Error)]
pub enum Error {
    /// Vendor credentials are absent or still the placeholder value.
    ///
    /// This is a signal for mock substitution rather than a failure path.
    #[error("Vendor credentials are not provisioned")]
    ConfigurationUnprovisioned,

    /// The vendor's OAuth token exchange failed
    #[error("Token acquisition failed: {0}")]
    TokenAcquisition(String),

    /// The vendor price quote could not be fetched or decoded
    #[error("ETF price fetch failed: {0}")]
    PriceFetch(String),

    /// The vendor holdings lookup could not be fetched or decoded
    #[error("ETF holdings fetch failed: {0}")]
    HoldingsFetch(String),

    /// The vendor daily chart lookup could not be fetched or decoded
    #[error("ETF price history fetch failed: {0}")]
    HistoryFetch(String),

    /// The combined price and holdings lookup failed
    #[error("ETF info fetch failed: {0}")]
    CompositeFetch(String),

    /// Ticker does not match the six digit domestic format
    #[error("Invalid ticker format: {0}")]
    InvalidTicker(String),

    /// Generic validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error when a requested record cannot be found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Persistent storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::ConfigurationUnprovisioned => Error::ConfigurationUnprovisioned,
                Error::TokenAcquisition(msg) => Error::TokenAcquisition(format!("{}: {}", context, msg)),
                Error::PriceFetch(msg) => Error::PriceFetch(format!("{}: {}", context, msg)),
                Error::HoldingsFetch(msg) => Error::HoldingsFetch(format!("{}: {}", context, msg)),
                Error::HistoryFetch(msg) => Error::HistoryFetch(format!("{}: {}", context, msg)),
                Error::CompositeFetch(msg) => Error::CompositeFetch(format!("{}: {}", context, msg)),
                Error::InvalidTicker(msg) => Error::InvalidTicker(format!("{}: {}", context, msg)),
                Error::ValidationError(msg) => Error::ValidationError(format!("{}: {}", context, msg)),
                Error::NotFound(msg) => Error::NotFound(format!("{}: {}", context, msg)),
                Error::Storage(msg) => Error::Storage(format!("{}: {}", context, msg)),
                Error::Serialization(e) => Error::Serialization(e),
                Error::Internal(msg) => Error::Internal(format!("{}: {}", context, msg)),
            }
        })
    }
}

/// Trait for converting other error types to our Error type
pub trait IntoError {
    /// Convert to Error
    fn into_error(self, message: &str) -> Error;
}

impl<E: std::error::Error> IntoError for E {
    fn into_error(self, message: &str) -> Error {
        Error::Internal(format!("{}: {}", message, self))
    }
}

/// Convert string messages into an error
impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Internal(message)
    }
}

/// Convert static string references into an error
impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Internal(message.to_string())
    }
}
