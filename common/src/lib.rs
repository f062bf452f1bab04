//! Common types and utilities for the ETF gateway
//!
//! This library contains the shared domain model (price and holdings
//! snapshots, portfolios), the error taxonomy used across service
//! boundaries, ticker validation and the lenient numeric coercion applied
//! to vendor payloads.

pub mod error;
pub mod model;
pub mod decimal;
pub mod ticker;

/// Re-export important types
pub use error::{Error, Result, ErrorExt, IntoError};
pub use decimal::*;
pub use ticker::Ticker;

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
