//! Market data for the ETF gateway
//!
//! Vendor (KIS) client with an injectable token cache, the ETF service that
//! applies the mock-data fallback, and the built-in search and featured
//! catalogue.

mod service;
mod models;
mod client;
pub mod catalogue;
pub mod clock;
pub mod config;
pub mod mock;
pub mod token;

pub use service::{EtfService, FallbackPolicy};
pub use client::{KisClient, MOCK_ACCESS_TOKEN, PRICE_TR_ID, HOLDINGS_TR_ID, HISTORY_TR_ID};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{VendorConfig, VendorCredentials};
pub use token::{AccessToken, TokenCache};
