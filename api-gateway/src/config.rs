//! Application configuration

use std::env;

use market_data::VendorConfig;

/// Port the original deployment listens on
pub const DEFAULT_PORT: u16 = 3001;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API port
    pub port: u16,
    /// Vendor client configuration
    pub vendor: VendorConfig,
}

impl AppConfig {
    /// Create a new configuration from environment variables
    pub fn new() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            vendor: VendorConfig::from_env(),
        }
    }

    /// Listening address on all interfaces
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
