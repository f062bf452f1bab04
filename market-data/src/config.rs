//! Vendor API configuration

use std::env;
use std::time::Duration;

/// App key value shipped in sample `.env` files
pub const PLACEHOLDER_APP_KEY: &str = "your_app_key_here";

/// Live trading base URL
pub const DEFAULT_BASE_URL: &str = "https://openapi.koreainvestment.com:9443";

/// Sandbox (mock trading) base URL
pub const DEFAULT_MOCK_BASE_URL: &str = "https://openapivts.koreainvestment.com:29443";

/// Default timeout for vendor calls
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Vendor credentials, loaded once at startup
#[derive(Debug, Clone)]
pub struct VendorCredentials {
    /// Application key
    pub app_key: String,
    /// Application secret
    pub app_secret: String,
    /// Brokerage account number
    pub account_no: String,
    /// Base URL for the selected mode
    pub base_url: String,
}

impl VendorCredentials {
    /// Create credentials with explicit values
    pub fn new(app_key: &str, app_secret: &str, account_no: &str, base_url: &str) -> Self {
        Self {
            app_key: app_key.to_string(),
            app_secret: app_secret.to_string(),
            account_no: account_no.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Credentials that have not been provisioned; every lookup is served from mock data
    pub fn unprovisioned() -> Self {
        Self::new("", "", "", DEFAULT_BASE_URL)
    }

    /// Whether a real app key has been configured
    pub fn is_provisioned(&self) -> bool {
        !self.app_key.is_empty() && self.app_key != PLACEHOLDER_APP_KEY
    }
}

/// Configuration for the vendor client
#[derive(Debug, Clone)]
pub struct VendorConfig {
    /// Credentials and base URL
    pub credentials: VendorCredentials,
    /// Whether the sandbox base URL was selected
    pub mock_mode: bool,
    /// Timeout applied to every vendor call
    pub timeout: Duration,
}

impl Default for VendorConfig {
    fn default() -> Self {
        let mock_mode = env::var("KIS_MOCK_MODE")
            .map(|v| v == "true")
            .unwrap_or(false);

        let base_url = if mock_mode {
            env::var("KIS_MOCK_BASE_URL").unwrap_or_else(|_| DEFAULT_MOCK_BASE_URL.to_string())
        } else {
            env::var("KIS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
        };

        let credentials = VendorCredentials::new(
            &env::var("KIS_APP_KEY").unwrap_or_default(),
            &env::var("KIS_APP_SECRET").unwrap_or_default(),
            &env::var("KIS_ACCOUNT_NO").unwrap_or_default(),
            &base_url,
        );

        Self {
            credentials,
            mock_mode,
            timeout: Duration::from_secs(
                env::var("KIS_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }
}

impl VendorConfig {
    /// Create a new configuration using environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create a live-mode configuration with the given credentials
    pub fn new(credentials: VendorCredentials) -> Self {
        Self {
            credentials,
            mock_mode: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Human readable trading mode
    pub fn mode_label(&self) -> &'static str {
        if self.mock_mode {
            "sandbox"
        } else {
            "live"
        }
    }
}
