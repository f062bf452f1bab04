//! Configuration for the portfolio ledger

use std::env;
use std::path::PathBuf;

/// Storage key the web client keeps portfolios under
pub const STORAGE_KEY: &str = "portfolios";

/// Default directory for the ledger file
pub const DEFAULT_STORAGE_DIR: &str = "./data";

/// Configuration for the portfolio ledger
#[derive(Debug, Clone)]
pub struct PortfolioServiceConfig {
    /// Directory holding the ledger file
    pub storage_dir: PathBuf,
}

impl Default for PortfolioServiceConfig {
    fn default() -> Self {
        Self {
            storage_dir: env::var("PORTFOLIO_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_DIR)),
        }
    }
}

impl PortfolioServiceConfig {
    /// Create a new configuration using environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create a new configuration with a custom directory
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
        }
    }

    /// Path of the ledger file, `<dir>/portfolios.json`
    pub fn storage_path(&self) -> PathBuf {
        self.storage_dir.join(format!("{}.json", STORAGE_KEY))
    }
}
