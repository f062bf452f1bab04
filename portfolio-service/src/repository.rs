//! Repository for portfolio data
//!
//! The ledger is read and written as a whole, the same way the web client
//! treats its storage key: load the array, change it, store it back.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use common::error::{Error, Result};
use common::model::portfolio::Portfolio;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::PortfolioServiceConfig;

/// Portfolio repository trait defining the interface for ledger storage
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Every stored portfolio, in insertion order
    async fn load_all(&self) -> Result<Vec<Portfolio>>;

    /// Replace the stored ledger
    async fn save_all(&self, portfolios: &[Portfolio]) -> Result<()>;
}

/// In-memory repository for portfolio data
#[derive(Default)]
pub struct InMemoryPortfolioRepository {
    portfolios: RwLock<Vec<Portfolio>>,
}

impl InMemoryPortfolioRepository {
    /// Create a new in-memory portfolio repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioRepository {
    async fn load_all(&self) -> Result<Vec<Portfolio>> {
        Ok(self.portfolios.read().await.clone())
    }

    async fn save_all(&self, portfolios: &[Portfolio]) -> Result<()> {
        *self.portfolios.write().await = portfolios.to_vec();
        Ok(())
    }
}

/// Repository keeping the ledger as a JSON array in a single file
pub struct JsonFilePortfolioRepository {
    path: PathBuf,
}

impl JsonFilePortfolioRepository {
    /// Create a repository backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a repository backed by the configured ledger file
    pub fn with_config(config: &PortfolioServiceConfig) -> Self {
        Self::new(config.storage_path())
    }

    /// Ledger file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl PortfolioRepository for JsonFilePortfolioRepository {
    async fn load_all(&self) -> Result<Vec<Portfolio>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No ledger at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(Error::Storage(format!("Failed to read {}: {}", self.path.display(), e)));
            }
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_slice(&raw)?)
    }

    async fn save_all(&self, portfolios: &[Portfolio]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| Error::Storage(format!("Failed to create {}: {}", dir.display(), e)))?;
        }

        let body = serde_json::to_vec_pretty(portfolios)?;
        let temp = self.temp_path();

        // Readers never observe a partially written ledger
        fs::write(&temp, body)
            .await
            .map_err(|e| Error::Storage(format!("Failed to write {}: {}", temp.display(), e)))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| Error::Storage(format!("Failed to replace {}: {}", self.path.display(), e)))?;

        info!("Saved {} portfolios to {}", portfolios.len(), self.path.display());
        Ok(())
    }
}
