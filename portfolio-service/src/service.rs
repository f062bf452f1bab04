//! Portfolio service implementation

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use common::error::{Error, ErrorExt, Result};
use common::model::portfolio::{Portfolio, PortfolioDraft};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::PortfolioServiceConfig;
use crate::repository::{InMemoryPortfolioRepository, JsonFilePortfolioRepository, PortfolioRepository};

/// Portfolio service for saving and browsing built portfolios
pub struct PortfolioService {
    /// Repository for the ledger
    repo: Arc<dyn PortfolioRepository>,
    /// Serializes load-modify-save cycles
    write_lock: Mutex<()>,
}

/// Repository Type
pub enum RepositoryType {
    /// In-memory repository
    InMemory,
    /// JSON file repository, at the given path or the configured one
    JsonFile(Option<PathBuf>),
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioService {
    /// Create a new portfolio service backed by memory
    pub fn new() -> Self {
        Self::from_repository(Arc::new(InMemoryPortfolioRepository::new()))
    }

    /// Create a new portfolio service with a specific repository type
    pub fn with_repository(repo_type: RepositoryType) -> Self {
        let repo: Arc<dyn PortfolioRepository> = match repo_type {
            RepositoryType::InMemory => Arc::new(InMemoryPortfolioRepository::new()),
            RepositoryType::JsonFile(Some(path)) => Arc::new(JsonFilePortfolioRepository::new(path)),
            RepositoryType::JsonFile(None) => Arc::new(JsonFilePortfolioRepository::with_config(
                &PortfolioServiceConfig::from_env(),
            )),
        };

        Self::from_repository(repo)
    }

    /// Create a new portfolio service with a configuration
    pub fn with_config(config: &PortfolioServiceConfig) -> Self {
        Self::from_repository(Arc::new(JsonFilePortfolioRepository::with_config(config)))
    }

    /// Create a new portfolio service around an existing repository
    pub fn from_repository(repo: Arc<dyn PortfolioRepository>) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    /// Validate `draft`, assign it an id and creation time, and append it to the ledger
    pub async fn create(&self, draft: PortfolioDraft) -> Result<Portfolio> {
        draft.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut portfolios = self.repo.load_all().await?;

        let portfolio = Portfolio {
            id: Uuid::new_v4().to_string(),
            draft,
            created_at: Utc::now(),
        };

        portfolios.push(portfolio.clone());
        self.repo
            .save_all(&portfolios)
            .await
            .with_context(|| format!("Failed to save portfolio {}", portfolio.id))?;

        info!("Created portfolio {} ({})", portfolio.id, portfolio.draft.name);
        Ok(portfolio)
    }

    /// Every saved portfolio, oldest first
    pub async fn list(&self) -> Result<Vec<Portfolio>> {
        self.repo.load_all().await
    }

    /// Portfolio by ID
    pub async fn get(&self, id: &str) -> Result<Option<Portfolio>> {
        let portfolio = self.repo.load_all().await?.into_iter().find(|p| p.id == id);
        if portfolio.is_none() {
            debug!("Portfolio {} not found", id);
        }
        Ok(portfolio)
    }

    /// Remove a portfolio, returning it
    pub async fn delete(&self, id: &str) -> Result<Portfolio> {
        let _guard = self.write_lock.lock().await;
        let mut portfolios = self.repo.load_all().await?;

        let Some(index) = portfolios.iter().position(|p| p.id == id) else {
            warn!("Cannot delete unknown portfolio {}", id);
            return Err(Error::NotFound(format!("Portfolio {}", id)));
        };

        let removed = portfolios.remove(index);
        self.repo.save_all(&portfolios).await?;

        info!("Deleted portfolio {}", id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use common::model::market::Market;
    use common::model::portfolio::{AllocationMode, InvestmentMethod, PortfolioAsset};
    use rust_decimal::Decimal;

    use super::*;

    fn draft(name: &str) -> PortfolioDraft {
        PortfolioDraft {
            name: name.to_string(),
            method: InvestmentMethod::LumpSum,
            total_seed: Some(Decimal::from(10_000_000)),
            dca_amount: None,
            dca_interval_days: None,
            dca_years: None,
            allocation_mode: AllocationMode::Ratio,
            assets: vec![
                PortfolioAsset {
                    market: Market::Domestic,
                    ticker: "069500".to_string(),
                    name: "KODEX 200".to_string(),
                    value: Decimal::from(60),
                },
                PortfolioAsset {
                    market: Market::Overseas,
                    ticker: "QQQ".to_string(),
                    name: "Invesco QQQ Trust".to_string(),
                    value: Decimal::from(40),
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let service = PortfolioService::new();

        let first = service.create(draft("Core")).await.unwrap();
        let second = service.create(draft("Core")).await.unwrap();

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_draft_is_not_stored() {
        let service = PortfolioService::new();
        let mut bad = draft("Skewed");
        bad.assets[1].value = Decimal::from(30);

        assert!(matches!(service.create(bad).await, Err(Error::ValidationError(_))));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let service = PortfolioService::new();
        assert!(matches!(service.delete("missing").await, Err(Error::NotFound(_))));
    }
}
