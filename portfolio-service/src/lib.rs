//! Portfolio ledger
//!
//! Stores the portfolios built by the web client, either in memory or in a
//! JSON file that mirrors the browser's `portfolios` storage key.

pub mod service;
pub mod repository;
pub mod config;

pub use service::PortfolioService;
pub use service::RepositoryType;
pub use repository::{InMemoryPortfolioRepository, JsonFilePortfolioRepository, PortfolioRepository};
pub use config::PortfolioServiceConfig;
