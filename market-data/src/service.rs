//! ETF data service
//!
//! Combines the vendor client with the mock tables. Price lookups surface
//! vendor failures; holdings and price history lookups degrade to mock data
//! unless the service was built with [`FallbackPolicy::Propagate`].

use std::sync::Arc;

use common::error::{Error, Result};
use chrono::Duration;
use common::model::etf::{EtfHoldingsSnapshot, EtfInfo, EtfPriceSnapshot};
use common::model::fees::EtfFeesDividend;
use common::model::history::{lookback_days, EtfPriceHistory};
use tracing::{debug, error, warn};

use crate::client::{KisClient, CHART_DATE_FORMAT};
use crate::clock::{Clock, SystemClock};
use crate::config::VendorConfig;
use crate::mock::{mock_fees_dividend, mock_holdings, mock_price, mock_price_history};
use crate::token::TokenCache;

/// What a holdings or price history lookup does when the vendor call fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Log the failure and answer with mock data
    #[default]
    DegradeToMockOnFailure,
    /// Return the failure to the caller
    Propagate,
}

/// ETF price and holdings lookups
pub struct EtfService {
    client: KisClient,
    clock: Arc<dyn Clock>,
    fallback: FallbackPolicy,
}

impl EtfService {
    /// Create a new service on the wall clock
    pub fn new(config: VendorConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a new service whose token expiry and timestamps follow `clock`
    pub fn with_clock(config: VendorConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let client = KisClient::new(config, TokenCache::new(clock.clone()))?;
        Ok(Self::from_client(client, clock))
    }

    /// Create a new service around an existing client
    pub fn from_client(client: KisClient, clock: Arc<dyn Clock>) -> Self {
        Self {
            client,
            clock,
            fallback: FallbackPolicy::default(),
        }
    }

    /// Replace the fallback policy
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Underlying vendor client
    pub fn client(&self) -> &KisClient {
        &self.client
    }

    /// Fallback policy in effect
    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Valid vendor access token
    pub async fn access_token(&self) -> Result<String> {
        self.client.access_token().await
    }

    /// Current quote for `ticker`
    pub async fn etf_price(&self, ticker: &str) -> Result<EtfPriceSnapshot> {
        if !self.client.is_provisioned() {
            debug!("Serving mock price for {}", ticker);
            return Ok(mock_price(ticker, self.clock.now()));
        }

        match self.client.price_output(ticker).await {
            Ok(output) => Ok(output.into_snapshot(ticker, self.clock.now())),
            Err(e) => {
                error!("ETF price lookup failed for {}: {}", ticker, e);
                Err(Error::PriceFetch(e.to_string()))
            }
        }
    }

    /// Composition of `ticker`
    pub async fn etf_holdings(&self, ticker: &str) -> Result<EtfHoldingsSnapshot> {
        let today = self.clock.now().date_naive();

        if !self.client.is_provisioned() {
            debug!("Serving mock holdings for {}", ticker);
            return Ok(mock_holdings(ticker, today));
        }

        let failure = match self.client.holdings_output(ticker).await {
            Ok(output) => return Ok(output.into_snapshot(ticker, today)),
            Err(e) => Error::HoldingsFetch(e.to_string()),
        };

        match self.fallback {
            FallbackPolicy::DegradeToMockOnFailure => {
                warn!("{} for {}, serving mock holdings", failure, ticker);
                Ok(mock_holdings(ticker, today))
            }
            FallbackPolicy::Propagate => Err(failure),
        }
    }

    /// Daily candles of `ticker` over `period` (`1m`, `3m`, `6m` or `1y`), ending today
    pub async fn etf_price_history(&self, ticker: &str, period: &str) -> Result<EtfPriceHistory> {
        let today = self.clock.now().date_naive();

        if !self.client.is_provisioned() {
            debug!("Serving mock price history for {} ({})", ticker, period);
            return Ok(mock_price_history(ticker, period, today));
        }

        let start = (today - Duration::days(lookback_days(period))).format(CHART_DATE_FORMAT).to_string();
        let end = today.format(CHART_DATE_FORMAT).to_string();

        let failure = match self.client.history_output(ticker, &start, &end).await {
            Ok(output) => {
                let history = output.into_history(ticker, period);
                debug!("{} daily candles for {}", history.price_history.len(), ticker);
                return Ok(history);
            }
            Err(e) => Error::HistoryFetch(e.to_string()),
        };

        match self.fallback {
            FallbackPolicy::DegradeToMockOnFailure => {
                warn!("{} for {}, serving mock price history", failure, ticker);
                Ok(mock_price_history(ticker, period, today))
            }
            FallbackPolicy::Propagate => Err(failure),
        }
    }

    /// Fee, dividend and performance figures for `ticker`
    pub fn etf_fees_dividend(&self, ticker: &str) -> EtfFeesDividend {
        mock_fees_dividend(ticker)
    }

    /// Quote merged with composition; both lookups run concurrently
    pub async fn etf_info(&self, ticker: &str) -> Result<EtfInfo> {
        let (price, holdings) = tokio::join!(self.etf_price(ticker), self.etf_holdings(ticker));

        match (price, holdings) {
            (Ok(price), Ok(holdings)) => Ok(EtfInfo::merge(price, holdings)),
            (Err(e), _) | (_, Err(e)) => {
                error!("ETF info lookup failed for {}: {}", ticker, e);
                Err(Error::CompositeFetch(e.to_string()))
            }
        }
    }
}
