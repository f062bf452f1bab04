//! Access token cache
//!
//! The vendor issues bearer tokens through a client-credentials exchange.
//! Tokens are kept for a fixed 23 hours from issuance and reused until then.
//! The slot is guarded by an async mutex that stays locked across the
//! exchange, so concurrent callers that find the slot empty wait for the one
//! in-flight exchange instead of starting their own.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use common::error::Result;
use tokio::sync::Mutex;

use crate::clock::Clock;

/// Lifetime granted to every issued token
pub fn token_lifetime() -> Duration {
    Duration::hours(23)
}

/// Bearer token with its expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Token value
    pub value: String,
    /// Instant after which the token must be refreshed
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Token issued at `issued_at`
    pub fn issued_at(value: String, issued_at: DateTime<Utc>) -> Self {
        Self {
            value,
            expires_at: issued_at + token_lifetime(),
        }
    }

    /// Whether the token can still be used at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Owned, injectable cache for the single vendor token
pub struct TokenCache {
    slot: Mutex<Option<AccessToken>>,
    clock: Arc<dyn Clock>,
}

impl TokenCache {
    /// Create an empty cache driven by `clock`
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: Mutex::new(None),
            clock,
        }
    }

    /// Return the cached token, or run `issue` to obtain and cache a new one
    pub async fn get_or_refresh<F, Fut>(&self, issue: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(token) = slot.as_ref().filter(|t| t.is_valid_at(self.clock.now())) {
            return Ok(token.value.clone());
        }

        let value = issue().await?;
        let token = AccessToken::issued_at(value, self.clock.now());
        let value = token.value.clone();
        *slot = Some(token);
        Ok(value)
    }

    /// Currently cached token, valid or not
    pub async fn cached(&self) -> Option<AccessToken> {
        self.slot.lock().await.clone()
    }
}
