//! Quote service - Random quote from the third-party API.

use async_trait::async_trait;

use crate::domain::Quote;
use crate::errors::AppResult;
use crate::infra::QuoteClient;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Fetch one random quote
    async fn random_quote(&self) -> AppResult<Quote>;
}

/// QuoteService calling the upstream API on every request.
pub struct QuoteProvider {
    client: QuoteClient,
}

impl QuoteProvider {
    pub fn new(client: QuoteClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuoteService for QuoteProvider {
    async fn random_quote(&self) -> AppResult<Quote> {
        let quote = self.client.fetch().await.map_err(|e| {
            tracing::warn!(error = %e, "Quote API call failed");
            e
        })?;
        Ok(quote)
    }
}
