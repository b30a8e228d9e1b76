//! Client for the random quote API.

use reqwest::Client;

use super::{get_json, ClientError};
use crate::domain::Quote;

/// Fetches one random quote per call.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: Client,
    url: String,
}

impl QuoteClient {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub async fn fetch(&self) -> Result<Quote, ClientError> {
        get_json(&self.http, &self.url).await
    }
}
