//! Client for the random user generator API.

use reqwest::Client;

use super::{get_json, ClientError};
use crate::domain::RandomUserEnvelope;

/// Fetches the random user envelope.
#[derive(Debug, Clone)]
pub struct RandomUserClient {
    http: Client,
    url: String,
}

impl RandomUserClient {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Raw envelope; picking a result is left to the service
    pub async fn fetch(&self) -> Result<RandomUserEnvelope, ClientError> {
        get_json(&self.http, &self.url).await
    }
}
