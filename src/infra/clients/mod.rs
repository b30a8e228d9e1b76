//! HTTP clients for third-party REST APIs.
//!
//! Each client issues a single GET with no query parameters, no
//! authentication and no retry.

mod error;
mod quote_client;
mod random_user_client;

pub use error::ClientError;
pub use quote_client::QuoteClient;
pub use random_user_client::RandomUserClient;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Build the shared HTTP client used by every upstream call.
pub fn build_http_client() -> Result<Client, ClientError> {
    Client::builder()
        .user_agent(format!("webservice-basics/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ClientError::Request)
}

/// GET `url` and decode the JSON body.
async fn get_json<T: DeserializeOwned>(http: &Client, url: &str) -> Result<T, ClientError> {
    debug!(url = %url, "Calling upstream API");

    let response = http.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}
