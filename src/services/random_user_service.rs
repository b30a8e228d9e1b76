//! Random user service - First result of the random user generator.

use async_trait::async_trait;

use crate::domain::RandomUser;
use crate::errors::AppResult;
use crate::infra::{ClientError, RandomUserClient};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RandomUserService: Send + Sync {
    /// Fetch one random user; an empty result list is an upstream error
    async fn random_user(&self) -> AppResult<RandomUser>;
}

/// RandomUserService calling the upstream API on every request.
pub struct RandomUserProvider {
    client: RandomUserClient,
}

impl RandomUserProvider {
    pub fn new(client: RandomUserClient) -> Self {
        Self { client }
    }

    async fn first_result(&self) -> Result<RandomUser, ClientError> {
        self.client
            .fetch()
            .await?
            .results
            .into_iter()
            .next()
            .ok_or(ClientError::EmptyResults)
    }
}

#[async_trait]
impl RandomUserService for RandomUserProvider {
    async fn random_user(&self) -> AppResult<RandomUser> {
        let user = self.first_result().await.map_err(|e| {
            tracing::warn!(error = %e, "Random user API call failed");
            e
        })?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn provider_for(body: serde_json::Value) -> (MockServer, RandomUserProvider) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = RandomUserClient::new(reqwest::Client::new(), server.uri());
        (server, RandomUserProvider::new(client))
    }

    #[tokio::test]
    async fn test_returns_first_result() {
        let (_server, service) = provider_for(serde_json::json!({
            "results": [{ "email": "first@example.com" }, { "email": "second@example.com" }]
        }))
        .await;

        let user = service.random_user().await.unwrap();

        assert_eq!(user.email, "first@example.com");
    }

    #[tokio::test]
    async fn test_empty_results_is_upstream_error() {
        let (_server, service) = provider_for(serde_json::json!({ "results": [] })).await;

        let err = service.random_user().await.unwrap_err();

        assert!(matches!(err, AppError::Upstream(ClientError::EmptyResults)));
    }

    #[tokio::test]
    async fn test_missing_results_is_upstream_error() {
        let (_server, service) = provider_for(serde_json::json!({ "error": "down" })).await;

        assert!(matches!(
            service.random_user().await,
            Err(AppError::Upstream(ClientError::EmptyResults))
        ));
    }
}
