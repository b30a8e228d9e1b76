//! Service Container - Wires every service from configuration.

use std::sync::Arc;

use super::{
    GreetingService, MessageBoard, QuoteProvider, QuoteService, RandomUserProvider,
    RandomUserService, UserManager, UserService,
};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::clients::build_http_client;
use crate::infra::{InMemoryUserRepository, QuoteClient, RandomUserClient};

/// Concrete set of application services
#[derive(Clone)]
pub struct Services {
    pub users: Arc<dyn UserService>,
    pub greetings: Arc<GreetingService>,
    pub messages: Arc<MessageBoard>,
    pub quotes: Arc<dyn QuoteService>,
    pub random_users: Arc<dyn RandomUserService>,
}

impl Services {
    /// Build services around a seeded user store and the configured upstream APIs
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let http = build_http_client()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        let repo = Arc::new(InMemoryUserRepository::seeded());
        tracing::info!(users = repo.len(), "User store seeded");

        Ok(Self {
            users: Arc::new(UserManager::new(repo)),
            greetings: Arc::new(GreetingService::new()),
            messages: Arc::new(MessageBoard::new()),
            quotes: Arc::new(QuoteProvider::new(QuoteClient::new(
                http.clone(),
                config.quote_api_url.clone(),
            ))),
            random_users: Arc::new(RandomUserProvider::new(RandomUserClient::new(
                http,
                config.random_user_api_url.clone(),
            ))),
        })
    }
}
