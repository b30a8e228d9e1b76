//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{
    GreetingService, MessageBoard, QuoteService, RandomUserService, Services, UserService,
};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// User store facade
    pub user_service: Arc<dyn UserService>,
    /// Greeting counter
    pub greeting_service: Arc<GreetingService>,
    /// Words shown on the greeting page
    pub message_board: Arc<MessageBoard>,
    /// Random quote API
    pub quote_service: Arc<dyn QuoteService>,
    /// Random user API
    pub random_user_service: Arc<dyn RandomUserService>,
    /// Heading of the greeting page
    pub welcome_text: Arc<str>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// The user store starts with the seed users.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let services = Services::from_config(config)?;
        Ok(Self::new(services, config.welcome_text.clone()))
    }

    /// Create application state with manually injected services.
    pub fn new(services: Services, welcome_text: impl Into<String>) -> Self {
        Self {
            user_service: services.users,
            greeting_service: services.greetings,
            message_board: services.messages,
            quote_service: services.quotes,
            random_user_service: services.random_users,
            welcome_text: Arc::from(welcome_text.into()),
        }
    }
}
