//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_QUOTE_API_URL, DEFAULT_RANDOM_USER_API_URL, DEFAULT_WELCOME_TEXT};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint queried for a random quote
    pub quote_api_url: String,
    /// Endpoint queried for a random user
    pub random_user_api_url: String,
    /// Heading of the greeting message board
    pub welcome_text: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            quote_api_url: env::var("QUOTE_API_URL")
                .unwrap_or_else(|_| DEFAULT_QUOTE_API_URL.to_string()),
            random_user_api_url: env::var("RANDOM_USER_API_URL")
                .unwrap_or_else(|_| DEFAULT_RANDOM_USER_API_URL.to_string()),
            welcome_text: env::var("WELCOME_TEXT")
                .unwrap_or_else(|_| DEFAULT_WELCOME_TEXT.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quote_api_url: DEFAULT_QUOTE_API_URL.to_string(),
            random_user_api_url: DEFAULT_RANDOM_USER_API_URL.to_string(),
            welcome_text: DEFAULT_WELCOME_TEXT.to_string(),
        }
    }
}
