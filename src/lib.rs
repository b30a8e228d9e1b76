//! Web Service Basics - small HTTP service built on Axum.
//!
//! Bundles an in-memory user resource, a greeting counter, a
//! server-rendered message board and two consumers of third-party
//! REST APIs (random users and random quotes).
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core records exchanged over HTTP
//! - **services**: Use cases (mostly pass-through)
//! - **infra**: In-memory repository and outgoing HTTP clients
//! - **api**: HTTP handlers, views and routes
//! - **types**: Shared response helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Bind somewhere else with debug logging
//! cargo run -- -v serve --host 127.0.0.1 --port 9000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Greeting, Quote, RandomUser, User};
pub use errors::{AppError, AppResult};
