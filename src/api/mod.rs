//! API layer - HTTP handlers, views and routes
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers (JSON resources and HTML pages)
//! - Custom extractors
//! - HTML views
//! - Route definitions and OpenAPI document

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod views;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
