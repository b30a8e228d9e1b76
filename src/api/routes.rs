//! Application route configuration.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    external_routes, greeting_routes, hello_routes, page_routes, user_routes,
};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{API_V0_PREFIX, USERS_RESOURCE};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Versioned JSON API
        .nest(
            API_V0_PREFIX,
            Router::new()
                .nest(USERS_RESOURCE, user_routes())
                .merge(external_routes()),
        )
        // Greeting resources and server-rendered pages
        .merge(greeting_routes())
        .merge(hello_routes())
        .merge(page_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to Web Service Basics"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Liveness probe; there are no backing services to check
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
