//! Hello resource handlers.

use axum::{response::Json, routing::get, Router};

use crate::api::extractors::NameQuery;
use crate::api::AppState;
use crate::domain::Hello;

/// Create hello routes
pub fn hello_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello))
        .route("/hello/bye", get(bye))
        .route("/hello/test", get(test))
}

/// Echo the name back as JSON
#[utoipa::path(
    get,
    path = "/hello",
    tag = "Greetings",
    params(NameQuery),
    responses(
        (status = 200, description = "Echoed name", body = Hello)
    )
)]
pub async fn hello(query: NameQuery) -> Json<Hello> {
    Json(Hello {
        name: query.name_or_default(),
    })
}

/// Farewell as plain text
#[utoipa::path(
    get,
    path = "/hello/bye",
    tag = "Greetings",
    params(NameQuery),
    responses(
        (status = 200, description = "Farewell text", body = String)
    )
)]
pub async fn bye(query: NameQuery) -> String {
    format!("Adeu {}!", query.name_or_default())
}

pub async fn test() -> &'static str {
    "Hello Test!!"
}
