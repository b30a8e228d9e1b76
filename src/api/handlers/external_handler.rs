//! JSON pass-through of the third-party APIs.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::{Quote, RandomUser};
use crate::errors::AppResult;

/// Create external API routes (mounted under the API prefix)
pub fn external_routes() -> Router<AppState> {
    Router::new()
        .route("/quotes/random", get(random_quote))
        .route("/random-users", get(random_user))
}

/// Fetch a random quote
#[utoipa::path(
    get,
    path = "/api/v0/quotes/random",
    tag = "External",
    responses(
        (status = 200, description = "Random quote", body = Quote),
        (status = 502, description = "Quote API unavailable")
    )
)]
pub async fn random_quote(State(state): State<AppState>) -> AppResult<Json<Quote>> {
    Ok(Json(state.quote_service.random_quote().await?))
}

/// Fetch a random user
#[utoipa::path(
    get,
    path = "/api/v0/random-users",
    tag = "External",
    responses(
        (status = 200, description = "Random user", body = RandomUser),
        (status = 502, description = "Random user API unavailable")
    )
)]
pub async fn random_user(State(state): State<AppState>) -> AppResult<Json<RandomUser>> {
    Ok(Json(state.random_user_service.random_user().await?))
}
