//! Greeting handlers: numbered JSON greeting and the message board page.

use axum::{
    extract::State,
    response::{Html, Json},
    routing::get,
    Router,
};

use crate::api::extractors::NameQuery;
use crate::api::{views, AppState};
use crate::domain::Greeting;

/// Create greeting routes
pub fn greeting_routes() -> Router<AppState> {
    Router::new()
        .route("/greeting", get(greeting))
        .route("/greetings", get(greetings_page))
}

/// Greet by name with an increasing id
#[utoipa::path(
    get,
    path = "/greeting",
    tag = "Greetings",
    params(NameQuery),
    responses(
        (status = 200, description = "Numbered greeting", body = Greeting)
    )
)]
pub async fn greeting(State(state): State<AppState>, query: NameQuery) -> Json<Greeting> {
    Json(state.greeting_service.greet(&query.name_or_default()))
}

/// Store the name on the message board and render every stored name
pub async fn greetings_page(State(state): State<AppState>, query: NameQuery) -> Html<String> {
    let name = query.name_or_default();
    tracing::debug!(%name, "Adding word to message board");

    state.message_board.add_word(name);
    Html(views::greetings_page(
        &state.welcome_text,
        &state.message_board.all_messages(),
    ))
}
