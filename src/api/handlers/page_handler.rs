//! Server-rendered pages backed by the third-party APIs.
//!
//! Any failure renders the generic error page; the cause is only logged.
//! The user page answers the error page with 200, the quote page with 502.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::api::{views, AppState};
use crate::errors::AppResult;

/// Create page routes
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(user_page))
        .route("/quote", get(quote_page))
        .route("/test", get(test_page))
}

/// Render `result` with `view`, or the error page with `failure` status
fn render<T>(
    result: AppResult<T>,
    view: impl FnOnce(&T) -> String,
    failure: StatusCode,
) -> Response {
    match result {
        Ok(value) => Html(view(&value)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, %failure, "Rendering error page");
            (failure, Html(views::error_page())).into_response()
        }
    }
}

pub async fn user_page(State(state): State<AppState>) -> Response {
    render(
        state.random_user_service.random_user().await,
        views::user_page,
        StatusCode::OK,
    )
}

pub async fn quote_page(State(state): State<AppState>) -> Response {
    render(
        state.quote_service.random_quote().await,
        views::quote_page,
        StatusCode::BAD_GATEWAY,
    )
}

pub async fn test_page() -> Html<String> {
    Html(views::test_page())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Quote, RandomUser};
    use crate::errors::AppError;
    use crate::infra::ClientError;
    use crate::services::{
        GreetingService, MessageBoard, MockQuoteService, MockRandomUserService, MockUserService,
        Services,
    };
    use axum::{body::Body, http::Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(quotes: MockQuoteService, random_users: MockRandomUserService) -> Router {
        let services = Services {
            users: Arc::new(MockUserService::new()),
            greetings: Arc::new(GreetingService::new()),
            messages: Arc::new(MessageBoard::new()),
            quotes: Arc::new(quotes),
            random_users: Arc::new(random_users),
        };
        page_routes().with_state(AppState::new(services, "Welcome"))
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_quote_page_renders_quote() {
        let mut quotes = MockQuoteService::new();
        quotes.expect_random_quote().returning(|| {
            Ok(Quote {
                value: "Chuck counted to infinity".into(),
                ..Default::default()
            })
        });

        let (status, html) = fetch(app(quotes, MockRandomUserService::new()), "/quote").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Chuck counted to infinity"));
    }

    #[tokio::test]
    async fn test_user_page_failure_renders_error_page() {
        let mut random_users = MockRandomUserService::new();
        random_users
            .expect_random_user()
            .returning(|| Err(AppError::from(ClientError::EmptyResults)));

        let (status, html) = fetch(app(MockQuoteService::new(), random_users), "/user").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(html, views::error_page());
    }

    #[tokio::test]
    async fn test_quote_page_failure_renders_error_page_as_bad_gateway() {
        let mut quotes = MockQuoteService::new();
        quotes
            .expect_random_quote()
            .returning(|| Err(AppError::from(ClientError::Status(503))));

        let (status, html) = fetch(app(quotes, MockRandomUserService::new()), "/quote").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(html, views::error_page());
    }

    #[tokio::test]
    async fn test_user_page_renders_user() {
        let mut random_users = MockRandomUserService::new();
        random_users.expect_random_user().returning(|| {
            Ok(RandomUser {
                email: "jennie.nichols@example.com".into(),
                ..Default::default()
            })
        });

        let (status, html) = fetch(app(MockQuoteService::new(), random_users), "/user").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("jennie.nichols@example.com"));
    }

    #[tokio::test]
    async fn test_static_test_page() {
        let (status, html) = fetch(
            app(MockQuoteService::new(), MockRandomUserService::new()),
            "/test",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Test page"));
    }
}
