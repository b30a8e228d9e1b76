//! User resource handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::{Created, NoContent};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/v0/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.find_all().await)
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v0/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = state.user_service.find_by_id(id).await.ok_or_not_found()?;
    Ok(Json(user))
}

/// Create or replace a user (the id comes from the body)
#[utoipa::path(
    post,
    path = "/api/v0/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User stored", body = User),
        (status = 400, description = "Body is not a user")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<User>,
) -> Created<User> {
    Created(state.user_service.save(payload).await)
}

/// Delete user by ID
///
/// Answers 204 when the store reports `true` from `delete_by_id`, which
/// happens when no user had this id; 404 otherwise.
#[utoipa::path(
    delete,
    path = "/api/v0/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Store reported the id as absent"),
        (status = 404, description = "Store removed at least one user")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    if state.user_service.delete_by_id(id).await {
        Ok(NoContent)
    } else {
        Err(AppError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        GreetingService, MessageBoard, MockQuoteService, MockRandomUserService, MockUserService,
        Services,
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mockall::predicate::eq;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(users: MockUserService) -> Router {
        let services = Services {
            users: Arc::new(users),
            greetings: Arc::new(GreetingService::new()),
            messages: Arc::new(MessageBoard::new()),
            quotes: Arc::new(MockQuoteService::new()),
            random_users: Arc::new(MockRandomUserService::new()),
        };
        Router::new()
            .nest("/api/v0/users", user_routes())
            .with_state(AppState::new(services, "Welcome"))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Body) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_get_missing_user_is_404() {
        let mut users = MockUserService::new();
        users.expect_find_by_id().with(eq(7)).returning(|_| None);

        let (status, _) = send(app(users), "GET", "/api/v0/users/7", Body::empty()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_maps_true_to_204() {
        let mut users = MockUserService::new();
        users.expect_delete_by_id().with(eq(99)).returning(|_| true);

        let (status, body) = send(app(users), "DELETE", "/api/v0/users/99", Body::empty()).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_delete_maps_false_to_404() {
        let mut users = MockUserService::new();
        users.expect_delete_by_id().with(eq(1)).returning(|_| false);

        let (status, _) = send(app(users), "DELETE", "/api/v0/users/1", Body::empty()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_forwards_body() {
        let user = User::new(4, "user4@exemple.com", "User Four", "password4");

        let mut users = MockUserService::new();
        users
            .expect_save()
            .with(eq(user.clone()))
            .times(1)
            .returning(|u| u);

        let body = Body::from(serde_json::to_vec(&user).unwrap());
        let (status, bytes) = send(app(users), "POST", "/api/v0/users", body).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(serde_json::from_slice::<User>(&bytes).unwrap(), user);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_id() {
        let users = MockUserService::new();
        let body = Body::from(r#"{"email":"a@b.c","name":"A","password":"pw"}"#);

        let (status, bytes) = send(app(users), "POST", "/api/v0/users", body).await;
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }
}
