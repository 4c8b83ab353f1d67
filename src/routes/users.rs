use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::entities::{User, UserId},
    middleware::CurrentUser,
    response::{ApiResult, JsonApiResponse},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user; the password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub is_chirpy_red: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_chirpy_red: user.upgraded,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", post(create_user).put(update_user))
        .with_state(state)
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CredentialsRequest>,
) -> ApiResult<UserResponse> {
    let user = state
        .services()
        .user()
        .create_user(&body.email, &body.password)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", user.into())
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<CredentialsRequest>,
) -> ApiResult<UserResponse> {
    let user = state
        .services()
        .user()
        .update_user(user_id, &body.email, &body.password)
        .await?;
    JsonApiResponse::ok(user.into())
}
