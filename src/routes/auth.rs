use std::sync::Arc;

use axum::{Json, Router, extract::State, http::HeaderMap, routing::post};
use serde::Serialize;

use crate::{
    auth::TokenBundle,
    db::entities::User,
    response::{ApiResult, JsonApiResponse},
    routes::users::{CredentialsRequest, UserResponse},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub token: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/revoke", post(revoke))
        .with_state(state)
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CredentialsRequest>,
) -> ApiResult<LoginResponse> {
    let (user, tokens) = state
        .services()
        .auth()
        .login(&body.email, &body.password)
        .await?;
    JsonApiResponse::ok(LoginResponse::new(user, tokens))
}

async fn refresh(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<RefreshResponse> {
    let token = state.services().auth().refresh(&headers).await?;
    JsonApiResponse::ok(RefreshResponse { token })
}

async fn revoke(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<()> {
    state.services().auth().revoke(&headers).await?;
    JsonApiResponse::ok(())
}

impl LoginResponse {
    fn new(user: User, tokens: TokenBundle) -> Self {
        Self {
            user: user.into(),
            token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}
