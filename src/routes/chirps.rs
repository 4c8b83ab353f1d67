use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use crate::{
    db::{
        dao::SortOrder,
        entities::{Chirp, ChirpId, UserId},
    },
    middleware::CurrentUser,
    response::{ApiResult, JsonApiResponse},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListChirpsQuery {
    pub author_id: Option<UserId>,
    pub sort: Option<SortOrder>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chirps", get(list_chirps).post(create_chirp))
        .route("/chirps/{id}", get(get_chirp).delete(delete_chirp))
        .with_state(state)
}

async fn create_chirp(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<CreateChirpRequest>,
) -> ApiResult<Chirp> {
    let chirp = state
        .services()
        .chirp()
        .create_chirp(&body.body, user_id)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", chirp)
}

async fn list_chirps(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListChirpsQuery>,
) -> ApiResult<Vec<Chirp>> {
    let chirps = state
        .services()
        .chirp()
        .list_chirps(query.author_id, query.sort.unwrap_or_default())
        .await?;
    JsonApiResponse::ok(chirps)
}

async fn get_chirp(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ChirpId>,
) -> ApiResult<Chirp> {
    let chirp = state.services().chirp().get_chirp(id).await?;
    JsonApiResponse::ok(chirp)
}

async fn delete_chirp(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<ChirpId>,
) -> ApiResult<()> {
    state.services().chirp().delete_chirp(id, user_id).await?;
    JsonApiResponse::ok(())
}
