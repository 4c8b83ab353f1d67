use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;

use crate::{
    db::entities::UserId,
    middleware::PolkaWebhookKey,
    response::{ApiResult, JsonApiResponse},
    state::AppState,
};

pub const USER_UPGRADED: &str = "user.upgraded";

#[derive(Debug, Deserialize)]
pub struct PolkaEvent {
    pub event: String,
    pub data: PolkaEventData,
}

#[derive(Debug, Deserialize)]
pub struct PolkaEventData {
    pub user_id: UserId,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/polka/webhooks", post(polka_webhook))
        .with_state(state)
}

/// Only `user.upgraded` has an effect; other events are acknowledged so the
/// provider stops retrying them.
async fn polka_webhook(
    State(state): State<Arc<AppState>>,
    _key: PolkaWebhookKey,
    Json(payload): Json<PolkaEvent>,
) -> ApiResult<()> {
    if payload.event != USER_UPGRADED {
        tracing::debug!(event = %payload.event, "ignoring webhook event");
        return JsonApiResponse::ok(());
    }

    state
        .services()
        .user()
        .upgrade_user(payload.data.user_id)
        .await?;
    JsonApiResponse::ok(())
}
