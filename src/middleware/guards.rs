use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    auth::header::check_api_key, db::entities::UserId, error::AppError, state::AppState,
};

/// The user behind a valid bearer access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>().copied() {
            return Ok(user);
        }

        let user_id = state.tokens.parse_user_id(&parts.headers)?;
        let user = CurrentUser(user_id);
        parts.extensions.insert(user);
        Ok(user)
    }
}

/// Passes only requests carrying the payment provider's `ApiKey`.
#[derive(Debug, Clone, Copy)]
pub struct PolkaWebhookKey;

impl FromRequestParts<Arc<AppState>> for PolkaWebhookKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        check_api_key(&parts.headers, &state.config.auth.polka_api_key)?;
        Ok(Self)
    }
}
