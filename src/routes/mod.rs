use std::sync::Arc;

use axum::{Router, middleware};

use crate::{error::AppError, middleware::json_error_middleware, state::AppState};

pub mod auth;
pub mod chirps;
pub mod health;
pub mod users;
pub mod webhooks;

pub const API_PREFIX: &str = "/api";

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(users::router(state.clone()))
        .merge(auth::router(state.clone()))
        .merge(chirps::router(state.clone()))
        .merge(webhooks::router(state));

    Router::new()
        .nest(API_PREFIX, api)
        .fallback(route_not_found)
        .layer(middleware::from_fn(json_error_middleware))
}

async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}
