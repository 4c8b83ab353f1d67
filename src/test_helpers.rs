use std::sync::Arc;

use axum::Router;

use crate::{
    config::AppConfig, db::DocumentStore, routes::router, state::AppState,
};

pub const TEST_POLKA_KEY: &str = "test-polka-key";

/// State over `store` with the given signing secret and [`TEST_POLKA_KEY`].
pub fn test_state(store: DocumentStore, secret: &[u8]) -> Arc<AppState> {
    let mut cfg = AppConfig::default();
    cfg.store.path = store.path().to_path_buf();
    cfg.auth.jwt_secret = String::from_utf8_lossy(secret).into_owned();
    cfg.auth.polka_api_key = TEST_POLKA_KEY.to_string();
    AppState::new(cfg, store).expect("test secret should be accepted")
}

pub fn test_router(store: DocumentStore, secret: &[u8]) -> Router {
    router(test_state(store, secret))
}
