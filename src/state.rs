use std::sync::Arc;

use crate::{
    auth::{AuthError, TokenService},
    config::AppConfig,
    db::DocumentStore,
    services::ServiceContext,
};

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub store: DocumentStore,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(config: AppConfig, store: DocumentStore) -> Result<Arc<Self>, AuthError> {
        let tokens = TokenService::new(config.auth.jwt_secret.as_bytes())?;
        Ok(Arc::new(Self {
            config,
            store,
            tokens,
        }))
    }

    pub fn services(&self) -> ServiceContext {
        ServiceContext::from_state(self)
    }
}
