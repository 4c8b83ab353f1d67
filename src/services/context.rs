use crate::{
    auth::TokenService,
    db::{DocumentStore, dao::DaoContext},
    services::{auth_service::AuthService, chirp_service::ChirpService, user_service::UserService},
    state::AppState,
};

/// Builds domain services over one store handle and one token service.
#[derive(Clone, Debug)]
pub struct ServiceContext {
    daos: DaoContext,
    tokens: TokenService,
}

impl ServiceContext {
    pub fn new(store: &DocumentStore, tokens: &TokenService) -> Self {
        Self {
            daos: DaoContext::new(store),
            tokens: tokens.clone(),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.store, &state.tokens)
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user())
    }

    pub fn chirp(&self) -> ChirpService {
        ChirpService::new(self.daos.chirp())
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(
            self.daos.user(),
            self.daos.revoked_token(),
            self.tokens.clone(),
        )
    }
}
