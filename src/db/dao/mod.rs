use super::DocumentStore;

pub mod base;
pub mod chirp_dao;
pub mod error;
pub mod revoked_token_dao;
pub mod user_dao;

pub use base::{DaoBase, SortOrder};
pub use chirp_dao::ChirpDao;
pub use error::{DaoLayerError, DaoResult};
pub use revoked_token_dao::RevokedTokenDao;
pub use user_dao::UserDao;

#[derive(Clone, Debug)]
pub struct DaoContext {
    store: DocumentStore,
}

impl DaoContext {
    pub fn new(store: &DocumentStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.store)
    }

    pub fn chirp(&self) -> ChirpDao {
        DaoBase::new(&self.store)
    }

    pub fn revoked_token(&self) -> RevokedTokenDao {
        DaoBase::new(&self.store)
    }
}
