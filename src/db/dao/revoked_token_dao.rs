use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{DaoBase, DaoResult};
use crate::{
    auth::{AuthError, RevocationLedger},
    db::DocumentStore,
};

/// Ledger of revoked refresh tokens, keyed by the full signed token.
/// Entries are never pruned.
#[derive(Clone, Debug)]
pub struct RevokedTokenDao {
    store: DocumentStore,
}

impl DaoBase for RevokedTokenDao {
    const ENTITY: &'static str = "RevokedToken";

    fn new(store: &DocumentStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    fn store(&self) -> &DocumentStore {
        &self.store
    }
}

impl RevokedTokenDao {
    /// Records `token` as revoked now. Revoking again overwrites the timestamp.
    pub async fn revoke_token(&self, token: &str) -> DaoResult<DateTime<Utc>> {
        let token = token.to_string();
        let revoked_at = Utc::now();
        self.store
            .read_modify_write(move |doc| {
                doc.revoked_tokens.insert(token, revoked_at);
                Ok(revoked_at)
            })
            .await
    }

    pub async fn revoked_at(&self, token: &str) -> DaoResult<Option<DateTime<Utc>>> {
        let doc = self.store.read().await?;
        Ok(doc.revoked_tokens.get(token).copied())
    }

    pub async fn is_token_revoked(&self, token: &str) -> DaoResult<bool> {
        Ok(self.revoked_at(token).await?.is_some())
    }
}

#[async_trait]
impl RevocationLedger for RevokedTokenDao {
    async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        self.revoke_token(token)
            .await
            .map(|_| ())
            .map_err(|err| AuthError::Ledger(err.to_string()))
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, AuthError> {
        self.is_token_revoked(token)
            .await
            .map_err(|err| AuthError::Ledger(err.to_string()))
    }
}
