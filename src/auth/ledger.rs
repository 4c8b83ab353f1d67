use async_trait::async_trait;

use super::AuthError;

/// Record of refresh tokens invalidated before their natural expiry.
///
/// Both operations are keyed by the full signed token string. `revoke` is
/// idempotent and `is_revoked` is false for tokens it has never seen.
#[async_trait]
pub trait RevocationLedger: Send + Sync {
    async fn revoke(&self, token: &str) -> Result<(), AuthError>;

    async fn is_revoked(&self, token: &str) -> Result<bool, AuthError>;
}
