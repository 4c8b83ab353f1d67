use axum::http::HeaderMap;

use crate::{
    auth::{
        AuthScheme, RevocationLedger, TokenBundle, TokenKind, TokenService,
        header::extract_credential, password::verify_password,
    },
    db::{
        dao::{RevokedTokenDao, UserDao},
        entities::{User, UserId},
    },
    error::AppError,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Clone, Debug)]
pub struct AuthService {
    user_dao: UserDao,
    revoked: RevokedTokenDao,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(user_dao: UserDao, revoked: RevokedTokenDao, tokens: TokenService) -> Self {
        Self {
            user_dao,
            revoked,
            tokens,
        }
    }

    /// Checks the password and issues a fresh access/refresh pair. An unknown
    /// email and a wrong password fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, TokenBundle), AppError> {
        let Some(user) = self.user_dao.find_by_email(email).await? else {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };
        if !verify_password(password, &user.password_hash) {
            tracing::warn!(user_id = user.id, "login rejected");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let bundle = TokenBundle {
            access_token: self.tokens.issue(user.id, TokenKind::Access)?,
            refresh_token: self.tokens.issue(user.id, TokenKind::Refresh)?,
        };
        Ok((user, bundle))
    }

    /// Exchanges the bearer refresh token in `headers` for a new access token.
    pub async fn refresh(&self, headers: &HeaderMap) -> Result<String, AppError> {
        let token = extract_credential(headers, AuthScheme::Bearer)?;
        Ok(self.tokens.refresh(token, &self.revoked).await?)
    }

    /// Revokes the bearer refresh token in `headers`. Revoking an already
    /// revoked token succeeds.
    pub async fn revoke(&self, headers: &HeaderMap) -> Result<(), AppError> {
        let token = extract_credential(headers, AuthScheme::Bearer)?;
        let claims = self.tokens.verify(token)?;
        let user_id = TokenService::require_kind(&claims, TokenKind::Refresh)?;
        self.revoked.revoke(token).await?;
        tracing::info!(user_id, "revoked refresh token");
        Ok(())
    }

    /// Resolves the acting user from a bearer access token.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<UserId, AppError> {
        Ok(self.tokens.parse_user_id(headers)?)
    }
}
