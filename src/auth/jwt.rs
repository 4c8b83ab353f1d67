use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use super::{
    AuthError, AuthScheme, Claims, RevocationLedger, TokenKind, header::extract_credential,
};
use crate::db::entities::UserId;

#[derive(Clone)]
pub struct JwtKeys {
    pub enc: EncodingKey,
    pub dec: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            enc: EncodingKey::from_secret(secret),
            dec: DecodingKey::from_secret(secret),
        }
    }
}

/// Issues and validates HS256 tokens signed with the process secret.
///
/// Validation is split into steps (header extraction, signature and expiry,
/// token kind) so each caller composes only the checks it needs.
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeys,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(secret: &[u8]) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::Signing("signing secret is empty".to_string()));
        }
        Ok(Self {
            keys: JwtKeys::from_secret(secret),
        })
    }

    pub fn issue(&self, user_id: UserId, kind: TokenKind) -> Result<String, AuthError> {
        self.issue_at(user_id, kind, Utc::now())
    }

    pub fn issue_at(
        &self,
        user_id: UserId,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let claims = make_claims(user_id, kind, now);
        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".into());

        encode(&header, &claims, &self.keys.enc).map_err(|err| AuthError::Signing(err.to_string()))
    }

    /// Reads the bearer token from `headers` and verifies it.
    pub fn parse_and_verify(&self, headers: &HeaderMap) -> Result<Claims, AuthError> {
        let token = extract_credential(headers, AuthScheme::Bearer)?;
        self.verify(token)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Checks signature and expiry. A token is dead from its `exp` instant on.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is compared below with `>=`; the library only rejects `exp < now`
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.keys.dec, &validation)
            .map_err(|_| AuthError::InvalidOrExpired)?;

        if now.timestamp() >= data.claims.exp {
            return Err(AuthError::InvalidOrExpired);
        }
        Ok(data.claims)
    }

    /// Accepts `claims` only if they were issued as `expected`, returning the
    /// subject's user id.
    pub fn require_kind(claims: &Claims, expected: TokenKind) -> Result<UserId, AuthError> {
        if claims.iss != expected.issuer() {
            return Err(AuthError::WrongTokenKind {
                expected,
                found: claims.iss.clone(),
            });
        }
        claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AuthError::MalformedSubject)
    }

    /// Resolves the acting user from an access token in `headers`.
    pub fn parse_user_id(&self, headers: &HeaderMap) -> Result<UserId, AuthError> {
        let claims = self.parse_and_verify(headers)?;
        Self::require_kind(&claims, TokenKind::Access)
    }

    /// Mints a fresh access token from a valid, unrevoked refresh token. The
    /// refresh token itself is left untouched.
    pub async fn refresh<L>(&self, refresh_token: &str, ledger: &L) -> Result<String, AuthError>
    where
        L: RevocationLedger + ?Sized,
    {
        let claims = self.verify(refresh_token)?;
        let user_id = Self::require_kind(&claims, TokenKind::Refresh)?;
        if ledger.is_revoked(refresh_token).await? {
            return Err(AuthError::TokenRevoked);
        }
        self.issue(user_id, TokenKind::Access)
    }
}

fn make_claims(user_id: UserId, kind: TokenKind, now: DateTime<Utc>) -> Claims {
    let iat = now.timestamp();
    Claims {
        iss: kind.issuer().to_string(),
        sub: user_id.to_string(),
        iat,
        exp: iat + kind.ttl().num_seconds(),
    }
}
