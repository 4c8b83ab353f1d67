use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// The two token kinds. They share a claim shape and differ in issuer tag
/// and lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn issuer(&self) -> &'static str {
        match self {
            TokenKind::Access => "chirpy-access",
            TokenKind::Refresh => "chirpy-refresh",
        }
    }

    pub fn ttl(&self) -> Duration {
        match self {
            TokenKind::Access => Duration::hours(1),
            TokenKind::Refresh => Duration::hours(1440),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => f.write_str("access"),
            TokenKind::Refresh => f.write_str("refresh"),
        }
    }
}

/// Credential namespaces carried in the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// Signed user tokens.
    Bearer,
    /// Shared secret of the payment webhook.
    ApiKey,
}

impl AuthScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthScheme::Bearer => "Bearer",
            AuthScheme::ApiKey => "ApiKey",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub iss: String, // token kind tag
    pub sub: String, // decimal user id
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug)]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::{AuthScheme, TokenKind};

    #[test]
    fn issuer_tags_differ_by_kind() {
        assert_eq!(TokenKind::Access.issuer(), "chirpy-access");
        assert_eq!(TokenKind::Refresh.issuer(), "chirpy-refresh");
        assert_ne!(TokenKind::Access.issuer(), TokenKind::Refresh.issuer());
    }

    #[test]
    fn lifetimes_match_token_kinds() {
        assert_eq!(TokenKind::Access.ttl(), Duration::hours(1));
        assert_eq!(TokenKind::Refresh.ttl(), Duration::days(60));
    }

    #[test]
    fn schemes_render_header_prefixes() {
        assert_eq!(AuthScheme::Bearer.as_str(), "Bearer");
        assert_eq!(AuthScheme::ApiKey.as_str(), "ApiKey");
    }
}
