use super::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no authorization header found")]
    MissingHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
    #[error("token is invalid or has expired")]
    InvalidOrExpired,
    #[error("expected a {expected} token, got issuer {found:?}")]
    WrongTokenKind { expected: TokenKind, found: String },
    #[error("token subject is not a user id")]
    MalformedSubject,
    #[error("token has been revoked")]
    TokenRevoked,
    #[error("invalid api key")]
    InvalidApiKey,
    #[error("token signing failed: {0}")]
    Signing(String),
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("revocation ledger unavailable: {0}")]
    Ledger(String),
}
