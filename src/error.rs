use crate::{auth::AuthError, db::StoreError, db::dao::DaoLayerError};

/// Error taxonomy surfaced to callers of the domain operations. The HTTP
/// layer maps each variant to one status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Internal(message) => message.as_str(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::AlreadyExists { .. } => AppError::conflict(err.to_string()),
            DaoLayerError::NotOwner { .. } => AppError::forbidden(err.to_string()),
            DaoLayerError::Store(_) => AppError::internal(err.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::internal(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MalformedHeader => AppError::bad_request(err.to_string()),
            AuthError::MissingHeader
            | AuthError::InvalidOrExpired
            | AuthError::WrongTokenKind { .. }
            | AuthError::MalformedSubject
            | AuthError::TokenRevoked
            | AuthError::InvalidApiKey => AppError::unauthorized(err.to_string()),
            AuthError::Signing(_) | AuthError::Hashing(_) | AuthError::Ledger(_) => {
                AppError::internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::AppError;
    use crate::{
        auth::{AuthError, TokenKind},
        db::{StoreError, dao::DaoLayerError},
    };

    #[test]
    fn dao_errors_map_to_taxonomy() {
        assert!(matches!(
            AppError::from(DaoLayerError::NotFound { entity: "Chirp", id: 1 }),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(DaoLayerError::AlreadyExists {
                entity: "User",
                key: "a@x.com".to_string()
            }),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(DaoLayerError::NotOwner { entity: "Chirp", id: 1 }),
            AppError::Forbidden(_)
        ));
        assert!(matches!(
            AppError::from(DaoLayerError::Store(StoreError::Unreadable {
                path: PathBuf::from("database.json"),
                source: std::io::Error::other("gone"),
            })),
            AppError::Internal(_)
        ));
    }

    #[test]
    fn auth_errors_map_to_taxonomy() {
        assert!(matches!(
            AppError::from(AuthError::MalformedHeader),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(AuthError::MissingHeader),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            AppError::from(AuthError::WrongTokenKind {
                expected: TokenKind::Access,
                found: "chirpy-refresh".to_string()
            }),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            AppError::from(AuthError::TokenRevoked),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            AppError::from(AuthError::InvalidApiKey),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            AppError::from(AuthError::Signing("boom".to_string())),
            AppError::Internal(_)
        ));
    }

    #[test]
    fn message_is_display_text() {
        let err = AppError::not_found("Chirp not found (id=3)");

        assert_eq!(err.message(), "Chirp not found (id=3)");
        assert_eq!(err.to_string(), "Chirp not found (id=3)");
    }
}
