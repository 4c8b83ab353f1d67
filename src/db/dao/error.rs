use std::fmt;

use crate::db::StoreError;

#[derive(Debug)]
pub enum DaoLayerError {
    Store(StoreError),
    NotFound { entity: &'static str, id: u64 },
    AlreadyExists { entity: &'static str, key: String },
    NotOwner { entity: &'static str, id: u64 },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl fmt::Display for DaoLayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaoLayerError::Store(err) => write!(f, "Store error: {err}"),
            DaoLayerError::NotFound { entity, id } => write!(f, "{entity} not found (id={id})"),
            DaoLayerError::AlreadyExists { entity, key } => {
                write!(f, "{entity} already exists ({key})")
            }
            DaoLayerError::NotOwner { entity, id } => {
                write!(f, "{entity} is owned by another user (id={id})")
            }
        }
    }
}

impl std::error::Error for DaoLayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DaoLayerError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for DaoLayerError {
    fn from(err: StoreError) -> Self {
        DaoLayerError::Store(err)
    }
}
