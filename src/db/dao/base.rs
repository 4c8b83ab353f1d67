use serde::Deserialize;

use crate::db::DocumentStore;

/// Shared shape of the per-collection DAOs: each one is a typed view over
/// the same [`DocumentStore`].
pub trait DaoBase: Sized {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    fn new(store: &DocumentStore) -> Self;

    fn store(&self) -> &DocumentStore;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}
