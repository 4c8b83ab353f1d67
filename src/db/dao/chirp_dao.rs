use super::{DaoBase, DaoLayerError, DaoResult, SortOrder};
use crate::db::{
    DocumentStore,
    entities::{Chirp, ChirpId, UserId},
};

#[derive(Clone, Debug)]
pub struct ChirpDao {
    store: DocumentStore,
}

impl DaoBase for ChirpDao {
    const ENTITY: &'static str = "Chirp";

    fn new(store: &DocumentStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    fn store(&self) -> &DocumentStore {
        &self.store
    }
}

impl ChirpDao {
    /// Stores a chirp under the next chirp id. The author must exist.
    pub async fn create(&self, body: &str, author_id: UserId) -> DaoResult<Chirp> {
        let body = body.to_string();
        self.store
            .read_modify_write(move |doc| {
                if !doc.users.contains_key(&author_id) {
                    return Err(DaoLayerError::NotFound {
                        entity: "User",
                        id: author_id,
                    });
                }
                Ok(doc.insert_chirp(body, author_id))
            })
            .await
    }

    pub async fn find_by_id(&self, id: ChirpId) -> DaoResult<Chirp> {
        let doc = self.store.read().await?;
        doc.chirps
            .get(&id)
            .cloned()
            .ok_or(DaoLayerError::NotFound {
                entity: Self::ENTITY,
                id,
            })
    }

    /// Chirps ordered by id, optionally restricted to one author.
    pub async fn list(&self, author_id: Option<UserId>, order: SortOrder) -> DaoResult<Vec<Chirp>> {
        let doc = self.store.read().await?;
        let matching = doc
            .chirps
            .into_values()
            .filter(|chirp| author_id.is_none_or(|author| chirp.author_id == author));

        Ok(match order {
            SortOrder::Asc => matching.collect(),
            SortOrder::Desc => matching.rev().collect(),
        })
    }

    /// Removes a chirp on behalf of `requester_id`. Lookup, ownership check
    /// and removal happen in one store write.
    pub async fn delete_owned(&self, id: ChirpId, requester_id: UserId) -> DaoResult<Chirp> {
        self.store
            .read_modify_write(move |doc| {
                let chirp = doc.chirps.get(&id).ok_or(DaoLayerError::NotFound {
                    entity: Self::ENTITY,
                    id,
                })?;
                if chirp.author_id != requester_id {
                    return Err(DaoLayerError::NotOwner {
                        entity: Self::ENTITY,
                        id,
                    });
                }
                doc.chirps.remove(&id).ok_or(DaoLayerError::NotFound {
                    entity: Self::ENTITY,
                    id,
                })
            })
            .await
    }
}
