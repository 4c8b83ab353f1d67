use crate::{
    db::{
        dao::{ChirpDao, DaoLayerError, SortOrder},
        entities::{Chirp, ChirpId, UserId},
    },
    error::AppError,
};

pub const MAX_CHIRP_LEN: usize = 140;

const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
const MASK: &str = "****";

#[derive(Clone, Debug)]
pub struct ChirpService {
    chirp_dao: ChirpDao,
}

impl ChirpService {
    pub fn new(chirp_dao: ChirpDao) -> Self {
        Self { chirp_dao }
    }

    /// Validates, cleans and stores a chirp written by `author_id`.
    pub async fn create_chirp(&self, body: &str, author_id: UserId) -> Result<Chirp, AppError> {
        if body.trim().chars().count() > MAX_CHIRP_LEN {
            return Err(AppError::bad_request("Chirp is too long"));
        }
        let cleaned = clean_body(body);
        Ok(self.chirp_dao.create(&cleaned, author_id).await?)
    }

    pub async fn get_chirp(&self, id: ChirpId) -> Result<Chirp, AppError> {
        Ok(self.chirp_dao.find_by_id(id).await?)
    }

    pub async fn list_chirps(
        &self,
        author_id: Option<UserId>,
        order: SortOrder,
    ) -> Result<Vec<Chirp>, AppError> {
        Ok(self.chirp_dao.list(author_id, order).await?)
    }

    /// Deletes the chirp only when `requester_id` wrote it.
    pub async fn delete_chirp(&self, id: ChirpId, requester_id: UserId) -> Result<(), AppError> {
        match self.chirp_dao.delete_owned(id, requester_id).await {
            Ok(removed) => {
                tracing::info!(chirp_id = removed.id, "deleted chirp");
                Ok(())
            }
            Err(err @ DaoLayerError::NotOwner { .. }) => {
                tracing::warn!(chirp_id = id, requester_id, "delete refused for non-author");
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Masks each space-separated word that matches a profane word,
/// ignoring case. Words with attached punctuation are left alone.
pub fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            let lowered = word.to_lowercase();
            if PROFANE_WORDS.contains(&lowered.as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
