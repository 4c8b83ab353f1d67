use serde::{Deserialize, Serialize};

pub type ChirpId = u64;
pub type UserId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: ChirpId,
    pub body: String,
    pub author_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    // Older artifacts used the webhook product name for this flag.
    #[serde(default, alias = "is_chirpy_red")]
    pub upgraded: bool,
}
