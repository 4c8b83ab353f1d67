use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::{Chirp, ChirpId, User, UserId};

const FIRST_ID: u64 = 1;

/// The whole persisted aggregate. Every read deserializes one of these in
/// full and every write serializes it back in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub chirps: BTreeMap<ChirpId, Chirp>,
    #[serde(default = "first_id")]
    pub next_chirp_id: ChirpId,
    #[serde(default)]
    pub users: BTreeMap<UserId, User>,
    #[serde(default = "first_id")]
    pub next_user_id: UserId,
    #[serde(default)]
    pub revoked_tokens: BTreeMap<String, DateTime<Utc>>,
}

fn first_id() -> u64 {
    FIRST_ID
}

impl Default for Document {
    fn default() -> Self {
        Self {
            chirps: BTreeMap::new(),
            next_chirp_id: FIRST_ID,
            users: BTreeMap::new(),
            next_user_id: FIRST_ID,
            revoked_tokens: BTreeMap::new(),
        }
    }
}

impl Document {
    /// Inserts a chirp under the next chirp id and advances the counter.
    pub fn insert_chirp(&mut self, body: String, author_id: UserId) -> Chirp {
        let chirp = Chirp {
            id: self.next_chirp_id,
            body,
            author_id,
        };
        self.chirps.insert(chirp.id, chirp.clone());
        self.next_chirp_id += 1;
        chirp
    }

    /// Inserts a user under the next user id and advances the counter.
    /// Email uniqueness is the caller's check.
    pub fn insert_user(&mut self, email: String, password_hash: String) -> User {
        let user = User {
            id: self.next_user_id,
            email,
            password_hash,
            upgraded: false,
        };
        self.users.insert(user.id, user.clone());
        self.next_user_id += 1;
        user
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.email == email)
    }

    /// Keeps `next_*_id` strictly above every stored id, for artifacts written
    /// by hand or by older tooling.
    pub(crate) fn restore_counters(&mut self) {
        if let Some(max) = self.chirps.keys().next_back() {
            self.next_chirp_id = self.next_chirp_id.max(max + 1);
        }
        if let Some(max) = self.users.keys().next_back() {
            self.next_user_id = self.next_user_id.max(max + 1);
        }
        self.next_chirp_id = self.next_chirp_id.max(FIRST_ID);
        self.next_user_id = self.next_user_id.max(FIRST_ID);
    }
}

#[cfg(test)]
mod tests {
    use super::Document;

    #[test]
    fn empty_document_starts_counters_at_one() {
        let doc = Document::default();
        assert_eq!(doc.next_chirp_id, 1);
        assert_eq!(doc.next_user_id, 1);
        assert!(doc.chirps.is_empty());
        assert!(doc.users.is_empty());
        assert!(doc.revoked_tokens.is_empty());
    }

    #[test]
    fn serializes_stable_top_level_fields() {
        let mut doc = Document::default();
        doc.insert_user("a@x.com".to_string(), "hash".to_string());
        doc.insert_chirp("hello".to_string(), 1);

        let value = serde_json::to_value(&doc).expect("document should serialize");
        let object = value.as_object().expect("document should be an object");
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "chirps",
                "next_chirp_id",
                "next_user_id",
                "revoked_tokens",
                "users"
            ]
        );
        assert_eq!(value["chirps"]["1"]["body"], "hello");
        assert_eq!(value["users"]["1"]["email"], "a@x.com");
        assert_eq!(value["next_chirp_id"], 2);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut doc = Document::default();
        let first = doc.insert_chirp("one".to_string(), 1);
        doc.chirps.remove(&first.id);
        let second = doc.insert_chirp("two".to_string(), 1);

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn restore_counters_moves_past_existing_ids() {
        let raw = r#"{
            "chirps": {"7": {"id": 7, "body": "hi", "author_id": 1}},
            "next_chirp_id": 3,
            "users": {"1": {"id": 1, "email": "a@x.com", "password_hash": "h", "is_chirpy_red": true}},
            "next_user_id": 0,
            "revoked_tokens": {}
        }"#;
        let mut doc: Document = serde_json::from_str(raw).expect("document should parse");
        doc.restore_counters();

        assert_eq!(doc.next_chirp_id, 8);
        assert_eq!(doc.next_user_id, 2);
        assert!(doc.users[&1].upgraded);
    }

    #[test]
    fn finds_users_by_exact_email() {
        let mut doc = Document::default();
        doc.insert_user("a@x.com".to_string(), "hash".to_string());

        assert!(doc.user_by_email("a@x.com").is_some());
        assert!(doc.user_by_email("A@x.com").is_none());
    }
}
